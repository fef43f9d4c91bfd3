//! Helpers for talking to browser-only libraries (Leaflet, Google Identity
//! Services) through `document::eval`.

use dioxus::prelude::*;

/// Escape a string so it's safe to embed inside a JS string literal (double-quoted).
pub fn js_string_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // keeps "</script>" and friends inert
            '<' => out.push_str("\\u003c"),
            c if c < '\x20' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Escape text for insertion into HTML markup (map popups).
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JS that injects `<script id=… src=…>` once and reports `true` on load,
/// `false` on error. A second caller waits on the same element.
pub fn load_script_js(id: &str, src: &str) -> String {
    format!(
        r#"(function() {{
            var s = document.getElementById({id_js});
            if (s) {{
                if (s.dataset.loaded) {{ dioxus.send(true); return; }}
                s.addEventListener('load', function() {{ dioxus.send(true); }});
                s.addEventListener('error', function() {{ dioxus.send(false); }});
                return;
            }}
            s = document.createElement('script');
            s.id = {id_js};
            s.src = {src_js};
            s.async = true;
            s.onload = function() {{ s.dataset.loaded = '1'; dioxus.send(true); }};
            s.onerror = function() {{ dioxus.send(false); }};
            document.head.appendChild(s);
        }})();"#,
        id_js = js_string_escape(id),
        src_js = js_string_escape(src),
    )
}

/// JS that adds a stylesheet `<link>` once.
pub fn load_stylesheet_js(id: &str, href: &str) -> String {
    format!(
        r#"(function() {{
            if (document.getElementById({id_js})) return;
            var link = document.createElement('link');
            link.id = {id_js};
            link.rel = 'stylesheet';
            link.href = {href_js};
            document.head.appendChild(link);
        }})();"#,
        id_js = js_string_escape(id),
        href_js = js_string_escape(href),
    )
}

/// Load an external script and wait for it. Returns whether it loaded.
pub async fn load_script(id: &str, src: &str) -> bool {
    let mut eval = document::eval(&load_script_js(id, src));
    match eval.recv::<bool>().await {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("loading {}: {:?}", src, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escape() {
        assert_eq!(js_string_escape("plain"), "\"plain\"");
        assert_eq!(js_string_escape("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
        assert_eq!(js_string_escape("a\\b"), "\"a\\\\b\"");
        assert_eq!(js_string_escape("</script>"), "\"\\u003c/script>\"");
        assert_eq!(js_string_escape("\u{1}"), "\"\\u0001\"");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape("<img src=x onerror='boom'> & \"co\""),
            "&lt;img src=x onerror=&#39;boom&#39;&gt; &amp; &quot;co&quot;"
        );
        assert_eq!(html_escape("Café Central"), "Café Central");
    }

    #[test]
    fn test_load_script_js_embeds_escaped_values() {
        let js = load_script_js("leaflet-js", "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js");
        assert!(js.contains(r#"document.getElementById("leaflet-js")"#));
        assert!(js.contains(r#"s.src = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";"#));
        assert!(js.contains("dioxus.send(true)"));
    }

    #[test]
    fn test_load_stylesheet_js() {
        let js = load_stylesheet_js("leaflet-css", "https://example.test/a.css");
        assert!(js.contains(r#"link.href = "https://example.test/a.css";"#));
    }
}
