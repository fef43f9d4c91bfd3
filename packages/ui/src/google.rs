//! "Sign in with Google" via Google Identity Services.
//!
//! GIS renders its own button and hands back an ID token credential through a
//! JS callback. The callback is bridged to Rust with a long-lived
//! `document::eval`; every credential is exchanged with the backend for a
//! bearer token.

use dioxus::prelude::*;

use crate::auth::{sign_in, use_auth};
use crate::script::{js_string_escape, load_script};
use crate::{alert_error, use_config, use_services};

const GIS_CLIENT_JS: &str = "https://accounts.google.com/gsi/client";

fn render_button_js(container_id: &str, client_id: &str) -> String {
    format!(
        r#"(function() {{
            var el = document.getElementById({id_js});
            if (!el || typeof google === 'undefined') return;
            google.accounts.id.initialize({{
                client_id: {client_js},
                callback: function(response) {{ dioxus.send(response.credential); }}
            }});
            google.accounts.id.renderButton(el, {{ theme: 'outline', size: 'large' }});
        }})();"#,
        id_js = js_string_escape(container_id),
        client_js = js_string_escape(client_id),
    )
}

/// Google sign-in button. Renders nothing when no client id is configured.
#[component]
pub fn GoogleSignIn(#[props(default = "google-signin".to_string())] id: String) -> Element {
    let client_id = use_config().google.client_id;
    let services = use_services();
    let mut auth = use_auth();

    {
        let id = id.clone();
        let client_id = client_id.clone();
        use_effect(move || {
            if client_id.is_empty() {
                return;
            }
            let id = id.clone();
            let client_id = client_id.clone();
            let services = services.clone();
            spawn(async move {
                if !load_script("google-gsi", GIS_CLIENT_JS).await {
                    tracing::warn!("Google Identity Services unavailable");
                    return;
                }
                let mut bridge = document::eval(&render_button_js(&id, &client_id));
                while let Ok(credential) = bridge.recv::<String>().await {
                    tracing::info!("Google credential received");
                    match services.api.login_google(&credential).await {
                        Ok(token) => sign_in(&mut auth, token.access_token),
                        Err(e) => alert_error("Google sign-in failed", &e),
                    }
                }
            });
        });
    }

    if client_id.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "{id}",
            class: "google-signin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_button_js() {
        let js = render_button_js("google-signin", "123.apps.googleusercontent.com");
        assert!(js.contains(r#"client_id: "123.apps.googleusercontent.com""#));
        assert!(js.contains("dioxus.send(response.credential)"));
        assert!(js.contains(r#"document.getElementById("google-signin")"#));
    }
}
