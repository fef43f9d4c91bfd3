//! Thin wrappers over the browser window: blocking alerts and full-page
//! navigation. Native builds only log.

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("alert: {}", message);
    }
}

/// Log a failed exchange and alert the user.
pub fn alert_error(context: &str, err: &api::Error) {
    tracing::error!("{}: {}", context, err);
    alert(&format!("{context}: {err}"));
}

/// Load `href` as a new page.
pub fn navigate(href: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("navigate to {}", href);
    }
}

/// Reload the current page.
pub fn reload() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
