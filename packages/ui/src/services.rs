//! Shared service clients and configuration.
//!
//! [`ServicesProvider`] builds every HTTP client once from the app's
//! [`ReviewsConfig`] and exposes both through context.

use api::Services;
use dioxus::prelude::*;
use store::ReviewsConfig;

/// Get the service clients.
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Get the client configuration.
pub fn use_config() -> ReviewsConfig {
    use_context::<ReviewsConfig>()
}

#[component]
pub fn ServicesProvider(config: ReviewsConfig, children: Element) -> Element {
    use_context_provider(|| Services::new(&config));
    use_context_provider(|| config.clone());

    rsx! {
        {children}
    }
}
