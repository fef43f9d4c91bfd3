use dioxus::prelude::*;

use store::ReviewsConfig;
use ui::{AuthProvider, ServicesProvider};
use views::{Login, Register, Reviews};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Reviews {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Client configuration, baked in at build time.
const CONFIG_TOML: &str = include_str!("../reviews.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn load_config() -> ReviewsConfig {
    match ReviewsConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("invalid {}, using defaults: {}", ReviewsConfig::filename(), e);
            ReviewsConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::REVIEWS_CSS }

        ServicesProvider {
            config: config,
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = ReviewsConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config.media.upload_preset, "examen_preset");
        assert_eq!(config.map.zoom, 13);
        assert!(!config.google.client_id.is_empty());
    }
}
