//! # API crate — typed clients for every service the ReViews client calls
//!
//! The browser app never talks to a server of its own. Each user action maps to
//! one request against one of four external services, and this crate holds a
//! small `reqwest`-based client for each of them.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL + shared `reqwest::Client` for the reviews backend. |
//! | `auth` | `login_password` (form-encoded `/token`), `login_google` (`/google-login`), `register`. |
//! | `reviews` | `create_review` (bearer JSON `POST /resenas`) and `list_reviews`. |
//! | [`geocode`] | [`Geocoder`]: Nominatim search, first-match coordinates. |
//! | [`media`] | [`MediaUploader`]: multipart upload with an unsigned preset, returns `secure_url`. |
//! | [`models`] | Wire types (`NewReview`, `Review`, `TokenResponse`, `GeoMatch`, …). |
//! | [`error`] | [`Error`]: one enum for transport, status and validation failures. |
//!
//! ## Services
//!
//! [`Services`] bundles all clients built from one [`ReviewsConfig`] so the UI
//! can put them in a single context.
//!
//! Every client compiles for `wasm32` (reqwest's fetch backend) and natively,
//! which is how the tests run them against `wiremock`.

pub mod client;
pub mod error;
pub mod geocode;
pub mod media;
pub mod models;

mod auth;
mod reviews;

pub use client::ApiClient;
pub use error::{Error, Result};
pub use geocode::Geocoder;
pub use media::MediaUploader;
pub use models::{GeoMatch, GeoPoint, NewReview, Review, ReviewFormInput, TokenResponse};

pub use store::ReviewsConfig;

/// Shared HTTP client. Browsers set their own User-Agent; native builds
/// identify themselves as the geocoder's usage policy asks.
pub(crate) fn http_client() -> reqwest::Client {
    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .user_agent(concat!("reviews-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default()
    }
}

/// Every external service client, built from one configuration.
#[derive(Debug, Clone)]
pub struct Services {
    pub api: ApiClient,
    pub geocoder: Geocoder,
    pub media: MediaUploader,
}

impl Services {
    pub fn new(config: &ReviewsConfig) -> Self {
        let http = http_client();
        Self {
            api: ApiClient::with_client(http.clone(), &config.api.base_url),
            geocoder: Geocoder::with_client(http.clone(), &config.geocoder.base_url),
            media: MediaUploader::with_client(
                http,
                config.media.upload_url(),
                &config.media.upload_preset,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_follow_config() {
        let mut config = ReviewsConfig::default();
        config.api.base_url = "http://localhost:8000/".to_string();
        config.media.cloud_name = "demo".to_string();

        let services = Services::new(&config);

        assert_eq!(services.api.url("/token"), "http://localhost:8000/token");
        assert_eq!(
            services.media.upload_url,
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
        assert_eq!(services.geocoder.base_url, "https://nominatim.openstreetmap.org");
    }
}
