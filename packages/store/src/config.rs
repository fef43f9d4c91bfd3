//! # Client configuration — `reviews.toml`
//!
//! Defines the TOML file the web binary embeds at build time
//! (filename: [`ReviewsConfig::filename`] = `"reviews.toml"`). It names every
//! external service the client talks to and the initial map view.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://proyecto-mapa-con-login.onrender.com"
//!
//! [geocoder]
//! base_url = "https://nominatim.openstreetmap.org"
//!
//! [media]
//! base_url = "https://api.cloudinary.com/v1_1"
//! cloud_name = "dly4a0pgx"
//! upload_preset = "examen_preset"
//!
//! [map]
//! center_lat = 36.7213
//! center_lng = -4.4214
//! zoom = 13
//! focus_zoom = 16
//! search_zoom = 15
//! tile_url = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
//!
//! [google]
//! client_id = "…apps.googleusercontent.com"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ReviewsConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Reviews/auth backend base URL. |
//! | [`GeocoderConfig`] | Nominatim-compatible search endpoint. |
//! | [`MediaConfig`] | Hosted media upload target and unsigned preset. |
//! | [`MapConfig`] | Initial center, zoom levels and basemap tile template. |
//! | [`GoogleConfig`] | Google Identity Services client id. |
//!
//! Every field has a serde default so a missing or partial file is equivalent
//! to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `reviews.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewsConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub google: GoogleConfig,
}

/// Remote reviews and auth API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

fn default_api_url() -> String {
    "https://proyecto-mapa-con-login.onrender.com".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

/// Public geocoding endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeocoderConfig {
    #[serde(default = "default_geocoder_url")]
    pub base_url: String,
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoder_url(),
        }
    }
}

/// Hosted media upload target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaConfig {
    #[serde(default = "default_media_url")]
    pub base_url: String,
    #[serde(default = "default_cloud_name")]
    pub cloud_name: String,
    /// Unsigned upload preset sent with every file.
    #[serde(default = "default_upload_preset")]
    pub upload_preset: String,
}

fn default_media_url() -> String {
    "https://api.cloudinary.com/v1_1".to_string()
}

fn default_cloud_name() -> String {
    "dly4a0pgx".to_string()
}

fn default_upload_preset() -> String {
    "examen_preset".to_string()
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            base_url: default_media_url(),
            cloud_name: default_cloud_name(),
            upload_preset: default_upload_preset(),
        }
    }
}

impl MediaConfig {
    /// Full image upload URL: `{base_url}/{cloud_name}/image/upload`.
    pub fn upload_url(&self) -> String {
        format!(
            "{}/{}/image/upload",
            self.base_url.trim_end_matches('/'),
            self.cloud_name
        )
    }
}

/// Map widget settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    /// Zoom used after geocoding the review address.
    #[serde(default = "default_focus_zoom")]
    pub focus_zoom: u8,
    /// Zoom used after a map-only search.
    #[serde(default = "default_search_zoom")]
    pub search_zoom: u8,
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
}

fn default_center_lat() -> f64 {
    36.7213
}

fn default_center_lng() -> f64 {
    -4.4214
}

fn default_zoom() -> u8 {
    13
}

fn default_focus_zoom() -> u8 {
    16
}

fn default_search_zoom() -> u8 {
    15
}

fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            zoom: default_zoom(),
            focus_zoom: default_focus_zoom(),
            search_zoom: default_search_zoom(),
            tile_url: default_tile_url(),
        }
    }
}

/// Federated login settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoogleConfig {
    /// Empty disables the Google sign-in button.
    #[serde(default = "default_google_client_id")]
    pub client_id: String,
}

fn default_google_client_id() -> String {
    "1056114087976-l4huskim3dpijrms6j8brmqj6ha0h0rh.apps.googleusercontent.com".to_string()
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            client_id: default_google_client_id(),
        }
    }
}

impl ReviewsConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "reviews.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ReviewsConfig::from_toml("").unwrap();
        assert_eq!(config, ReviewsConfig::default());
        assert_eq!(config.map.zoom, 13);
        assert_eq!(config.media.upload_preset, "examen_preset");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = ReviewsConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:8000"

            [map]
            zoom = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.map.zoom, 10);
        assert_eq!(config.map.center_lat, 36.7213);
        assert_eq!(config.map.focus_zoom, 16);
        assert_eq!(config.geocoder, GeocoderConfig::default());
    }

    #[test]
    fn test_full_map_section() {
        let config = ReviewsConfig::from_toml(
            r#"
            [map]
            center_lat = 40.4168
            center_lng = -3.7038
            zoom = 12
            focus_zoom = 17
            search_zoom = 14
            tile_url = "https://tiles.example.org/{z}/{x}/{y}.png"
            "#,
        )
        .unwrap();

        assert_eq!(config.map.center_lat, 40.4168);
        assert_eq!(config.map.focus_zoom, 17);
        assert_eq!(config.map.search_zoom, 14);
        assert_eq!(config.map.tile_url, "https://tiles.example.org/{z}/{x}/{y}.png");
    }

    #[test]
    fn test_upload_url() {
        let media = MediaConfig {
            base_url: "http://127.0.0.1:9000/".to_string(),
            cloud_name: "demo".to_string(),
            upload_preset: "p".to_string(),
        };
        assert_eq!(media.upload_url(), "http://127.0.0.1:9000/demo/image/upload");
        assert_eq!(
            MediaConfig::default().upload_url(),
            "https://api.cloudinary.com/v1_1/dly4a0pgx/image/upload"
        );
    }

    #[test]
    fn test_to_toml_parses_back() {
        let mut config = ReviewsConfig::default();
        config.api.base_url = "http://localhost:8000".to_string();
        let text = config.to_toml().unwrap();
        assert!(text.contains("[api]"));
        assert_eq!(ReviewsConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(ReviewsConfig::from_toml("[map]\nzoom = \"far\"").is_err());
    }
}
