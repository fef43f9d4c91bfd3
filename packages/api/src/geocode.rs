//! # Address lookup against a Nominatim-compatible endpoint
//!
//! `GET {base}/search?format=json&q=<address>` answers with an array of
//! candidates, best first. Coordinates come back as strings; [`Geocoder::locate`]
//! takes the first candidate and parses them.

use reqwest::Client;

use crate::error::{check_status, Error, Result};
use crate::models::{GeoMatch, GeoPoint};

/// Free-text address geocoder.
#[derive(Debug, Clone)]
pub struct Geocoder {
    http: Client,
    pub(crate) base_url: String,
}

impl Geocoder {
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// All candidates for `query`, in the order the service ranks them.
    pub async fn search(&self, query: &str) -> Result<Vec<GeoMatch>> {
        let res = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[("format", "json"), ("q", query)])
            .send()
            .await?;

        Ok(check_status(res)?.json::<Vec<GeoMatch>>().await?)
    }

    /// Coordinates of the best candidate.
    pub async fn locate(&self, query: &str) -> Result<GeoPoint> {
        let matches = self.search(query).await?;
        let Some(first) = matches.first() else {
            tracing::info!("geocoder has no match for {:?}", query);
            return Err(Error::NotFound(query.to_string()));
        };
        let point = first.point()?;
        tracing::info!("geocoded {:?} to {},{}", query, point.lat, point.lng);
        Ok(point)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn geocoder(server: &MockServer) -> Geocoder {
        Geocoder::with_client(reqwest::Client::new(), &server.uri())
    }

    #[tokio::test]
    async fn locate_uses_first_match() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("format", "json"))
            .and(query_param("q", "Calle Larios 1, Málaga"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "lat": "36.7196", "lon": "-4.4216", "display_name": "Calle Larios, Málaga" },
                { "lat": "40.0", "lon": "-3.0", "display_name": "Elsewhere" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let point = geocoder(&server)
            .locate("Calle Larios 1, Málaga")
            .await
            .unwrap();

        assert_eq!(point, GeoPoint::new(36.7196, -4.4216));
    }

    #[tokio::test]
    async fn locate_without_matches_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let result = geocoder(&server).locate("nowhere at all").await;

        assert!(matches!(result, Err(Error::NotFound(q)) if q == "nowhere at all"));
    }

    #[tokio::test]
    async fn locate_with_bad_coordinate_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{ "lat": "", "lon": "-4.42" }])),
            )
            .mount(&server)
            .await;

        let result = geocoder(&server).locate("Málaga").await;

        assert!(matches!(result, Err(Error::InvalidCoordinate(_))));
    }

    #[tokio::test]
    async fn search_returns_every_candidate() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "lat": "1", "lon": "2" },
                { "lat": "3", "lon": "4" }
            ])))
            .mount(&server)
            .await;

        let matches = geocoder(&server).search("x").await.unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1].display_name, None);
    }

    #[tokio::test]
    async fn rate_limited_lookup_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        assert!(matches!(
            geocoder(&server).locate("x").await,
            Err(Error::Status(_))
        ));
    }
}
