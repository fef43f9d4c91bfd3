use reqwest::Client;

/// HTTP client for the reviews backend (auth + reviews endpoints).
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) http: Client,
    pub(crate) base_url: String,
}

impl ApiClient {
    /// Build on an existing `reqwest::Client` so every service shares one
    /// connection pool.
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
