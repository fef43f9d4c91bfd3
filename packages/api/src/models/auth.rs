use serde::{Deserialize, Serialize};

/// Bearer token issued by `/token` and `/google-login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Body of the federated login exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleLogin {
    /// ID token credential handed out by Google Identity Services.
    pub token: String,
}

/// Body of `/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
