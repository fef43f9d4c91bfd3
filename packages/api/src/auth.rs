//! Password, federated and registration exchanges against the reviews backend.

use crate::client::ApiClient;
use crate::error::{check_status, Result};
use crate::models::{Credentials, GoogleLogin, TokenResponse};

impl ApiClient {
    /// Exchange email/password for a bearer token.
    ///
    /// `POST /token` with an `application/x-www-form-urlencoded` body, the
    /// OAuth2 password-grant shape (`username` carries the email).
    pub async fn login_password(&self, username: &str, password: &str) -> Result<TokenResponse> {
        let res = self
            .http
            .post(self.url("/token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        let token = check_status(res)?.json::<TokenResponse>().await?;
        tracing::info!("password login succeeded for {}", username);
        Ok(token)
    }

    /// Exchange a Google ID token credential for a bearer token.
    pub async fn login_google(&self, credential: &str) -> Result<TokenResponse> {
        let res = self
            .http
            .post(self.url("/google-login"))
            .json(&GoogleLogin {
                token: credential.to_string(),
            })
            .send()
            .await?;

        let token = check_status(res)?.json::<TokenResponse>().await?;
        tracing::info!("google login succeeded");
        Ok(token)
    }

    /// Create a password account. Does not log in.
    pub async fn register(&self, email: &str, password: &str) -> Result<()> {
        let res = self
            .http
            .post(self.url("/register"))
            .json(&Credentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        check_status(res)?;
        tracing::info!("registered {}", email);
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::Error;
    use wiremock::matchers::{body_json, body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::with_client(reqwest::Client::new(), &server.uri())
    }

    fn token_body() -> serde_json::Value {
        serde_json::json!({ "access_token": "jwt-123", "token_type": "bearer" })
    }

    #[tokio::test]
    async fn login_password_posts_form_and_returns_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .and(header("Content-Type", "application/x-www-form-urlencoded"))
            .and(body_string("username=pepe%40test.com&password=1234"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
            .expect(1)
            .mount(&server)
            .await;

        let token = client(&server)
            .login_password("pepe@test.com", "1234")
            .await
            .unwrap();

        assert_eq!(token.access_token, "jwt-123");
        assert_eq!(token.token_type, "bearer");
    }

    #[tokio::test]
    async fn login_password_fails_on_bad_credentials() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server).login_password("pepe@test.com", "wrong").await;

        assert!(matches!(result, Err(Error::Status(s)) if s.as_u16() == 400));
    }

    #[tokio::test]
    async fn login_google_sends_credential_as_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/google-login"))
            .and(body_json(serde_json::json!({ "token": "google-id-token" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
            .expect(1)
            .mount(&server)
            .await;

        let token = client(&server).login_google("google-id-token").await.unwrap();

        assert_eq!(token.access_token, "jwt-123");
    }

    #[tokio::test]
    async fn login_google_rejected_token_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/google-login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        assert!(client(&server).login_google("forged").await.is_err());
    }

    #[tokio::test]
    async fn register_existing_email_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/register"))
            .and(body_json(
                serde_json::json!({ "email": "pepe@test.com", "password": "1234" }),
            ))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(serde_json::json!({ "detail": "Email ya existe" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server).register("pepe@test.com", "1234").await;

        assert!(matches!(result, Err(Error::Status(_))));
    }

    #[tokio::test]
    async fn base_url_trailing_slash_is_ignored() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "msg": "Ok" })))
            .expect(1)
            .mount(&server)
            .await;

        let api = ApiClient::with_client(reqwest::Client::new(), &format!("{}/", server.uri()));
        assert!(api.register("ana@test.com", "secret").await.is_ok());
    }
}
