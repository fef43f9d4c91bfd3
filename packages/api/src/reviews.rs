//! Create and list reviews.

use crate::client::ApiClient;
use crate::error::{check_status, Result};
use crate::models::{NewReview, Review};

impl ApiClient {
    /// `POST /resenas` as the user owning `token`.
    pub async fn create_review(&self, token: &str, review: &NewReview) -> Result<()> {
        let res = self
            .http
            .post(self.url("/resenas"))
            .bearer_auth(token)
            .json(review)
            .send()
            .await?;

        check_status(res)?;
        tracing::info!("created review for {}", review.establishment_name);
        Ok(())
    }

    /// `GET /resenas`. The token is attached when there is one.
    pub async fn list_reviews(&self, token: Option<&str>) -> Result<Vec<Review>> {
        let mut req = self.http.get(self.url("/resenas"));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        let reviews = check_status(req.send().await?)?.json::<Vec<Review>>().await?;
        tracing::info!("loaded {} reviews", reviews.len());
        Ok(reviews)
    }
}
