//! Error type shared by every client in this crate.

use reqwest::StatusCode;

/// Failure of a single request/response exchange.
///
/// The UI renders these with `Display` inside an alert, so messages are
/// written for end users.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Transport failure or undecodable body.
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
    /// The remote answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(StatusCode),
    /// The geocoder returned no candidates.
    #[error("no match found for \"{0}\"")]
    NotFound(String),
    /// A required form value or response field is absent.
    #[error("missing {0}")]
    MissingField(&'static str),
    /// A form value could not be parsed.
    #[error("invalid {field}: \"{value}\"")]
    InvalidField { field: &'static str, value: String },
    /// The geocoder returned a coordinate that is not a number.
    #[error("invalid coordinate \"{0}\"")]
    InvalidCoordinate(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Turn a non-success response into [`Error::Status`].
pub(crate) fn check_status(res: reqwest::Response) -> Result<reqwest::Response> {
    let status = res.status();
    if status.is_success() {
        Ok(res)
    } else {
        tracing::warn!("{} answered {}", res.url(), status);
        Err(Error::Status(status))
    }
}
