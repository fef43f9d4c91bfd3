//! Wire models for the reviews backend, the geocoder and the media host.

mod auth;
mod geo;
mod review;

pub use auth::{Credentials, GoogleLogin, TokenResponse};
pub use geo::{GeoMatch, GeoPoint};
pub use review::{NewReview, Review, ReviewFormInput};
