//! # Review records
//!
//! Two shapes cross the wire:
//!
//! - [`NewReview`] is the body of `POST /resenas`. Only the fields the user
//!   enters (plus an optional hosted image URL).
//! - [`Review`] is an item of `GET /resenas`. It repeats the user fields and
//!   adds the audit data the backend attaches on create: author, the raw
//!   token used, and the token's issue/expiry timestamps.
//!
//! The backend speaks Spanish field names; serde renames keep the Rust side
//! in English. Audit fields are optional on decode so older records without
//! them still list.
//!
//! [`ReviewFormInput`] carries the raw form strings. [`NewReview::from_form`]
//! is the only validation on the client: name and latitude must be present,
//! numbers must parse, and coordinates must be finite.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::GeoPoint;

/// Raw values read from the review form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFormInput {
    pub name: String,
    pub address: String,
    pub latitude: String,
    pub longitude: String,
    pub rating: String,
}

/// Body of the create-review request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReview {
    #[serde(rename = "nombre_establecimiento")]
    pub establishment_name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "latitud")]
    pub latitude: f64,
    #[serde(rename = "longitud")]
    pub longitude: f64,
    #[serde(rename = "valoracion")]
    pub rating: i32,
    #[serde(rename = "imagen_url")]
    pub image_url: Option<String>,
}

impl NewReview {
    /// Assemble a record from form values.
    pub fn from_form(input: &ReviewFormInput, image_url: Option<String>) -> Result<Self> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(Error::MissingField("establishment name"));
        }
        if input.latitude.trim().is_empty() {
            return Err(Error::MissingField("latitude"));
        }

        Ok(Self {
            establishment_name: name.to_string(),
            address: input.address.trim().to_string(),
            latitude: parse_coordinate("latitude", &input.latitude)?,
            longitude: parse_coordinate("longitude", &input.longitude)?,
            rating: parse_field("rating", &input.rating)?,
            image_url: image_url.filter(|url| !url.is_empty()),
        })
    }
}

fn parse_field<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| Error::InvalidField {
        field,
        value: raw.to_string(),
    })
}

/// `NaN` and infinities parse as `f64` but serialize as `null`.
fn parse_coordinate(field: &'static str, raw: &str) -> Result<f64> {
    let value: f64 = parse_field(field, raw)?;
    if !value.is_finite() {
        return Err(Error::InvalidField {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

fn not_available() -> String {
    "N/A".to_string()
}

/// A stored review as returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "nombre_establecimiento")]
    pub establishment_name: String,
    #[serde(rename = "direccion", default)]
    pub address: String,
    #[serde(rename = "latitud")]
    pub latitude: f64,
    #[serde(rename = "longitud")]
    pub longitude: f64,
    #[serde(rename = "valoracion")]
    pub rating: i32,
    #[serde(rename = "imagen_url", default)]
    pub image_url: Option<String>,
    /// Email of the user whose token created the review.
    #[serde(rename = "autor_email", default)]
    pub author: Option<String>,
    /// Raw bearer token used on create.
    #[serde(rename = "token_usado", default)]
    pub token_used: Option<String>,
    #[serde(rename = "token_emision", default = "not_available")]
    pub token_issued_at: String,
    #[serde(rename = "token_expira", default)]
    pub token_expires_at: Option<String>,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<String>,
}

impl Review {
    /// Empty strings count as no image.
    pub fn has_image(&self) -> bool {
        self.image().is_some()
    }

    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Card heading: `"<name> (<rating> ⭐)"`.
    pub fn title(&self) -> String {
        format!("{} ({} \u{2B50})", self.establishment_name, self.rating)
    }
}
