//! Review creation form.
//!
//! The address is geocoded on demand ("Find coordinates"), which fills the
//! read-only latitude/longitude fields and drops a marker. Saving uploads the
//! optional image first, then posts the review with the session token. Any
//! failure alerts and stops; success reloads the page so the list refreshes.

use api::{Error, GeoPoint, NewReview, ReviewFormInput};
use dioxus::prelude::*;

use crate::{alert, alert_error, reload, use_auth, use_config, use_map, use_services, MapFocus};

const SELECTED_LOCATION: &str = "Selected location";

/// Trimmed address to geocode, or the alert for an empty one.
fn address_query(raw: &str) -> Result<String, &'static str> {
    let query = raw.trim();
    if query.is_empty() {
        return Err("Enter an address");
    }
    Ok(query.to_string())
}

fn selected_location(point: GeoPoint, zoom: u8) -> MapFocus {
    MapFocus {
        point,
        zoom,
        popup_html: SELECTED_LOCATION.to_string(),
    }
}

/// Alert text for a failed lookup.
fn locate_failure(err: &Error) -> String {
    match err {
        Error::NotFound(_) => "Address not found".to_string(),
        e => format!("Geocoding failed: {e}"),
    }
}

/// File picked in the image input, read eagerly.
#[derive(Clone, Debug, PartialEq)]
struct SelectedImage {
    name: String,
    bytes: Vec<u8>,
}

#[component]
pub fn ReviewForm() -> Element {
    let services = use_services();
    let focus_zoom = use_config().map.focus_zoom;
    let auth = use_auth();
    let map = use_map();

    let mut name = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut latitude = use_signal(String::new);
    let mut longitude = use_signal(String::new);
    let mut rating = use_signal(|| "5".to_string());
    let mut image = use_signal(|| Option::<SelectedImage>::None);
    let mut saving = use_signal(|| false);
    let mut uploading = use_signal(|| false);

    let geocoder = services.geocoder.clone();
    let find_coordinates = move |_| {
        let geocoder = geocoder.clone();
        async move {
            let query = match address_query(&address()) {
                Ok(query) => query,
                Err(message) => {
                    alert(message);
                    return;
                }
            };
            match geocoder.locate(&query).await {
                Ok(point) => {
                    latitude.set(point.lat.to_string());
                    longitude.set(point.lng.to_string());
                    map.focus(&selected_location(point, focus_zoom));
                }
                Err(e) => {
                    tracing::warn!("geocoding {:?}: {}", query, e);
                    alert(&locate_failure(&e));
                }
            }
        }
    };

    let pick_image = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            image.set(None);
            return;
        };
        let file_name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => image.set(Some(SelectedImage {
                name: file_name,
                bytes: bytes.to_vec(),
            })),
            Err(e) => {
                tracing::error!("reading {}: {}", file_name, e);
                alert("Could not read the selected image");
                image.set(None);
            }
        }
    };

    let api = services.api.clone();
    let media = services.media.clone();
    let save = move |_| {
        let api = api.clone();
        let media = media.clone();
        async move {
            let input = ReviewFormInput {
                name: name(),
                address: address(),
                latitude: latitude(),
                longitude: longitude(),
                rating: rating(),
            };
            if input.name.trim().is_empty() || input.latitude.trim().is_empty() {
                alert("Missing data (click Find coordinates)");
                return;
            }
            let Some(token) = auth().token else {
                alert("Sign in to publish a review");
                return;
            };

            saving.set(true);

            let mut image_url = None;
            if let Some(file) = image() {
                uploading.set(true);
                let uploaded = media.upload(&file.name, file.bytes).await;
                uploading.set(false);
                match uploaded {
                    Ok(url) => image_url = Some(url),
                    Err(e) => {
                        saving.set(false);
                        alert_error("Image upload failed", &e);
                        return;
                    }
                }
            }

            let result = match NewReview::from_form(&input, image_url) {
                Ok(review) => api.create_review(&token, &review).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    alert("Review saved!");
                    reload();
                }
                Err(e) => {
                    saving.set(false);
                    alert_error("Error saving review", &e);
                }
            }
        }
    };

    let save_label = if uploading() {
        "Uploading..."
    } else if saving() {
        "Saving..."
    } else {
        "Save review"
    };

    rsx! {
        div {
            class: "review-form",

            h3 { "New review" }

            label { "Establishment" }
            input {
                r#type: "text",
                placeholder: "Name",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }

            label { "Address" }
            div {
                class: "row",
                input {
                    r#type: "text",
                    placeholder: "Street, number, city",
                    value: "{address}",
                    oninput: move |evt| address.set(evt.value()),
                }
                button {
                    r#type: "button",
                    class: "secondary",
                    onclick: find_coordinates,
                    "Find coordinates"
                }
            }

            div {
                class: "row",
                input {
                    r#type: "text",
                    placeholder: "Latitude",
                    readonly: true,
                    value: "{latitude}",
                }
                input {
                    r#type: "text",
                    placeholder: "Longitude",
                    readonly: true,
                    value: "{longitude}",
                }
            }

            label { "Rating" }
            select {
                value: "{rating}",
                onchange: move |evt| rating.set(evt.value()),
                for stars in (1..=5).rev() {
                    option {
                        key: "{stars}",
                        value: "{stars}",
                        "{stars} \u{2B50}"
                    }
                }
            }

            label { "Photo" }
            input {
                r#type: "file",
                accept: "image/*",
                onchange: pick_image,
            }

            button {
                r#type: "button",
                class: "primary",
                disabled: saving(),
                onclick: save,
                "{save_label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MapConfig;

    #[test]
    fn test_empty_address_alerts() {
        assert_eq!(address_query(""), Err("Enter an address"));
        assert_eq!(address_query("  \t "), Err("Enter an address"));
        assert_eq!(
            address_query(" Calle Larios 1 "),
            Ok("Calle Larios 1".to_string())
        );
    }

    #[test]
    fn test_unknown_address_alerts_not_found() {
        let err = Error::NotFound("Calle Falsa 123".to_string());
        assert_eq!(locate_failure(&err), "Address not found");

        let err = Error::InvalidCoordinate("north".to_string());
        assert_eq!(
            locate_failure(&err),
            "Geocoding failed: invalid coordinate \"north\""
        );
    }

    #[test]
    fn test_found_address_focuses_at_focus_zoom() {
        let point = GeoPoint::new(36.7196, -4.4216);
        let focus = selected_location(point, MapConfig::default().focus_zoom);
        assert_eq!(focus.point, point);
        assert_eq!(focus.zoom, 16);
        assert_eq!(focus.popup_html, "Selected location");
    }
}
