//! Review cards and their map markers.

use api::Review;
use dioxus::prelude::*;

use crate::script::html_escape;
use crate::{alert_error, use_auth, use_map, use_services};

/// Popup shown on a review's marker: bold name, then the rating.
pub fn review_popup_html(review: &Review) -> String {
    format!(
        "<b>{}</b><br>{} stars",
        html_escape(&review.establishment_name),
        review.rating
    )
}

/// Fetches every review once and renders a card per review. When both the
/// list and the map are available, each review gets a marker.
#[component]
pub fn ReviewList() -> Element {
    let services = use_services();
    let auth = use_auth();
    let map = use_map();

    let reviews = use_resource(move || {
        let api = services.api.clone();
        async move {
            let token = auth.peek().token.clone();
            match api.list_reviews(token.as_deref()).await {
                Ok(reviews) => reviews,
                Err(e) => {
                    alert_error("Could not load reviews", &e);
                    Vec::new()
                }
            }
        }
    });

    use_effect(move || {
        if !map.is_ready() {
            return;
        }
        if let Some(list) = &*reviews.read() {
            for review in list {
                map.add_marker(review.position(), &review_popup_html(review), false);
            }
        }
    });

    let body = match reviews.read().clone() {
        None => rsx! {
            p { class: "muted", "Loading reviews..." }
        },
        Some(list) if list.is_empty() => rsx! {
            p { class: "muted", "No reviews yet." }
        },
        Some(list) => rsx! {
            for (i, review) in list.into_iter().enumerate() {
                ReviewCard { key: "{i}", review: review }
            }
        },
    };

    rsx! {
        div {
            class: "review-list",
            h3 { "Reviews" }
            {body}
        }
    }
}

#[component]
pub fn ReviewCard(review: Review) -> Element {
    let title = review.title();
    let author = review.author.clone().unwrap_or_default();
    let expires = review.token_expires_at.clone().unwrap_or_default();
    let raw_token = review.token_used.clone().unwrap_or_default();

    rsx! {
        div {
            class: "card",

            h4 { "{title}" }
            p { "\u{1F4CD} {review.address}" }

            if let Some(src) = review.image() {
                img {
                    class: "card-image",
                    src: "{src}",
                    alt: "{review.establishment_name}",
                }
            }

            details {
                class: "card-details",
                summary { "Technical details (token)" }
                p { b { "Author: " } "{author}" }
                p { b { "Issued: " } "{review.token_issued_at}" }
                p { b { "Expires: " } "{expires}" }
                p {
                    class: "raw-token",
                    b { "Raw token: " }
                    "{raw_token}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_escapes_name() {
        let review: Review = serde_json::from_value(serde_json::json!({
            "nombre_establecimiento": "<Tapas & Co>",
            "direccion": "",
            "latitud": 0.0,
            "longitud": 0.0,
            "valoracion": 4
        }))
        .unwrap();

        assert_eq!(
            review_popup_html(&review),
            "<b>&lt;Tapas &amp; Co&gt;</b><br>4 stars"
        );
    }
}
