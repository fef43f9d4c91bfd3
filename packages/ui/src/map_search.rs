//! Map-only address search: recentres the map and marks the match without
//! touching the review form.

use api::{GeoMatch, Result};
use dioxus::prelude::*;

use crate::script::html_escape;
use crate::{alert_error, use_config, use_map, use_services, MapFocus};

/// Trimmed query, or `None` when there is nothing to look up.
fn search_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    (!query.is_empty()).then(|| query.to_string())
}

/// First match labelled with the query. `None` leaves the map where it is.
fn search_focus(query: &str, matches: &[GeoMatch], zoom: u8) -> Option<Result<MapFocus>> {
    let first = matches.first()?;
    Some(first.point().map(|point| MapFocus {
        point,
        zoom,
        popup_html: html_escape(query),
    }))
}

#[component]
pub fn MapSearch() -> Element {
    let geocoder = use_services().geocoder;
    let search_zoom = use_config().map.search_zoom;
    let map = use_map();
    let mut query = use_signal(String::new);

    let search = move |_| {
        let geocoder = geocoder.clone();
        async move {
            let Some(q) = search_query(&query()) else {
                return;
            };
            let matches = match geocoder.search(&q).await {
                Ok(matches) => matches,
                Err(e) => {
                    alert_error("Search failed", &e);
                    return;
                }
            };
            match search_focus(&q, &matches, search_zoom) {
                Some(Ok(focus)) => map.focus(&focus),
                Some(Err(e)) => alert_error("Search failed", &e),
                None => tracing::info!("no map match for {:?}", q),
            }
        }
    };

    rsx! {
        div {
            class: "map-search row",
            input {
                r#type: "search",
                placeholder: "Search the map",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            button {
                r#type: "button",
                class: "secondary",
                onclick: search,
                "Go"
            }
        }
    }
}
