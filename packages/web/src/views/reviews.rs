use dioxus::prelude::*;
use ui::{MapProvider, MapSearch, MapView, Navbar, ReviewForm, ReviewList};

/// Main page: the map, the map search, the review form and every review.
#[component]
pub fn Reviews() -> Element {
    rsx! {
        Navbar {}

        MapProvider {
            div {
                class: "page",

                MapSearch {}
                MapView {}

                div {
                    class: "columns",
                    ReviewForm {}
                    ReviewList {}
                }
            }
        }
    }
}
