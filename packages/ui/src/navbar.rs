use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};

/// Top bar with the app title and the sign-in / log-out action.
#[component]
pub fn Navbar(#[props(default = "ReViews".to_string())] title: String) -> Element {
    let auth = use_auth();

    rsx! {
        div {
            class: "navbar",
            h1 { class: "navbar-title", "{title}" }
            div {
                class: "navbar-actions",
                if auth().is_signed_in() {
                    LogoutButton { class: "secondary" }
                } else {
                    a { href: "/login", "Sign in" }
                }
            }
        }
    }
}
