//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const REVIEWS_CSS: Asset = asset!("/assets/reviews.css");

mod browser;
pub use browser::{alert, alert_error, navigate, reload};

pub mod script;

mod token_store;
pub use token_store::make_token_store;

mod services;
pub use services::{use_config, use_services, ServicesProvider};

mod auth;
pub use auth::{sign_in, sign_out, use_auth, AuthProvider, AuthState, LogoutButton};

mod navbar;
pub use navbar::Navbar;

mod google;
pub use google::GoogleSignIn;

mod map;
pub use map::{use_map, MapFocus, MapHandle, MapProvider, MapView};

mod map_search;
pub use map_search::MapSearch;

mod review_form;
pub use review_form::ReviewForm;

mod review_list;
pub use review_list::{review_popup_html, ReviewCard, ReviewList};
