//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::TokenStore;

use crate::browser::navigate;
use crate::token_store::make_token_store;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    /// Bearer token from the last successful login.
    pub token: Option<String>,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that restores the saved token on mount.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(|| AuthState {
        token: make_token_store().load(),
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Persist a freshly issued token and go to the reviews page.
pub fn sign_in(auth: &mut Signal<AuthState>, token: String) {
    make_token_store().save(&token);
    auth.set(AuthState { token: Some(token) });
    navigate("/");
}

/// Forget the token and go to the login page.
pub fn sign_out(auth: &mut Signal<AuthState>) {
    make_token_store().clear();
    auth.set(AuthState { token: None });
    tracing::info!("signed out");
    navigate("/login");
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| sign_out(&mut auth_state),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_in_follows_token() {
        assert!(!AuthState::default().is_signed_in());
        let state = AuthState {
            token: Some("eyJhbGciOi".to_string()),
        };
        assert!(state.is_signed_in());
    }
}
