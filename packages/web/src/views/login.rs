//! Login page view with the password form and Google sign-in.

use dioxus::prelude::*;
use ui::{navigate, sign_in, use_auth, use_services, GoogleSignIn};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let services = use_services();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the reviews
    if auth().is_signed_in() {
        navigate("/");
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = services.api.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            match api.login_password(email().trim(), &password()).await {
                Ok(token) => sign_in(&mut auth, token.access_token),
                Err(e) => {
                    tracing::warn!("login failed: {}", e);
                    loading.set(false);
                    error.set(Some("Login failed".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",

            h1 { "ReViews" }

            p { class: "muted", "Sign in to rate places on the map" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "error-msg", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p { class: "divider", "or" }

            GoogleSignIn {}

            p {
                class: "muted",
                "No account yet? "
                a { href: "/register", "Create one" }
            }
        }
    }
}
