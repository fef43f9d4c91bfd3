//! Registration page view with email/password form.

use dioxus::prelude::*;
use ui::{navigate, sign_in, use_auth, use_services};

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let services = use_services();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the reviews
    if auth().is_signed_in() {
        navigate("/");
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = services.api.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }
            if p != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let result = match api.register(&e, &p).await {
                Ok(()) => api.login_password(&e, &p).await,
                Err(err) => Err(err),
            };
            match result {
                Ok(token) => sign_in(&mut auth, token.access_token),
                Err(err) => {
                    tracing::warn!("registration failed: {}", err);
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",

            h1 { "Create Account" }

            p { class: "muted", "Sign up for ReViews" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "error-msg", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: "{confirm_password}",
                    oninput: move |evt| confirm_password.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "muted",
                "Already have an account? "
                a { href: "/login", "Sign in" }
            }
        }
    }
}
