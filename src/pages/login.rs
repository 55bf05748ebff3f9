//! Login Page
//!
//! Email or phone plus password. On success the session gate flips to
//! authenticated and the user lands on the chat screen.

use dioxus::prelude::*;
use gupshup_core::{ChatError, FieldErrors, LoginRequest, RouteGate};

use crate::app::Route;
use crate::components::{PasswordField, PublicOnly, TextField};
use crate::context::{use_client, use_gate, use_toasts};

#[derive(Clone, Copy, PartialEq, Eq)]
enum LoginMethod {
    Email,
    Phone,
}

#[component]
pub fn Login() -> Element {
    rsx! {
        PublicOnly { LoginForm {} }
    }
}

#[component]
fn LoginForm() -> Element {
    let client = use_client();
    let notifier = use_toasts();
    let mut gate = use_gate();
    let navigator = use_navigator();

    let mut method = use_signal(|| LoginMethod::Email);
    let mut login = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut loading = use_signal(|| false);

    let submit = move |_: MouseEvent| {
        if loading() {
            return;
        }
        let request = LoginRequest::new(login(), password());
        let client = client.clone();
        loading.set(true);
        spawn(async move {
            match client.login(request).await {
                Ok(user) => {
                    errors.set(FieldErrors::new());
                    notifier.success("Login successful! Redirecting...");
                    gate.set(RouteGate::Authenticated(user));
                    navigator.replace(Route::Home {});
                }
                Err(ChatError::Validation(fields)) => errors.set(fields),
                Err(e) => {
                    tracing::warn!(error = %e, "Login failed");
                    notifier.error(e.user_message());
                }
            }
            loading.set(false);
        });
    };

    let (label, hint) = match method() {
        LoginMethod::Email => ("Email", "you@example.com"),
        LoginMethod::Phone => ("Phone number", "+8801XXXXXXXXX"),
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-card__title", "Welcome back" }
                p { class: "auth-card__subtitle", "Sign in to continue chatting" }

                div { class: "segmented",
                    button {
                        class: if method() == LoginMethod::Email { "segmented__item segmented__item--active" } else { "segmented__item" },
                        onclick: move |_| method.set(LoginMethod::Email),
                        "Email"
                    }
                    button {
                        class: if method() == LoginMethod::Phone { "segmented__item segmented__item--active" } else { "segmented__item" },
                        onclick: move |_| method.set(LoginMethod::Phone),
                        "Phone"
                    }
                }

                TextField {
                    label: label.to_string(),
                    value: login(),
                    placeholder: hint.to_string(),
                    input_type: if method() == LoginMethod::Email { "email".to_string() } else { "tel".to_string() },
                    error: errors.read().get("login").map(str::to_string),
                    disabled: loading(),
                    on_input: move |v| {
                        login.set(v);
                        errors.write().clear("login");
                    },
                }
                PasswordField {
                    label: "Password".to_string(),
                    value: password(),
                    error: errors.read().get("password").map(str::to_string),
                    disabled: loading(),
                    on_input: move |v| {
                        password.set(v);
                        errors.write().clear("password");
                    },
                }

                button {
                    class: "btn btn--primary btn--block",
                    disabled: loading(),
                    onclick: submit,
                    if loading() { "Signing in..." } else { "Sign in" }
                }

                p { class: "auth-card__footer",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Sign up" }
                }
            }
        }
    }
}
