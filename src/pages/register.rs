//! Register Page
//!
//! Two steps: the sign-up form, then the six-digit code emailed to the new
//! account. Verifying re-probes the session; with a session cookie the user
//! goes straight to the chat screen, otherwise to the login page.

use dioxus::prelude::*;
use gupshup_core::{ChatError, FieldErrors, RegisterRequest};

use crate::app::Route;
use crate::components::{PasswordField, PublicOnly, TextField};
use crate::context::{use_client, use_gate, use_toasts};

#[component]
pub fn Register() -> Element {
    rsx! {
        PublicOnly { RegisterFlow {} }
    }
}

#[component]
fn RegisterFlow() -> Element {
    // Email the code was sent to; `Some` switches to the OTP step
    let pending = use_signal(|| Option::<String>::None);

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                if let Some(email) = pending() {
                    OtpStep { email, pending }
                } else {
                    SignUpStep { pending }
                }
            }
        }
    }
}

#[component]
fn SignUpStep(pending: Signal<Option<String>>) -> Element {
    let mut pending = pending;
    let client = use_client();
    let notifier = use_toasts();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut loading = use_signal(|| false);

    let submit = move |_: MouseEvent| {
        if loading() {
            return;
        }
        let request = RegisterRequest {
            name: name(),
            email: email(),
            phone: phone(),
            password: password(),
        };
        let client = client.clone();
        loading.set(true);
        spawn(async move {
            let address = request.email.clone();
            match client.register(request).await {
                Ok(_) => {
                    notifier.success("Account created successfully! Please verify your email.");
                    pending.set(Some(address));
                }
                Err(ChatError::Validation(fields)) => errors.set(fields),
                Err(e) => {
                    tracing::warn!(error = %e, "Registration failed");
                    notifier.error(e.user_message());
                }
            }
            loading.set(false);
        });
    };

    let error = move |field: &str| errors.read().get(field).map(str::to_string);

    rsx! {
        h1 { class: "auth-card__title", "Create an account" }
        p { class: "auth-card__subtitle", "Start chatting in a minute" }

        TextField {
            label: "Name".to_string(),
            value: name(),
            error: error("name"),
            disabled: loading(),
            on_input: move |v| {
                name.set(v);
                errors.write().clear("name");
            },
        }
        TextField {
            label: "Email".to_string(),
            value: email(),
            input_type: "email".to_string(),
            error: error("email"),
            disabled: loading(),
            on_input: move |v| {
                email.set(v);
                errors.write().clear("email");
            },
        }
        TextField {
            label: "Phone".to_string(),
            value: phone(),
            input_type: "tel".to_string(),
            error: error("phone"),
            disabled: loading(),
            on_input: move |v| {
                phone.set(v);
                errors.write().clear("phone");
            },
        }
        PasswordField {
            label: "Password".to_string(),
            value: password(),
            error: error("password"),
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
            if loading() { "Creating account..." } else { "Sign up" }
        }

        p { class: "auth-card__footer",
            "Already have an account? "
            Link { to: Route::Login {}, "Sign in" }
        }
    }
}

#[component]
fn OtpStep(email: String, pending: Signal<Option<String>>) -> Element {
    let mut pending = pending;
    let client = use_client();
    let notifier = use_toasts();
    let mut gate = use_gate();
    let navigator = use_navigator();

    let mut code = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut loading = use_signal(|| false);

    let verify = move |_: MouseEvent| {
        if loading() {
            return;
        }
        let otp = code();
        let client = client.clone();
        loading.set(true);
        spawn(async move {
            match client.verify_account(&otp).await {
                Ok(_) => {
                    notifier.success("Email verified successfully! You can now login.");
                    let restored = client.restore_session().await;
                    let signed_in = restored.allows_protected();
                    gate.set(restored);
                    if signed_in {
                        navigator.replace(Route::Home {});
                    } else {
                        pending.set(None);
                        navigator.replace(Route::Login {});
                    }
                }
                Err(ChatError::Validation(fields)) => errors.set(fields),
                Err(e) => {
                    tracing::warn!(error = %e, "OTP verification failed");
                    notifier.error(e.user_message());
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        h1 { class: "auth-card__title", "Verify your email" }
        p { class: "auth-card__subtitle", "Enter the OTP sent to {email}" }

        TextField {
            label: "One-time code".to_string(),
            value: code(),
            placeholder: "123456".to_string(),
            error: errors.read().get("otp").map(str::to_string),
            disabled: loading(),
            on_input: move |v| {
                code.set(v);
                errors.write().clear("otp");
            },
        }

        button {
            class: "btn btn--primary btn--block",
            disabled: loading(),
            onclick: verify,
            if loading() { "Verifying..." } else { "Verify" }
        }
        button {
            class: "btn btn--ghost btn--block",
            disabled: loading(),
            onclick: move |_| pending.set(None),
            "Use a different email"
        }
    }
}
