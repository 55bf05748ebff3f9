use dioxus::prelude::*;
use gupshup_core::RouteGate;

use crate::components::ToastHost;
use crate::context::{DarkMode, Toasts};
use crate::pages::{Home, Login, ProfileEdit, Register};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Chat screen (protected)
/// - `/login` - Sign in (public only)
/// - `/register` - Sign up and OTP verification (public only)
/// - `/profile` - Edit own profile (protected)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/profile")]
    ProfileEdit {},
}

/// Root application component.
///
/// Provides global styles, the chat client, session gate and toasts.
#[component]
pub fn App() -> Element {
    let Some(client) = crate::launch_client() else {
        return rsx! {
            div { class: "fatal", "GupShup could not start. Check the log for details." }
        };
    };

    let mut gate: Signal<RouteGate> = use_signal(|| RouteGate::Loading);
    let dark: Signal<DarkMode> = use_signal(|| DarkMode(crate::start_dark()));
    let toasts: Signal<Toasts> = use_signal(Toasts::default);

    use_context_provider(|| client.clone());
    use_context_provider(|| gate);
    use_context_provider(|| dark);
    use_context_provider(|| toasts);

    // Probe the session once at startup
    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            let restored = client.restore_session().await;
            tracing::info!(logged_in = restored.allows_protected(), "Session probe finished");
            gate.set(restored);
        });
    });

    let theme = if dark().0 { "app app--dark" } else { "app" };

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "{theme}",
            Router::<Route> {}
            ToastHost {}
        }
    }
}
