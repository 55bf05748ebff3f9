//! Route guards
//!
//! Protected pages need an authenticated session; public pages (login,
//! register) send an already logged-in user home. Both show the loading
//! overlay until the startup probe answers.

use dioxus::prelude::*;
use gupshup_core::RouteGate;

use super::LoadingOverlay;
use crate::app::Route;
use crate::context::use_gate;

#[component]
pub fn RequireSession(children: Element) -> Element {
    let gate = use_gate();
    let navigator = use_navigator();

    use_effect(move || {
        if matches!(*gate.read(), RouteGate::Anonymous) {
            navigator.replace(Route::Login {});
        }
    });

    let allowed = gate.read().allows_protected();
    if allowed {
        children
    } else {
        rsx! { LoadingOverlay {} }
    }
}

#[component]
pub fn PublicOnly(children: Element) -> Element {
    let gate = use_gate();
    let navigator = use_navigator();

    use_effect(move || {
        if gate.read().allows_protected() {
            navigator.replace(Route::Home {});
        }
    });

    let allowed = gate.read().allows_public();
    if allowed {
        children
    } else {
        rsx! { LoadingOverlay {} }
    }
}
