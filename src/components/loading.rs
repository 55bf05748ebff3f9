use dioxus::prelude::*;

/// Full-screen spinner shown while the session probe is pending.
#[component]
pub fn LoadingOverlay() -> Element {
    rsx! {
        div { class: "loading-overlay",
            div { class: "loading-spinner" }
            p { class: "loading-text", "Loading..." }
        }
    }
}
