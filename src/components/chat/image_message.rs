//! Image bubble with loading, loaded and broken-link states.

use dioxus::prelude::*;
use gupshup_core::{ImageLoad, ImageLoadState};

#[component]
pub fn ImageMessage(src: String) -> Element {
    let mut load = use_signal(|| ImageLoad::new(src.clone()));

    // Flags reset whenever the bubble is pointed at a different URL
    use_effect(use_reactive!(|src| {
        load.write().set_source(&src);
    }));

    let state = load.read().state();

    rsx! {
        div { class: "image-message",
            {match state {
                ImageLoadState::Failed => rsx! {
                    div { class: "image-message__fallback", title: "Image unavailable",
                        ImageOffIcon {}
                    }
                },
                _ => rsx! {
                    if state == ImageLoadState::Loading {
                        div { class: "image-message__placeholder",
                            div { class: "loading-spinner" }
                        }
                    }
                    img {
                        class: if state == ImageLoadState::Loading { "image-message__img image-message__img--hidden" } else { "image-message__img" },
                        src: "{src}",
                        alt: "Shared image",
                        onload: move |_| load.write().on_load(),
                        onerror: move |_| load.write().on_error(),
                    }
                },
            }}
        }
    }
}

#[component]
fn ImageOffIcon() -> Element {
    rsx! {
        svg {
            width: "40",
            height: "40",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            line { x1: "2", y1: "2", x2: "22", y2: "22" }
            path { d: "M10.41 10.41a2 2 0 1 1-2.83-2.83" }
            line { x1: "13.5", y1: "13.5", x2: "6", y2: "21" }
            line { x1: "18", y1: "12", x2: "21", y2: "15" }
            path { d: "M3.59 3.59A1.99 1.99 0 0 0 3 5v14a2 2 0 0 0 2 2h14c.55 0 1.052-.22 1.41-.59" }
            path { d: "M21 15V5a2 2 0 0 0-2-2H9" }
        }
    }
}
