use dioxus::prelude::*;
use gupshup_core::User;

/// Round avatar: the user's photo, or their initial on a tinted disc.
#[component]
pub fn Avatar(
    user: User,
    #[props(default = "avatar".to_string())] class: String,
) -> Element {
    // URL that failed to load; a different photo gets a fresh try
    let mut failed: Signal<Option<String>> = use_signal(|| None);
    let photo = user.photo.clone();
    let show_photo = user.has_photo() && failed.read().as_deref() != Some(photo.as_str());

    if show_photo {
        let src = photo.clone();
        rsx! {
            img {
                class: "{class}",
                src: "{src}",
                alt: "{user.name}",
                onerror: move |_| failed.set(Some(photo.clone())),
            }
        }
    } else {
        rsx! {
            div { class: "{class} avatar--initial", "{user.initial()}" }
        }
    }
}
