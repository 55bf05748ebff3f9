use dioxus::prelude::*;

/// Detail panel when no peer is selected.
#[component]
pub fn ChatNotFound(
    #[props(default = false)] narrow: bool,
    on_show_list: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "chat-empty",
            div { class: "chat-empty__art", "💬" }
            h2 { class: "chat-empty__title", "Your messages" }
            p { class: "chat-empty__text", "Pick someone from the list to start chatting." }
            if narrow {
                button {
                    class: "btn btn--primary",
                    onclick: move |_| on_show_list.call(()),
                    "Show Chats"
                }
            }
        }
    }
}
