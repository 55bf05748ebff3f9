//! Conversation View Component
//!
//! Header with the peer, the message thread and the composer. The thread
//! scrolls to the bottom whenever new thread data arrives.

use std::rc::Rc;

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;
use gupshup_core::{Composer, Conversation, ScrollTrigger, User};

use super::message_bubble::MessageBubble;
use super::message_input::MessageInput;
use crate::components::Avatar;

#[component]
pub fn ConversationView(
    peer: User,
    /// Cached thread, `None` until the first fetch lands
    conversation: Option<Conversation>,
    /// Revision of the thread data; scrolling keys off this
    revision: u64,
    composer: Signal<Composer>,
    on_send: EventHandler<()>,
    /// Back to the peer list (narrow viewports)
    on_back: EventHandler<()>,
    #[props(default = false)] narrow: bool,
    #[props(default = false)] sending: bool,
    #[props(default = false)] loading: bool,
) -> Element {
    let mut trigger = use_signal(ScrollTrigger::default);
    let mut anchor: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let messages = conversation
        .as_ref()
        .map(|c| c.messages())
        .unwrap_or_default();
    let count = messages.len();

    // Reading `anchor()` re-runs this once the end of the thread mounts.
    use_effect(use_reactive!(|revision, count| {
        let node = anchor();
        if trigger
            .write()
            .should_scroll_mounted(node.is_some(), revision, count)
        {
            if let Some(node) = node {
                spawn(async move {
                    let _ = node.scroll_to(ScrollBehavior::Smooth).await;
                });
            }
        }
    }));

    let subtitle = if peer.username.is_empty() {
        peer.email.clone()
    } else {
        format!("@{}", peer.username)
    };

    rsx! {
        div { class: "conversation",
            header { class: "conversation__header",
                if narrow {
                    button {
                        class: "icon-btn",
                        title: "Back to chats",
                        onclick: move |_| on_back.call(()),
                        svg {
                            width: "20",
                            height: "20",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            polyline { points: "15 18 9 12 15 6" }
                        }
                    }
                }
                Avatar { user: peer.clone() }
                div { class: "conversation__peer",
                    h2 { class: "conversation__name", "{peer.name}" }
                    p { class: "conversation__subtitle", "{subtitle}" }
                }
            }

            div { class: "conversation__messages",
                if loading && conversation.is_none() {
                    div { class: "conversation__loading",
                        div { class: "loading-spinner" }
                        p { "Loading messages..." }
                    }
                } else if messages.is_empty() {
                    div { class: "conversation__empty",
                        p { class: "conversation__empty-icon", "💬" }
                        p { class: "conversation__empty-text", "No messages yet" }
                        p { class: "conversation__empty-hint",
                            "Say hello to {peer.name}."
                        }
                    }
                } else {
                    for message in messages.iter() {
                        MessageBubble { key: "{message.id}", message: message.clone() }
                    }
                }

                div {
                    class: "conversation__anchor",
                    onmounted: move |e: MountedEvent| anchor.set(Some(e.data())),
                }
            }

            MessageInput {
                composer,
                on_send,
                sending,
                placeholder: format!("Message {}...", peer.name),
            }
        }
    }
}
