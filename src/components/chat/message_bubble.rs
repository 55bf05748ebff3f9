//! Message Bubble Component
//!
//! Own messages sit on the right with a delivery status; the peer's sit on
//! the left without one.

use chrono::Local;
use dioxus::prelude::*;
use gupshup_core::conversation::bubble_time;
use gupshup_core::{BubbleContent, ThreadMessage};

use super::image_message::ImageMessage;
use super::status_icon::StatusIcon;

#[component]
pub fn MessageBubble(message: ThreadMessage) -> Element {
    let row_class = if message.is_mine {
        "message-row message-row--mine"
    } else {
        "message-row message-row--theirs"
    };
    let bubble_class = if message.is_mine {
        "message-bubble message-bubble--mine"
    } else {
        "message-bubble message-bubble--theirs"
    };
    let time = bubble_time(message.created_at.with_timezone(&Local));

    rsx! {
        div { class: "{row_class}",
            div { class: "{bubble_class}",
                {match message.content.clone() {
                    BubbleContent::Text(text) => rsx! {
                        p { class: "message-bubble__text", "{text}" }
                    },
                    BubbleContent::Image(photo) => rsx! {
                        ImageMessage { src: photo }
                    },
                    BubbleContent::ImageWithCaption { photo, text } => rsx! {
                        ImageMessage { src: photo }
                        p { class: "message-bubble__text", "{text}" }
                    },
                    BubbleContent::Empty => rsx! {},
                }}

                div { class: "message-bubble__meta",
                    span { class: "message-bubble__time", "{time}" }
                    if let Some(status) = message.status {
                        StatusIcon { status }
                    }
                }
            }
        }
    }
}
