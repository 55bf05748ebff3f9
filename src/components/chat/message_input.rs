//! Composer bar: text, image attachment, emoji palette, send.

use dioxus::prelude::*;
use gupshup_core::composer::EMOJI_PALETTE;
use gupshup_core::{Composer, MAX_IMAGE_BYTES};

use crate::components::image_picker::pick_image;
use crate::context::use_toasts;

#[component]
pub fn MessageInput(
    /// Draft owned by the chat screen
    composer: Signal<Composer>,
    /// Called when the user sends; the screen runs the send
    on_send: EventHandler<()>,
    /// A send is in flight
    #[props(default = false)]
    sending: bool,
    #[props(default = "Type a message...".to_string())]
    placeholder: String,
) -> Element {
    let mut composer = composer;
    let notifier = use_toasts();
    let mut show_emoji = use_signal(|| false);
    let mut picking = use_signal(|| false);

    let can_send = composer.read().can_send() && !sending;

    let handle_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter && !e.modifiers().shift() {
            e.prevent_default();
            if composer.peek().can_send() && !sending {
                on_send.call(());
            }
        }
    };

    let handle_attach = move |_: MouseEvent| {
        if picking() {
            return;
        }
        picking.set(true);
        spawn(async move {
            match pick_image("Attach Image", MAX_IMAGE_BYTES).await {
                Some(Ok(image)) => composer.write().stage(image),
                Some(Err(e)) => notifier.error(e.user_message()),
                None => {}
            }
            picking.set(false);
        });
    };

    let preview = composer
        .read()
        .staged()
        .map(|image| (image.preview_uri(), image.file_name.clone()));
    let text = composer.read().text().to_string();

    rsx! {
        div { class: "message-input",
            if let Some((uri, name)) = preview {
                div { class: "message-input__staged",
                    img { class: "message-input__thumb", src: "{uri}", alt: "{name}" }
                    span { class: "message-input__file", "{name}" }
                    button {
                        class: "icon-btn",
                        title: "Remove image",
                        disabled: sending,
                        onclick: move |_| {
                            composer.write().unstage();
                        },
                        "✕"
                    }
                }
            }

            if show_emoji() {
                div { class: "emoji-palette",
                    for emoji in EMOJI_PALETTE.iter().copied() {
                        button {
                            key: "{emoji}",
                            class: "emoji-palette__item",
                            onclick: move |_| {
                                composer.write().insert_emoji(emoji);
                                show_emoji.set(false);
                            },
                            "{emoji}"
                        }
                    }
                }
            }

            div { class: "message-input__bar",
                button {
                    class: "icon-btn",
                    title: "Emoji",
                    onclick: move |_| show_emoji.set(!show_emoji()),
                    "😊"
                }
                button {
                    class: "icon-btn",
                    title: "Attach image",
                    disabled: sending || picking(),
                    onclick: handle_attach,
                    svg {
                        width: "20",
                        height: "20",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        path { d: "M21.44 11.05l-9.19 9.19a6 6 0 0 1-8.49-8.49l9.19-9.19a4 4 0 0 1 5.66 5.66l-9.2 9.19a2 2 0 0 1-2.83-2.83l8.49-8.48" }
                    }
                }

                textarea {
                    class: "message-input__text",
                    placeholder: "{placeholder}",
                    value: "{text}",
                    rows: 1,
                    oninput: move |e| composer.write().set_text(e.value()),
                    onkeydown: handle_keydown,
                }

                button {
                    class: if can_send { "send-btn send-btn--active" } else { "send-btn" },
                    disabled: !can_send,
                    title: "Send message (Enter)",
                    onclick: move |_| on_send.call(()),
                    if sending {
                        div { class: "loading-spinner loading-spinner--small" }
                    } else {
                        svg {
                            width: "20",
                            height: "20",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            line { x1: "22", y1: "2", x2: "11", y2: "13" }
                            polygon { points: "22 2 15 22 11 13 2 9 22 2" }
                        }
                    }
                }
            }
        }
    }
}
