//! Home Page
//!
//! Peer list on the left, the selected conversation on the right. On a
//! narrow window only one panel shows at a time.
//!
//! The directory refetches every time this page mounts. A conversation is
//! fetched when its peer is first selected and again after each send.

use dioxus::prelude::*;
use gupshup_core::{
    filter_directory, ChatError, ChatLayout, Composer, Conversation, DirectoryEntry, QueryStatus,
    RouteGate, Viewport,
};

use crate::app::Route;
use crate::components::chat::{ChatNotFound, ConversationView, UserList};
use crate::components::{Avatar, RequireSession};
use crate::context::{use_client, use_dark_mode, use_gate, use_toasts, AppClient, DarkMode};

#[component]
pub fn Home() -> Element {
    rsx! {
        RequireSession { ChatScreen {} }
    }
}

/// Copy the selected thread out of the client into view signals.
fn publish_thread(
    client: &AppClient,
    mut thread: Signal<Option<Conversation>>,
    mut revision: Signal<u64>,
    mut thread_loading: Signal<bool>,
) {
    thread.set(client.conversation());
    revision.set(client.conversation_revision());
    thread_loading.set(client.conversation_status() == QueryStatus::Fetching);
}

#[component]
fn ChatScreen() -> Element {
    let client = use_client();
    let notifier = use_toasts();
    let mut gate = use_gate();
    let mut dark = use_dark_mode();
    let navigator = use_navigator();

    let mut layout = use_signal(|| {
        let mut layout = ChatLayout::default();
        if let Some(peer) = client.selected_peer() {
            layout.select_peer(peer);
        }
        layout
    });
    let mut directory: Signal<Vec<DirectoryEntry>> = use_signal(|| client.directory());
    let mut directory_loading = use_signal(|| true);
    let mut search = use_signal(String::new);
    let thread: Signal<Option<Conversation>> = use_signal(|| client.conversation());
    let revision = use_signal(|| client.conversation_revision());
    let thread_loading = use_signal(|| false);
    let mut composer = use_signal(Composer::new);
    let mut sending = use_signal(|| false);

    // Directory: refetch on every mount
    {
        let client = client.clone();
        use_effect(move || {
            let client = client.clone();
            spawn(async move {
                directory_loading.set(true);
                match client.refresh_directory().await {
                    Ok(entries) => directory.set(entries),
                    Err(e) => tracing::warn!(error = %e, "Could not load users"),
                }
                directory_loading.set(false);
            });
        });
    }

    let on_select = {
        let client = client.clone();
        move |peer_id: String| {
            if layout.peek().active_peer() == Some(peer_id.as_str()) {
                layout.write().select_peer(peer_id);
                return;
            }
            layout.write().select_peer(peer_id.clone());
            composer.write().reset();

            let needs_fetch = client.select_peer(peer_id);
            publish_thread(&client, thread, revision, thread_loading);
            if needs_fetch {
                let client = client.clone();
                let mut thread_loading = thread_loading;
                thread_loading.set(true);
                spawn(async move {
                    if let Err(e) = client.load_conversation().await {
                        notifier.error(e.user_message());
                    }
                    publish_thread(&client, thread, revision, thread_loading);
                });
            }
        }
    };

    let on_send = {
        let client = client.clone();
        move |_: ()| {
            if sending() {
                return;
            }
            let mut draft = composer.peek().clone();
            if !draft.can_send() {
                return;
            }
            let sent = draft.clone();
            let client = client.clone();
            sending.set(true);
            spawn(async move {
                match client.send_message(&mut draft).await {
                    Ok(outcome) => {
                        composer.write().settle_sent(&sent);
                        if outcome.upload_failed {
                            notifier.error("Image upload failed, sent the text only");
                        }
                        publish_thread(&client, thread, revision, thread_loading);
                        directory.set(client.directory());
                    }
                    Err(ChatError::SendInFlight) => {}
                    Err(e) => {
                        tracing::error!(error = %e, "Send failed");
                        notifier.error(e.user_message());
                    }
                }
                sending.set(false);
            });
        }
    };

    let on_logout = {
        let client = client.clone();
        move |_: MouseEvent| {
            let client = client.clone();
            spawn(async move {
                match client.logout().await {
                    Ok(()) => {
                        notifier.success("Logged out");
                        gate.set(RouteGate::Anonymous);
                        navigator.replace(Route::Login {});
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Logout failed");
                        notifier.error(e.user_message());
                    }
                }
            });
        }
    };

    let on_back = {
        let client = client.clone();
        move |_: ()| {
            client.clear_peer();
            layout.write().clear_peer();
        }
    };

    let me = client.session_user().unwrap_or_default();
    let query = search();
    let entries: Vec<DirectoryEntry> = filter_directory(&directory.read(), &query)
        .into_iter()
        .cloned()
        .collect();
    let active = layout.read().active_peer().map(str::to_string);
    let peer = active.as_ref().and_then(|id| {
        directory
            .read()
            .iter()
            .find(|entry| &entry.user.id == id)
            .map(|entry| entry.user.clone())
    });
    let narrow = layout.read().viewport().is_narrow();
    let show_sidebar = layout.read().sidebar_shown();
    let show_detail = layout.read().detail_shown();

    rsx! {
        div {
            class: "chat-screen",
            onresize: move |e: Event<ResizeData>| {
                if let Ok(size) = e.get_border_box_size() {
                    let viewport = Viewport::from_width(size.width);
                    if layout.peek().viewport() != viewport {
                        layout.write().set_viewport(viewport);
                    }
                }
            },

            if show_sidebar {
                aside { class: "sidebar",
                    header { class: "sidebar__header",
                        button {
                            class: "sidebar__me",
                            title: "Edit profile",
                            onclick: move |_| {
                                navigator.push(Route::ProfileEdit {});
                            },
                            Avatar { user: me.clone() }
                            span { class: "sidebar__me-name", "{me.name}" }
                        }
                        div { class: "sidebar__actions",
                            button {
                                class: "icon-btn",
                                title: if dark().0 { "Light mode" } else { "Dark mode" },
                                onclick: move |_| {
                                    let next = !dark().0;
                                    dark.set(DarkMode(next));
                                },
                                if dark().0 { "☀" } else { "🌙" }
                            }
                            button {
                                class: "icon-btn",
                                title: "Log out",
                                onclick: on_logout,
                                "⎋"
                            }
                        }
                    }
                    div { class: "sidebar__search",
                        input {
                            class: "search-input",
                            r#type: "search",
                            placeholder: "Search people",
                            value: "{query}",
                            oninput: move |e| search.set(e.value()),
                        }
                    }
                    UserList {
                        entries,
                        active: active.clone(),
                        on_select,
                        loading: directory_loading(),
                        filtered: !query.trim().is_empty(),
                    }
                }
            }

            if show_detail {
                main { class: "detail",
                    if let Some(peer) = peer {
                        ConversationView {
                            peer,
                            conversation: thread(),
                            revision: revision(),
                            composer,
                            on_send,
                            on_back,
                            narrow,
                            sending: sending(),
                            loading: thread_loading(),
                        }
                    } else {
                        ChatNotFound {
                            narrow,
                            on_show_list: move |_| layout.write().show_list(),
                        }
                    }
                }
            }
        }
    }
}
