//! Sidebar peer list
//!
//! One row per user: avatar, name, preview of the latest message and its
//! short time label.

use dioxus::prelude::*;
use gupshup_core::DirectoryEntry;

use crate::components::Avatar;

#[component]
pub fn UserList(
    entries: Vec<DirectoryEntry>,
    /// Id of the selected peer
    active: Option<String>,
    on_select: EventHandler<String>,
    #[props(default = false)] loading: bool,
    /// A search is active (changes the empty message)
    #[props(default = false)] filtered: bool,
) -> Element {
    if loading && entries.is_empty() {
        return rsx! {
            div { class: "user-list__status",
                div { class: "loading-spinner" }
            }
        };
    }

    if entries.is_empty() {
        let text = if filtered { "No matches" } else { "No users yet" };
        return rsx! {
            div { class: "user-list__status", "{text}" }
        };
    }

    let rows = entries.into_iter().map(|entry| {
        let id = entry.user.id.clone();
        let is_active = active.as_deref() == Some(id.as_str());
        rsx! {
            UserRow { key: "{id}", active: is_active, entry, on_select }
        }
    });

    rsx! {
        ul { class: "user-list", {rows} }
    }
}

#[component]
fn UserRow(entry: DirectoryEntry, active: bool, on_select: EventHandler<String>) -> Element {
    let id = entry.user.id.clone();
    let time = entry.time_label().unwrap_or_default();
    let class = if active {
        "user-row user-row--active"
    } else {
        "user-row"
    };

    rsx! {
        li {
            class: "{class}",
            onclick: move |_| on_select.call(id.clone()),
            Avatar { user: entry.user.clone() }
            div { class: "user-row__body",
                div { class: "user-row__top",
                    span { class: "user-row__name", "{entry.user.name}" }
                    span { class: "user-row__time", "{time}" }
                }
                p { class: "user-row__preview", "{entry.preview}" }
            }
        }
    }
}
