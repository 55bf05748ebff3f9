//! Transient notifications
//!
//! Toasts stack in the bottom-right corner and dismiss themselves after a
//! few seconds, or on click.

use std::time::Duration;

use dioxus::prelude::*;

use crate::context::{use_toasts, Toast, ToastKind};

const TOAST_TTL: Duration = Duration::from_secs(4);

#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts().toasts();
    let items = toasts.read().items().to_vec();

    rsx! {
        div { class: "toast-stack",
            for toast in items {
                ToastItem {
                    key: "{toast.id}",
                    toast,
                    on_dismiss: move |id| toasts.write().dismiss(id),
                }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let id = toast.id;
    use_hook(move || {
        spawn(async move {
            tokio::time::sleep(TOAST_TTL).await;
            on_dismiss.call(id);
        });
    });

    let class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };

    rsx! {
        div {
            class: "{class}",
            role: "status",
            onclick: move |_| on_dismiss.call(id),
            "{toast.text}"
        }
    }
}
