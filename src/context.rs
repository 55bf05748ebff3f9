//! Shared state for the component tree.
//!
//! The [`ChatClient`] lives in an `Arc` provided at the root. Views read it
//! with [`use_client`] and spawn its async operations from handlers; they
//! keep what they render in their own signals.
//!
//! ```ignore
//! let client = use_client();
//! spawn(async move {
//!     if let Ok(entries) = client.refresh_directory().await {
//!         directory.set(entries);
//!     }
//! });
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use gupshup_core::{ChatClient, CloudinaryUploader, HttpApi, RouteGate};

pub type AppClient = ChatClient<HttpApi, CloudinaryUploader>;

pub type SharedClient = Arc<AppClient>;

pub fn use_client() -> SharedClient {
    use_context::<SharedClient>()
}

/// Route gate: `Loading` until the session probe answers.
pub fn use_gate() -> Signal<RouteGate> {
    use_context::<Signal<RouteGate>>()
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DarkMode(pub bool);

pub fn use_dark_mode() -> Signal<DarkMode> {
    use_context::<Signal<DarkMode>>()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Transient notifications, newest last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u64,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            text: text.into(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Handle for raising toasts from any component.
#[derive(Clone, Copy)]
pub struct Notifier(Signal<Toasts>);

impl Notifier {
    pub fn success(mut self, text: impl Into<String>) {
        self.0.write().push(ToastKind::Success, text);
    }

    pub fn error(mut self, text: impl Into<String>) {
        self.0.write().push(ToastKind::Error, text);
    }

    pub fn toasts(&self) -> Signal<Toasts> {
        self.0
    }
}

pub fn use_toasts() -> Notifier {
    Notifier(use_context::<Signal<Toasts>>())
}
