//! GupShup Core Library
//!
//! Headless messaging client: session state, REST access, a keyed query
//! cache, and the send pipeline behind the desktop chat view.
//!
//! ## Overview
//!
//! All persistence, delivery status and presence live on the API server.
//! This crate only keeps what a client needs to render a chat screen:
//!
//! - **Session**: the logged-in [`User`], set by login/register/verify and
//!   cleared by logout
//! - **Directory**: every other user with a preview of the latest chat
//! - **Conversation**: ordered chats with the selected peer
//! - **Send**: optional image upload, then `POST /chat/create`, then refetch
//!
//! ## Quick Start
//!
//! ```ignore
//! use gupshup_core::{ChatClient, ClientConfig, CloudinaryUploader, Composer, HttpApi, LoginRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env();
//!     let client = ChatClient::new(
//!         HttpApi::new(&config)?,
//!         CloudinaryUploader::new(&config.image_host),
//!     );
//!
//!     client.login(LoginRequest::new("ana@example.com", "hunter2hunter2")).await?;
//!
//!     for entry in client.refresh_directory().await? {
//!         println!("{}: {}", entry.user.name, entry.preview);
//!     }
//!
//!     let mut composer = Composer::default();
//!     composer.set_text("hi");
//!     client.select_peer("peer-id");
//!     client.send_message(&mut composer).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod attachment;
pub mod client;
pub mod composer;
pub mod config;
pub mod conversation;
pub mod cookie;
pub mod directory;
pub mod error;
pub mod layout;
pub mod query;
pub mod session;
pub mod types;
pub mod upload;
pub mod validation;

// Re-exports
pub use api::{ChatApi, HttpApi};
pub use attachment::{StagedImage, MAX_AVATAR_BYTES, MAX_IMAGE_BYTES};
pub use client::{ChatClient, SendOutcome};
pub use composer::Composer;
pub use config::{ClientConfig, ImageHostConfig};
pub use conversation::{BubbleContent, Conversation, StatusIndicator, ThreadMessage};
pub use cookie::{token_from_cookie, SESSION_COOKIE};
pub use directory::{filter_directory, DirectoryEntry, EMPTY_PREVIEW, PHOTO_PREVIEW};
pub use error::{ChatError, ChatResult};
pub use layout::{ChatLayout, ImageLoad, ImageLoadState, ScrollTrigger, Viewport};
pub use query::{FetchTicket, QueryCache, QueryStatus, RefetchPolicy};
pub use session::{RouteGate, SessionAction, SessionState};
pub use types::*;
pub use upload::{upload_or_absent, CloudinaryUploader, ImageHost};
pub use validation::FieldErrors;
