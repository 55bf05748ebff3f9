//! Wire and domain types for GupShup
//!
//! Every body exchanged with the API server is camelCase JSON. Responses are
//! wrapped in an [`ApiResponse`] envelope.

pub mod api;
pub mod chat;
pub mod user;

pub use api::{
    ApiResponse, CreateChatRequest, LoginRequest, ProfileUpdate, RegisterRequest,
    VerifyAccountRequest,
};
pub use chat::{Chat, ChatStatus, ChatSummary, Message};
pub use user::{DirectoryUser, User, UserRef};
