//! UI Components for GupShup.

mod avatar;
pub mod chat;
pub mod image_picker;
mod form;
mod loading;
mod route_guard;
mod toast;

pub use avatar::Avatar;
pub use form::{PasswordField, TextField};
pub use loading::LoadingOverlay;
pub use route_guard::{PublicOnly, RequireSession};
pub use toast::ToastHost;
