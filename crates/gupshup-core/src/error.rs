//! Error types for the GupShup client

use thiserror::Error;

use crate::validation::FieldErrors;

/// Fallback text for failures that carry no server message.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Main error type for client operations
#[derive(Error, Debug)]
pub enum ChatError {
    /// Transport failure (connection refused, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status or `success: false`
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// General I/O error (reading attachments)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Client-side form validation failed
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Operation needs a logged-in user
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Nothing to send: blank text and no staged image
    #[error("Message is empty")]
    EmptyMessage,

    /// A send is already in flight for this client
    #[error("A message is already being sent")]
    SendInFlight,

    /// No peer is selected
    #[error("No conversation selected")]
    NoPeerSelected,

    /// Image host rejected or failed the upload
    #[error("Upload error: {0}")]
    Upload(String),

    /// Attachment is not an acceptable image
    #[error("Invalid image: {0}")]
    InvalidImage(String),
}

impl ChatError {
    /// Text for a transient notification.
    ///
    /// Prefers the server's own message; everything else collapses to a
    /// generic line, except local validation which is already readable.
    pub fn user_message(&self) -> String {
        match self {
            ChatError::Api { message, .. } if !message.is_empty() => message.clone(),
            ChatError::Validation(errors) => errors.to_string(),
            ChatError::InvalidImage(reason) => reason.clone(),
            ChatError::EmptyMessage | ChatError::SendInFlight | ChatError::NoPeerSelected => {
                self.to_string()
            }
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

/// Result type alias using ChatError
pub type ChatResult<T> = Result<T, ChatError>;
