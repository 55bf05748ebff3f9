//! Message composer
//!
//! Text being typed plus at most one staged image. The send affordance is
//! enabled only when there is something to send.

use crate::attachment::StagedImage;
use crate::types::CreateChatRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    text: String,
    staged: Option<StagedImage>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append an emoji at the end of the text.
    pub fn insert_emoji(&mut self, emoji: &str) {
        self.text.push_str(emoji);
    }

    pub fn staged(&self) -> Option<&StagedImage> {
        self.staged.as_ref()
    }

    /// Stage an image, replacing any previous one.
    pub fn stage(&mut self, image: StagedImage) {
        self.staged = Some(image);
    }

    pub fn unstage(&mut self) -> Option<StagedImage> {
        self.staged.take()
    }

    /// False for whitespace-only text without an image.
    pub fn can_send(&self) -> bool {
        !self.text.trim().is_empty() || self.staged.is_some()
    }

    /// Clear text and staged image after a successful send.
    pub fn reset(&mut self) {
        self.text.clear();
        self.staged = None;
    }

    /// Remove what `sent` carried once it went out, keeping edits made
    /// while the request was in flight.
    ///
    /// Text typed after the sent text is kept; an image staged in the
    /// meantime stays staged.
    pub fn settle_sent(&mut self, sent: &Composer) {
        if sent.staged.is_some() && self.staged == sent.staged {
            self.staged = None;
        }
        if let Some(rest) = self.text.strip_prefix(sent.text.as_str()) {
            self.text = rest.to_string();
        }
    }

    /// Request body for `POST /chat/create`.
    pub fn payload(&self, receiver_id: &str, photo: Option<String>) -> CreateChatRequest {
        CreateChatRequest {
            text: self.text.clone(),
            receiver_id: receiver_id.to_string(),
            photo,
        }
    }
}

/// Emoji offered by the composer's palette.
pub const EMOJI_PALETTE: &[&str] = &[
    "😀", "😂", "😊", "😍", "😎", "😢", "😡", "👍", "👎", "🙏", "👏", "🎉", "❤️", "🔥", "✨", "🤔",
];
