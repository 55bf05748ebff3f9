//! Messages and their delivery records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserRef;

/// Content unit. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Text content, if present and not blank.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Photo URL, if present and not blank.
    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref().filter(|p| !p.trim().is_empty())
    }
}

/// Delivery status of a chat. Ordered: sent < delivered < seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    #[default]
    Sent,
    Delivered,
    Seen,
}

impl ChatStatus {
    /// Move towards `next`, never backwards.
    pub fn advance_to(self, next: ChatStatus) -> ChatStatus {
        self.max(next)
    }
}

impl std::fmt::Display for ChatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatStatus::Sent => write!(f, "sent"),
            ChatStatus::Delivered => write!(f, "delivered"),
            ChatStatus::Seen => write!(f, "seen"),
        }
    }
}

/// Delivery record linking one [`Message`] to a sender and a receiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    #[serde(default)]
    pub message_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub status: ChatStatus,
    #[serde(default)]
    pub theme: Option<String>,
    pub message: Message,
    pub sender: UserRef,
    pub receiver: UserRef,
}

/// Thin chat row embedded in directory entries (`sentChats`/`receivedChats`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummary {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub message: Message,
    pub sender: UserRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_never_regresses() {
        assert_eq!(ChatStatus::Sent.advance_to(ChatStatus::Delivered), ChatStatus::Delivered);
        assert_eq!(ChatStatus::Seen.advance_to(ChatStatus::Sent), ChatStatus::Seen);
        assert_eq!(ChatStatus::Delivered.advance_to(ChatStatus::Sent), ChatStatus::Delivered);
    }

    #[test]
    fn test_status_wire_format() {
        let status: ChatStatus = serde_json::from_str("\"delivered\"").unwrap();
        assert_eq!(status, ChatStatus::Delivered);
        assert_eq!(serde_json::to_string(&ChatStatus::Seen).unwrap(), "\"seen\"");
    }

    #[test]
    fn test_blank_text_counts_as_absent() {
        let msg = Message {
            id: "m1".into(),
            text: Some("   ".into()),
            photo: Some("https://img/x.png".into()),
            emoji: None,
            link: None,
            created_at: Utc::now(),
        };
        assert_eq!(msg.text(), None);
        assert_eq!(msg.photo(), Some("https://img/x.png"));
    }

    #[test]
    fn test_chat_decodes_full_record() {
        let json = r#"{
            "id": "c1", "senderId": "a", "receiverId": "b", "messageId": "m1",
            "createdAt": "2025-03-01T09:30:00.000Z", "updatedAt": "2025-03-01T09:30:00.000Z",
            "isDeleted": false, "status": "seen", "theme": null,
            "message": {"id": "m1", "text": "hi", "photo": null, "createdAt": "2025-03-01T09:30:00.000Z"},
            "sender": {"id": "a", "name": "Ana", "email": "a@x.io", "photo": ""},
            "receiver": {"id": "b", "name": "Bo", "email": "b@x.io", "photo": ""}
        }"#;
        let chat: Chat = serde_json::from_str(json).unwrap();
        assert_eq!(chat.status, ChatStatus::Seen);
        assert_eq!(chat.message.text(), Some("hi"));
        assert_eq!(chat.receiver.name, "Bo");
    }
}
