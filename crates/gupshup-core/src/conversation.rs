//! Conversation thread
//!
//! A [`Conversation`] is the ordered history between the logged-in user and
//! one peer, derived from the chats `GET /chat/{peer}` returns. Nothing here
//! is persisted; it is rebuilt from every fetch.

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::types::{Chat, ChatStatus};

/// Outgoing-status glyph for own messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIndicator {
    /// Single check
    Sent,
    /// Double check
    Delivered,
    /// Double check plus "Seen"
    Seen,
}

impl StatusIndicator {
    pub fn check_count(&self) -> u8 {
        match self {
            StatusIndicator::Sent => 1,
            StatusIndicator::Delivered | StatusIndicator::Seen => 2,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            StatusIndicator::Seen => Some("Seen"),
            _ => None,
        }
    }
}

impl From<ChatStatus> for StatusIndicator {
    fn from(status: ChatStatus) -> Self {
        match status {
            ChatStatus::Sent => StatusIndicator::Sent,
            ChatStatus::Delivered => StatusIndicator::Delivered,
            ChatStatus::Seen => StatusIndicator::Seen,
        }
    }
}

/// What a bubble shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BubbleContent {
    Text(String),
    Image(String),
    ImageWithCaption { photo: String, text: String },
    /// Neither text nor photo survived; rendered as an empty bubble
    Empty,
}

/// Display-ready message for one bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadMessage {
    pub id: String,
    pub is_mine: bool,
    pub sender_name: String,
    pub content: BubbleContent,
    pub created_at: DateTime<Utc>,
    /// Only set for own messages
    pub status: Option<StatusIndicator>,
}

impl ThreadMessage {
    fn from_chat(chat: &Chat, me: &str) -> Self {
        let is_mine = chat.sender_id == me;
        let content = match (chat.message.text(), chat.message.photo()) {
            (Some(text), Some(photo)) => BubbleContent::ImageWithCaption {
                photo: photo.to_string(),
                text: text.to_string(),
            },
            (Some(text), None) => BubbleContent::Text(text.to_string()),
            (None, Some(photo)) => BubbleContent::Image(photo.to_string()),
            (None, None) => BubbleContent::Empty,
        };

        Self {
            id: chat.id.clone(),
            is_mine,
            sender_name: chat.sender.name.clone(),
            content,
            created_at: chat.created_at,
            status: is_mine.then(|| StatusIndicator::from(chat.status)),
        }
    }

    pub fn photo(&self) -> Option<&str> {
        match &self.content {
            BubbleContent::Image(photo) | BubbleContent::ImageWithCaption { photo, .. } => {
                Some(photo)
            }
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            BubbleContent::Text(text) | BubbleContent::ImageWithCaption { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub me: String,
    pub peer: String,
    /// Chronological, oldest first
    chats: Vec<Chat>,
}

impl Conversation {
    pub fn new(me: impl Into<String>, peer: impl Into<String>) -> Self {
        Self {
            me: me.into(),
            peer: peer.into(),
            chats: Vec::new(),
        }
    }

    /// Build from a server response. Soft-deleted and duplicate chats are dropped.
    pub fn from_chats(me: impl Into<String>, peer: impl Into<String>, chats: Vec<Chat>) -> Self {
        let mut conversation = Self::new(me, peer);
        for chat in chats {
            conversation.add_chat(chat);
        }
        conversation
    }

    /// Insert keeping creation order. Equal timestamps keep arrival order.
    pub fn add_chat(&mut self, chat: Chat) {
        if chat.is_deleted || self.chats.iter().any(|c| c.id == chat.id) {
            return;
        }

        let pos = self
            .chats
            .iter()
            .position(|c| c.created_at > chat.created_at)
            .unwrap_or(self.chats.len());
        self.chats.insert(pos, chat);
    }

    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn messages(&self) -> Vec<ThreadMessage> {
        self.chats
            .iter()
            .map(|chat| ThreadMessage::from_chat(chat, &self.me))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.chats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }

    pub fn last_chat(&self) -> Option<&Chat> {
        self.chats.last()
    }
}

/// Clock time for a bubble ("14:05").
pub fn bubble_time<Tz: TimeZone>(at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%H:%M").to_string()
}

/// Sidebar time: clock time today, weekday within a week, else day + month.
pub fn short_time_label<Tz: TimeZone>(at: DateTime<Tz>, now: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let age = now.clone() - at.clone();
    if at.date_naive() == now.date_naive() {
        at.format("%H:%M").to_string()
    } else if age < chrono::Duration::days(7) && at.year() == now.year() {
        at.format("%a").to_string()
    } else {
        at.format("%d %b").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Message, UserRef};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn chat(id: &str, from: &str, to: &str, secs: i64, text: Option<&str>) -> Chat {
        Chat {
            id: id.into(),
            sender_id: from.into(),
            receiver_id: to.into(),
            message_id: format!("m-{}", id),
            created_at: at(secs),
            updated_at: None,
            is_deleted: false,
            status: ChatStatus::Sent,
            theme: None,
            message: Message {
                id: format!("m-{}", id),
                text: text.map(Into::into),
                photo: None,
                emoji: None,
                link: None,
                created_at: at(secs),
            },
            sender: UserRef {
                id: from.into(),
                name: from.to_uppercase(),
                ..Default::default()
            },
            receiver: UserRef {
                id: to.into(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_sorted_ascending_and_deduped() {
        let conv = Conversation::from_chats(
            "a",
            "b",
            vec![
                chat("3", "a", "b", 30, Some("third")),
                chat("1", "b", "a", 10, Some("first")),
                chat("2", "a", "b", 20, Some("second")),
                chat("1", "b", "a", 10, Some("first")),
            ],
        );
        let ids: Vec<_> = conv.chats().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(conv.last_chat().unwrap().id, "3");
    }

    #[test]
    fn test_soft_deleted_dropped() {
        let mut deleted = chat("1", "a", "b", 10, Some("gone"));
        deleted.is_deleted = true;
        let conv = Conversation::from_chats("a", "b", vec![deleted]);
        assert!(conv.is_empty());
    }

    #[test]
    fn test_own_messages_carry_status() {
        let mut seen = chat("1", "a", "b", 10, Some("hi"));
        seen.status = ChatStatus::Seen;
        let conv = Conversation::from_chats("a", "b", vec![seen, chat("2", "b", "a", 20, Some("yo"))]);
        let msgs = conv.messages();

        assert!(msgs[0].is_mine);
        assert_eq!(msgs[0].status, Some(StatusIndicator::Seen));
        assert!(!msgs[1].is_mine);
        assert_eq!(msgs[1].status, None);
        assert_eq!(msgs[1].sender_name, "B");
    }

    #[test]
    fn test_bubble_content_variants() {
        let mut image_only = chat("1", "a", "b", 0, Some(""));
        image_only.message.photo = Some("https://img/1.png".into());
        let mut captioned = chat("2", "a", "b", 1, Some("look"));
        captioned.message.photo = Some("https://img/2.png".into());

        let msgs = Conversation::from_chats("a", "b", vec![image_only, captioned]).messages();
        assert_eq!(msgs[0].content, BubbleContent::Image("https://img/1.png".into()));
        assert_eq!(msgs[0].text(), None);
        assert_eq!(msgs[1].photo(), Some("https://img/2.png"));
        assert_eq!(msgs[1].text(), Some("look"));
    }

    #[test]
    fn test_status_indicator_glyphs() {
        assert_eq!(StatusIndicator::Sent.check_count(), 1);
        assert_eq!(StatusIndicator::Delivered.check_count(), 2);
        assert_eq!(StatusIndicator::Seen.check_count(), 2);
        assert_eq!(StatusIndicator::Delivered.label(), None);
        assert_eq!(StatusIndicator::Seen.label(), Some("Seen"));
    }

    #[test]
    fn test_short_time_label() {
        let now = Utc.with_ymd_and_hms(2025, 6, 12, 18, 0, 0).unwrap();
        assert_eq!(short_time_label(Utc.with_ymd_and_hms(2025, 6, 12, 9, 5, 0).unwrap(), now), "09:05");
        assert_eq!(short_time_label(Utc.with_ymd_and_hms(2025, 6, 9, 9, 5, 0).unwrap(), now), "Mon");
        assert_eq!(short_time_label(Utc.with_ymd_and_hms(2025, 5, 1, 9, 5, 0).unwrap(), now), "01 May");
        assert_eq!(bubble_time(now), "18:00");
    }
}
