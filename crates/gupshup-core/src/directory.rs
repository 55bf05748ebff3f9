//! User directory
//!
//! Rows of `GET /user`, each annotated with the most recent chat exchanged
//! with that user and a one-line preview for the sidebar.

use chrono::Local;

use crate::conversation::short_time_label;
use crate::types::{ChatSummary, DirectoryUser, User};

/// Preview for a latest message that carries only an image.
pub const PHOTO_PREVIEW: &str = "📷 Photo";
/// Preview when no chat exists with the user yet.
pub const EMPTY_PREVIEW: &str = "Start a conversation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub user: User,
    pub latest: Option<ChatSummary>,
    pub preview: String,
}

impl DirectoryEntry {
    pub fn from_row(row: &DirectoryUser) -> Self {
        let latest = latest_chat(&row.sent_chats, &row.received_chats).cloned();
        let preview = preview_for(latest.as_ref());
        Self {
            user: row.to_user(),
            latest,
            preview,
        }
    }

    /// Short time label of the latest chat ("14:05", "Mon", "03 Feb").
    pub fn time_label(&self) -> Option<String> {
        self.latest
            .as_ref()
            .map(|chat| short_time_label(chat.created_at.with_timezone(&Local), Local::now()))
    }
}

fn newest(chats: &[ChatSummary]) -> Option<&ChatSummary> {
    chats.iter().max_by_key(|chat| chat.created_at)
}

/// Newest of the latest sent and latest received chat.
///
/// On an exact timestamp tie the received chat wins.
pub fn latest_chat<'a>(
    sent: &'a [ChatSummary],
    received: &'a [ChatSummary],
) -> Option<&'a ChatSummary> {
    match (newest(sent), newest(received)) {
        (Some(s), Some(r)) => Some(if s.created_at > r.created_at { s } else { r }),
        (Some(s), None) => Some(s),
        (None, r) => r,
    }
}

/// Sidebar preview: text, else a photo label, else the empty-state label.
pub fn preview_for(latest: Option<&ChatSummary>) -> String {
    match latest {
        None => EMPTY_PREVIEW.to_string(),
        Some(chat) => match (chat.message.text(), chat.message.photo()) {
            (Some(text), _) => text.to_string(),
            (None, Some(_)) => PHOTO_PREVIEW.to_string(),
            (None, None) => String::new(),
        },
    }
}

/// Build entries in server order.
pub fn build_directory(rows: &[DirectoryUser]) -> Vec<DirectoryEntry> {
    rows.iter().map(DirectoryEntry::from_row).collect()
}

/// Case-insensitive search over name and username. Blank query keeps all.
pub fn filter_directory<'a>(entries: &'a [DirectoryEntry], query: &str) -> Vec<&'a DirectoryEntry> {
    let needle = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.user.name.to_lowercase().contains(&needle)
                || entry.user.username.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Message, UserRef};
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn summary(id: &str, secs: i64, text: Option<&str>, photo: Option<&str>) -> ChatSummary {
        ChatSummary {
            id: id.into(),
            created_at: at(secs),
            message: Message {
                id: format!("m-{}", id),
                text: text.map(Into::into),
                photo: photo.map(Into::into),
                emoji: None,
                link: None,
                created_at: at(secs),
            },
            sender: UserRef::default(),
        }
    }

    #[test]
    fn test_latest_picks_newest_across_directions() {
        let sent = vec![summary("s1", 10, Some("a"), None), summary("s2", 30, Some("b"), None)];
        let received = vec![summary("r1", 20, Some("c"), None)];
        assert_eq!(latest_chat(&sent, &received).unwrap().id, "s2");

        let received = vec![summary("r2", 40, Some("d"), None)];
        assert_eq!(latest_chat(&sent, &received).unwrap().id, "r2");
    }

    #[test]
    fn test_latest_one_side_or_none() {
        let only = vec![summary("s1", 10, Some("a"), None)];
        assert_eq!(latest_chat(&only, &[]).unwrap().id, "s1");
        assert_eq!(latest_chat(&[], &only).unwrap().id, "s1");
        assert!(latest_chat(&[], &[]).is_none());
    }

    #[test]
    fn test_preview_labels() {
        assert_eq!(preview_for(None), EMPTY_PREVIEW);
        assert_eq!(preview_for(Some(&summary("x", 0, Some("hi"), None))), "hi");
        assert_eq!(
            preview_for(Some(&summary("x", 0, Some(""), Some("https://img/p.png")))),
            PHOTO_PREVIEW
        );
        assert_eq!(
            preview_for(Some(&summary("x", 0, Some("look"), Some("https://img/p.png")))),
            "look"
        );
    }

    #[test]
    fn test_filter_matches_name_and_username() {
        let rows = vec![
            DirectoryUser {
                id: "1".into(),
                name: "Ana Lopez".into(),
                username: "ana".into(),
                ..Default::default()
            },
            DirectoryUser {
                id: "2".into(),
                name: "Bo".into(),
                username: "bobo".into(),
                ..Default::default()
            },
        ];
        let entries = build_directory(&rows);

        assert_eq!(filter_directory(&entries, "").len(), 2);
        assert_eq!(filter_directory(&entries, "LOP")[0].user.id, "1");
        assert_eq!(filter_directory(&entries, "bob")[0].user.id, "2");
        assert!(filter_directory(&entries, "zed").is_empty());
    }
}
