//! User records
//!
//! The server returns slightly different user shapes depending on the
//! endpoint: full profiles for `/user/me`, thin snapshots inside chats, and
//! directory rows carrying each user's chats.

use serde::{Deserialize, Deserializer, Serialize};

use super::chat::ChatSummary;

/// Accept `null` where the server leaves an optional string unset.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Full identity record of an account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default)]
    pub is_account_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,
}

impl User {
    /// First letter of the display name, used when no photo is set.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Initials of every word in the name ("Ana Maria" -> "AM").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Whether a photo URL is set.
    pub fn has_photo(&self) -> bool {
        !self.photo.trim().is_empty()
    }
}

/// Sender/receiver snapshot embedded in chat records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
}

/// One row of `GET /user`: a user plus the chats they sent and received.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo: String,
    #[serde(default)]
    pub is_account_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(default)]
    pub sent_chats: Vec<ChatSummary>,
    #[serde(default)]
    pub received_chats: Vec<ChatSummary>,
}

impl DirectoryUser {
    /// Profile part of the row, without chats.
    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            photo: self.photo.clone(),
            username: self.username.clone(),
            is_account_active: self.is_account_active,
            bio: self.bio.clone(),
        }
    }
}
