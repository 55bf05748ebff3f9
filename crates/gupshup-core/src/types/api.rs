//! Request bodies and the response envelope

use serde::{Deserialize, Serialize};

/// Envelope every endpoint answers with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// `POST /user/register`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// `POST /user/login`.
///
/// The `email` field carries whatever the user typed as identifier, email
/// or phone number; the server resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: login.into(),
            password: password.into(),
        }
    }
}

/// `POST /user/verify-account`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyAccountRequest {
    pub id: String,
    pub otp: u32,
}

/// `PATCH /user/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub username: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub photo: String,
}

impl From<&super::User> for ProfileUpdate {
    fn from(user: &super::User) -> Self {
        Self {
            name: user.name.clone(),
            username: user.username.clone(),
            bio: user.bio.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            photo: user.photo.clone(),
        }
    }
}

/// `POST /chat/create`.
///
/// `text` is always sent, possibly empty; `photo` only when an upload
/// produced a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatRequest {
    pub text: String,
    pub receiver_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_chat_omits_absent_photo() {
        let req = CreateChatRequest {
            text: "hi".into(),
            receiver_id: "b".into(),
            photo: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"text": "hi", "receiverId": "b"}));
    }

    #[test]
    fn test_create_chat_image_only() {
        let req = CreateChatRequest {
            text: String::new(),
            receiver_id: "b".into(),
            photo: Some("https://cdn/x.jpg".into()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text": "", "receiverId": "b", "photo": "https://cdn/x.jpg"})
        );
    }

    #[test]
    fn test_envelope_without_data() {
        let env: ApiResponse<super::super::User> =
            serde_json::from_str(r#"{"success":false,"message":"Invalid OTP"}"#).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message.as_deref(), Some("Invalid OTP"));
    }
}
