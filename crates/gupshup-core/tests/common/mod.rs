//! Shared fixtures: an in-memory backend that behaves like the API server
//! for a handful of users.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use parking_lot::Mutex;
use tokio::sync::Notify;

use gupshup_core::{
    Chat, ChatApi, ChatError, ChatResult, ChatStatus, ChatSummary, CreateChatRequest,
    DirectoryUser, ImageHost, LoginRequest, Message, ProfileUpdate, RegisterRequest, StagedImage,
    User, UserRef, VerifyAccountRequest,
};

pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@example.com"),
        username: id.to_string(),
        is_account_active: true,
        ..Default::default()
    }
}

fn user_ref(user: &User) -> UserRef {
    UserRef {
        id: user.id.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        photo: user.photo.clone(),
        username: user.username.clone(),
    }
}

/// Server-side state shared by every client in a test.
pub struct World {
    users: Mutex<Vec<User>>,
    chats: Mutex<Vec<Chat>>,
    created: Mutex<Vec<CreateChatRequest>>,
    holds: Mutex<HashMap<String, Arc<Notify>>>,
    clock: AtomicU64,
    epoch: DateTime<Utc>,
}

impl World {
    pub fn new(users: Vec<User>) -> Arc<Self> {
        Arc::new(Self {
            users: Mutex::new(users),
            chats: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            holds: Mutex::new(HashMap::new()),
            clock: AtomicU64::new(0),
            epoch: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
        })
    }

    /// A client-side API handle, not yet logged in.
    pub fn api(self: &Arc<Self>) -> MemoryApi {
        MemoryApi {
            world: self.clone(),
            me: Mutex::new(None),
        }
    }

    /// Every `POST /chat/create` body received so far.
    pub fn created(&self) -> Vec<CreateChatRequest> {
        self.created.lock().clone()
    }

    /// Make `GET /chat/{peer}` wait until the returned handle is notified.
    pub fn hold_chats_for(&self, peer: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.holds.lock().insert(peer.to_string(), notify.clone());
        notify
    }

    fn tick(&self) -> DateTime<Utc> {
        let n = self.clock.fetch_add(1, Ordering::SeqCst) as i64;
        self.epoch + Duration::minutes(n)
    }

    fn find(&self, id: &str) -> Option<User> {
        self.users.lock().iter().find(|u| u.id == id).cloned()
    }

    fn summary(chat: &Chat) -> ChatSummary {
        ChatSummary {
            id: chat.id.clone(),
            created_at: chat.created_at,
            message: chat.message.clone(),
            sender: chat.sender.clone(),
        }
    }
}

pub struct MemoryApi {
    world: Arc<World>,
    me: Mutex<Option<User>>,
}

impl MemoryApi {
    fn me(&self) -> ChatResult<User> {
        self.me.lock().clone().ok_or(ChatError::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        })
    }
}

impl ChatApi for MemoryApi {
    async fn register(&self, req: &RegisterRequest) -> ChatResult<User> {
        let id = format!("u{}", self.world.users.lock().len() + 1);
        let user = User {
            id,
            name: req.name.clone(),
            email: req.email.clone(),
            phone: req.phone.clone(),
            ..Default::default()
        };
        self.world.users.lock().push(user.clone());
        Ok(user)
    }

    async fn login(&self, req: &LoginRequest) -> ChatResult<User> {
        let found = self
            .world
            .users
            .lock()
            .iter()
            .find(|u| u.email == req.email || u.phone == req.email)
            .cloned();
        let user = found.ok_or(ChatError::Api {
            status: 401,
            message: "Invalid credentials".to_string(),
        })?;
        *self.me.lock() = Some(user.clone());
        Ok(user)
    }

    async fn verify_account(&self, req: &VerifyAccountRequest) -> ChatResult<User> {
        let mut users = self.world.users.lock();
        let user = users
            .iter_mut()
            .find(|u| u.id == req.id)
            .ok_or(ChatError::Api {
                status: 404,
                message: "User not found".to_string(),
            })?;
        user.is_account_active = true;
        Ok(user.clone())
    }

    async fn current_user(&self) -> ChatResult<User> {
        self.me()
    }

    async fn logout(&self) -> ChatResult<()> {
        *self.me.lock() = None;
        Ok(())
    }

    async fn list_users(&self) -> ChatResult<Vec<DirectoryUser>> {
        let me = self.me()?;
        let users = self.world.users.lock().clone();
        let chats = self.world.chats.lock().clone();
        let rows = users
            .into_iter()
            .filter(|u| u.id != me.id)
            .map(|u| {
                let between = |from: &str, to: &str| -> Vec<ChatSummary> {
                    chats
                        .iter()
                        .filter(|c| c.sender_id == from && c.receiver_id == to)
                        .map(World::summary)
                        .collect()
                };
                DirectoryUser {
                    sent_chats: between(&u.id, &me.id),
                    received_chats: between(&me.id, &u.id),
                    id: u.id,
                    name: u.name,
                    email: u.email,
                    username: u.username,
                    phone: u.phone,
                    photo: u.photo,
                    is_account_active: u.is_account_active,
                    bio: u.bio,
                }
            })
            .collect();
        Ok(rows)
    }

    async fn update_user(&self, user_id: &str, update: &ProfileUpdate) -> ChatResult<User> {
        let mut users = self.world.users.lock();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(ChatError::Api {
                status: 404,
                message: "User not found".to_string(),
            })?;
        user.name = update.name.clone();
        user.username = update.username.clone();
        user.bio = update.bio.clone();
        user.email = update.email.clone();
        user.phone = update.phone.clone();
        user.photo = update.photo.clone();
        Ok(user.clone())
    }

    async fn create_chat(&self, req: &CreateChatRequest) -> ChatResult<()> {
        // Let concurrent callers interleave like a real request would.
        tokio::task::yield_now().await;

        let me = self.me()?;
        let peer = self.world.find(&req.receiver_id).ok_or(ChatError::Api {
            status: 404,
            message: "Receiver not found".to_string(),
        })?;
        let at = self.world.tick();
        let n = self.world.chats.lock().len() + 1;
        let chat = Chat {
            id: format!("c{n}"),
            sender_id: me.id.clone(),
            receiver_id: peer.id.clone(),
            message_id: format!("m{n}"),
            created_at: at,
            updated_at: Some(at),
            is_deleted: false,
            status: ChatStatus::Sent,
            theme: None,
            message: Message {
                id: format!("m{n}"),
                text: (!req.text.is_empty()).then(|| req.text.clone()),
                photo: req.photo.clone(),
                emoji: None,
                link: None,
                created_at: at,
            },
            sender: user_ref(&me),
            receiver: user_ref(&peer),
        };
        self.world.chats.lock().push(chat);
        self.world.created.lock().push(req.clone());
        Ok(())
    }

    async fn list_chats(&self, receiver_id: &str) -> ChatResult<Vec<Chat>> {
        let hold = self.world.holds.lock().remove(receiver_id);
        if let Some(hold) = hold {
            hold.notified().await;
        }

        let me = self.me()?;
        let chats = self
            .world
            .chats
            .lock()
            .iter()
            .filter(|c| {
                (c.sender_id == me.id && c.receiver_id == receiver_id)
                    || (c.sender_id == receiver_id && c.receiver_id == me.id)
            })
            .cloned()
            .collect();
        Ok(chats)
    }

    fn session_token(&self) -> Option<String> {
        self.me.lock().as_ref().map(|u| format!("tok-{}", u.id))
    }
}

/// Image host that hands back predictable URLs, or always fails.
pub struct MemoryHost {
    pub fail: bool,
}

impl ImageHost for MemoryHost {
    async fn upload(&self, image: &StagedImage) -> ChatResult<String> {
        if self.fail {
            return Err(ChatError::Upload("Upload preset not found".to_string()));
        }
        Ok(format!(
            "https://res.cloudinary.com/demo/image/upload/{}",
            image.file_name
        ))
    }
}

/// Smallest byte string `image` recognises as PNG.
pub const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
];
