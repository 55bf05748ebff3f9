//! Application state container
//!
//! [`ChatClient`] owns everything the chat screens read: the session, the
//! directory and conversation caches, the selected peer and the in-flight
//! send flag. Views hold it behind an `Arc` and call its async operations
//! from event handlers.
//!
//! State sits behind a `parking_lot::Mutex` that is only held for short,
//! synchronous sections; network calls never run under the lock, so a slow
//! request cannot block rendering.

use parking_lot::Mutex;

use crate::api::ChatApi;
use crate::attachment::StagedImage;
use crate::composer::Composer;
use crate::conversation::Conversation;
use crate::directory::{build_directory, DirectoryEntry};
use crate::error::{ChatError, ChatResult};
use crate::query::{QueryCache, QueryStatus, RefetchPolicy};
use crate::session::{RouteGate, SessionAction, SessionState};
use crate::types::{
    CreateChatRequest, LoginRequest, ProfileUpdate, RegisterRequest, User, VerifyAccountRequest,
};
use crate::upload::{upload_or_absent, ImageHost};
use crate::validation;

/// Result of a successful send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    /// Body that was submitted
    pub payload: CreateChatRequest,
    /// An image was staged but its upload failed; sent as text only
    pub upload_failed: bool,
    /// Refetched thread, if the refetch succeeded and the peer is still selected
    pub conversation: Option<Conversation>,
}

struct ClientState {
    session: SessionState,
    directory: QueryCache<(), Vec<DirectoryEntry>>,
    conversations: QueryCache<String, Conversation>,
    selected_peer: Option<String>,
    sending: bool,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            session: SessionState::new(),
            directory: QueryCache::new(RefetchPolicy::ALWAYS_ON_MOUNT),
            conversations: QueryCache::new(RefetchPolicy::EXPLICIT_ONLY),
            selected_peer: None,
            sending: false,
        }
    }
}

/// Clears the in-flight flag however the send ends.
struct SendGuard<'a> {
    state: &'a Mutex<ClientState>,
}

impl Drop for SendGuard<'_> {
    fn drop(&mut self) {
        self.state.lock().sending = false;
    }
}

pub struct ChatClient<A, H> {
    api: A,
    images: H,
    state: Mutex<ClientState>,
}

impl<A: ChatApi, H: ImageHost> ChatClient<A, H> {
    pub fn new(api: A, images: H) -> Self {
        Self {
            api,
            images,
            state: Mutex::new(ClientState::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn images(&self) -> &H {
        &self.images
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    pub fn session_user(&self) -> Option<User> {
        self.state.lock().session.user().cloned()
    }

    fn dispatch(&self, action: SessionAction) {
        self.state.lock().session.apply(action);
    }

    fn me(&self) -> ChatResult<String> {
        self.state
            .lock()
            .session
            .user_id()
            .map(str::to_string)
            .ok_or(ChatError::NotAuthenticated)
    }

    /// Decide between public and protected routes.
    ///
    /// Without a session cookie (and no user in memory) no request is made.
    /// Otherwise `/user/me` is probed; any failure counts as anonymous.
    pub async fn restore_session(&self) -> RouteGate {
        let known = self.state.lock().session.is_logged_in();
        if !known && self.api.session_token().is_none() {
            tracing::debug!("No session cookie, skipping /user/me");
            return RouteGate::Anonymous;
        }

        match self.api.current_user().await {
            Ok(user) => {
                self.dispatch(SessionAction::SetUser(Some(user.clone())));
                RouteGate::Authenticated(user)
            }
            Err(e) => {
                tracing::info!(error = %e, "Session probe failed");
                self.dispatch(SessionAction::SetUser(None));
                RouteGate::Anonymous
            }
        }
    }

    pub async fn login(&self, req: LoginRequest) -> ChatResult<User> {
        validation::validate_login(&req).map_err(ChatError::Validation)?;

        let user = self.api.login(&req).await?;
        tracing::info!(user = %user.id, "Logged in");
        let token = self.api.session_token();
        let mut state = self.state.lock();
        state.session.apply(SessionAction::SetUser(Some(user.clone())));
        state.session.set_access_token(token);
        Ok(user)
    }

    /// Create an account. The returned user is pending OTP verification.
    pub async fn register(&self, req: RegisterRequest) -> ChatResult<User> {
        validation::validate_register(&req).map_err(ChatError::Validation)?;

        let user = self.api.register(&req).await?;
        tracing::info!(user = %user.id, "Registered, awaiting verification");
        self.dispatch(SessionAction::SetUser(Some(user.clone())));
        Ok(user)
    }

    /// Verify the pending account with the emailed code.
    pub async fn verify_account(&self, otp: &str) -> ChatResult<User> {
        let otp = validation::parse_otp(otp).map_err(ChatError::Validation)?;
        let id = self.me()?;

        let user = self
            .api
            .verify_account(&VerifyAccountRequest { id, otp })
            .await?;
        self.dispatch(SessionAction::CleanUser);
        self.dispatch(SessionAction::SetUser(Some(user.clone())));
        Ok(user)
    }

    /// Log out on the server, then forget everything locally.
    ///
    /// A failed call leaves the session untouched.
    pub async fn logout(&self) -> ChatResult<()> {
        self.api.logout().await?;

        let mut state = self.state.lock();
        state.session.apply(SessionAction::Logout);
        state.directory.clear();
        state.conversations.clear();
        state.selected_peer = None;
        Ok(())
    }

    pub async fn update_profile(
        &self,
        mut update: ProfileUpdate,
        avatar: Option<StagedImage>,
    ) -> ChatResult<User> {
        validation::validate_profile(&update).map_err(ChatError::Validation)?;
        let id = self.me()?;

        if let Some(image) = avatar {
            if let Some(url) = upload_or_absent(&self.images, &image).await {
                update.photo = url;
            }
        }

        let user = self.api.update_user(&id, &update).await?;
        let mut state = self.state.lock();
        state.session.apply(SessionAction::SetUser(Some(user.clone())));
        state.directory.invalidate(&());
        Ok(user)
    }

    // ------------------------------------------------------------------
    // Directory
    // ------------------------------------------------------------------

    /// Whether the peer list should fetch when it mounts. Always true.
    pub fn directory_needs_fetch(&self) -> bool {
        self.state.lock().directory.should_fetch_on_mount(&())
    }

    pub async fn refresh_directory(&self) -> ChatResult<Vec<DirectoryEntry>> {
        let (ticket, me) = {
            let mut state = self.state.lock();
            let me = state.session.user_id().map(str::to_string);
            (state.directory.begin(()), me)
        };

        match self.api.list_users().await {
            Ok(rows) => {
                let mut entries = build_directory(&rows);
                if let Some(me) = me {
                    entries.retain(|entry| entry.user.id != me);
                }
                self.state.lock().directory.complete(ticket, entries);
                Ok(self.directory())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Directory fetch failed");
                self.state.lock().directory.fail(ticket);
                Err(e)
            }
        }
    }

    /// Cached directory; empty before the first successful fetch.
    pub fn directory(&self) -> Vec<DirectoryEntry> {
        self.state
            .lock()
            .directory
            .get(&())
            .cloned()
            .unwrap_or_default()
    }

    pub fn directory_status(&self) -> QueryStatus {
        self.state.lock().directory.status(&())
    }

    /// Look up a peer in the cached directory.
    pub fn peer(&self, peer_id: &str) -> Option<User> {
        self.state
            .lock()
            .directory
            .get(&())
            .and_then(|entries| entries.iter().find(|e| e.user.id == peer_id))
            .map(|entry| entry.user.clone())
    }

    // ------------------------------------------------------------------
    // Conversation
    // ------------------------------------------------------------------

    /// Select a peer. Returns whether its conversation must be fetched.
    pub fn select_peer(&self, peer_id: impl Into<String>) -> bool {
        let peer_id = peer_id.into();
        let mut state = self.state.lock();
        let needs_fetch = state.conversations.should_fetch_on_mount(&peer_id);
        tracing::debug!(peer = %peer_id, needs_fetch, "Peer selected");
        state.selected_peer = Some(peer_id);
        needs_fetch
    }

    pub fn clear_peer(&self) {
        self.state.lock().selected_peer = None;
    }

    pub fn selected_peer(&self) -> Option<String> {
        self.state.lock().selected_peer.clone()
    }

    /// Fetch the thread with the selected peer.
    ///
    /// With no peer selected nothing is requested and `Ok(None)` is returned.
    /// The result is cached under the peer it was requested for; the return
    /// value is whatever is cached for the peer selected *now*.
    pub async fn load_conversation(&self) -> ChatResult<Option<Conversation>> {
        let (peer, me, ticket) = {
            let mut state = self.state.lock();
            let Some(peer) = state.selected_peer.clone() else {
                return Ok(None);
            };
            let me = state
                .session
                .user_id()
                .map(str::to_string)
                .ok_or(ChatError::NotAuthenticated)?;
            let ticket = state.conversations.begin(peer.clone());
            (peer, me, ticket)
        };

        match self.api.list_chats(&peer).await {
            Ok(chats) => {
                let conversation = Conversation::from_chats(me, peer, chats);
                self.state.lock().conversations.complete(ticket, conversation);
                Ok(self.conversation())
            }
            Err(e) => {
                tracing::warn!(peer = %peer, error = %e, "Conversation fetch failed");
                self.state.lock().conversations.fail(ticket);
                Err(e)
            }
        }
    }

    /// Fetch only if the selected conversation is missing or invalidated.
    pub async fn ensure_conversation(&self) -> ChatResult<Option<Conversation>> {
        let needs_fetch = {
            let state = self.state.lock();
            match &state.selected_peer {
                Some(peer) => state.conversations.should_fetch_on_mount(peer),
                None => false,
            }
        };
        if needs_fetch {
            self.load_conversation().await
        } else {
            Ok(self.conversation())
        }
    }

    /// Cached thread for the selected peer.
    pub fn conversation(&self) -> Option<Conversation> {
        let state = self.state.lock();
        let peer = state.selected_peer.as_ref()?;
        state.conversations.get(peer).cloned()
    }

    /// Revision of the selected thread's data; changes only on new results.
    pub fn conversation_revision(&self) -> u64 {
        let state = self.state.lock();
        state
            .selected_peer
            .as_ref()
            .map(|peer| state.conversations.revision(peer))
            .unwrap_or(0)
    }

    pub fn conversation_status(&self) -> QueryStatus {
        let state = self.state.lock();
        state
            .selected_peer
            .as_ref()
            .map(|peer| state.conversations.status(peer))
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Send
    // ------------------------------------------------------------------

    pub fn is_sending(&self) -> bool {
        self.state.lock().sending
    }

    /// Send the composer's content to the selected peer.
    ///
    /// 1. Upload the staged image, if any (a failed upload is logged and
    ///    treated as no image).
    /// 2. `POST /chat/create` with text, receiver and photo URL.
    /// 3. On success reset the composer, invalidate the thread and the
    ///    directory and refetch both.
    ///
    /// On failure the composer is left as it was. A second call while one
    /// is in flight is rejected with [`ChatError::SendInFlight`].
    pub async fn send_message(&self, composer: &mut Composer) -> ChatResult<SendOutcome> {
        if !composer.can_send() {
            return Err(ChatError::EmptyMessage);
        }

        let (peer, _guard) = {
            let mut state = self.state.lock();
            let peer = state
                .selected_peer
                .clone()
                .ok_or(ChatError::NoPeerSelected)?;
            if state.sending {
                return Err(ChatError::SendInFlight);
            }
            state.sending = true;
            (peer, SendGuard { state: &self.state })
        };

        let photo = match composer.staged() {
            Some(image) => upload_or_absent(&self.images, image).await,
            None => None,
        };
        let upload_failed = composer.staged().is_some() && photo.is_none();
        if upload_failed && composer.text().trim().is_empty() {
            return Err(ChatError::Upload("image upload failed".to_string()));
        }

        let payload = composer.payload(&peer, photo);
        if let Err(e) = self.api.create_chat(&payload).await {
            tracing::error!(peer = %peer, error = %e, "Send failed");
            return Err(e);
        }
        tracing::info!(peer = %peer, has_photo = payload.photo.is_some(), "Message sent");

        composer.reset();
        {
            let mut state = self.state.lock();
            state.conversations.invalidate(&peer);
            state.directory.invalidate(&());
        }

        let conversation = match self.load_conversation().await {
            Ok(conversation) => conversation,
            Err(e) => {
                tracing::warn!(error = %e, "Refetch after send failed");
                None
            }
        };
        if let Err(e) = self.refresh_directory().await {
            tracing::warn!(error = %e, "Directory refresh after send failed");
        }

        Ok(SendOutcome {
            payload,
            upload_failed,
            conversation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::{tests::PNG_HEADER, MAX_IMAGE_BYTES};
    use crate::types::{Chat, ChatStatus, DirectoryUser, Message, UserRef};
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Default)]
    struct StubApi {
        me: User,
        chats: Mutex<Vec<Chat>>,
        fail_create: AtomicBool,
        fail_logout: bool,
        created: Mutex<Vec<CreateChatRequest>>,
        calls: AtomicUsize,
    }

    impl StubApi {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn hit(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl ChatApi for StubApi {
        async fn register(&self, _req: &RegisterRequest) -> ChatResult<User> {
            self.hit();
            Ok(self.me.clone())
        }

        async fn login(&self, _req: &LoginRequest) -> ChatResult<User> {
            self.hit();
            Ok(self.me.clone())
        }

        async fn verify_account(&self, _req: &VerifyAccountRequest) -> ChatResult<User> {
            self.hit();
            Ok(User {
                is_account_active: true,
                ..self.me.clone()
            })
        }

        async fn current_user(&self) -> ChatResult<User> {
            self.hit();
            Ok(self.me.clone())
        }

        async fn logout(&self) -> ChatResult<()> {
            self.hit();
            if self.fail_logout {
                return Err(ChatError::Api {
                    status: 500,
                    message: String::new(),
                });
            }
            Ok(())
        }

        async fn list_users(&self) -> ChatResult<Vec<DirectoryUser>> {
            self.hit();
            Ok(Vec::new())
        }

        async fn update_user(&self, _user_id: &str, update: &ProfileUpdate) -> ChatResult<User> {
            self.hit();
            Ok(User {
                name: update.name.clone(),
                photo: update.photo.clone(),
                ..self.me.clone()
            })
        }

        async fn create_chat(&self, req: &CreateChatRequest) -> ChatResult<()> {
            self.hit();
            if self.fail_create.load(Ordering::SeqCst) {
                return Err(ChatError::Api {
                    status: 500,
                    message: "Server error".into(),
                });
            }
            let n = self.created.lock().len() as i64;
            self.chats.lock().push(chat(&format!("c{n}"), &self.me.id, &req.receiver_id, &req.text, n));
            self.created.lock().push(req.clone());
            Ok(())
        }

        async fn list_chats(&self, _receiver_id: &str) -> ChatResult<Vec<Chat>> {
            self.hit();
            Ok(self.chats.lock().clone())
        }
    }

    struct StubHost {
        fail: bool,
    }

    impl ImageHost for StubHost {
        async fn upload(&self, image: &StagedImage) -> ChatResult<String> {
            if self.fail {
                return Err(ChatError::Upload("offline".into()));
            }
            Ok(format!("https://img.example/{}", image.file_name))
        }
    }

    fn chat(id: &str, from: &str, to: &str, text: &str, secs: i64) -> Chat {
        let created_at = Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap();
        Chat {
            id: id.into(),
            sender_id: from.into(),
            receiver_id: to.into(),
            message_id: format!("m-{id}"),
            created_at,
            updated_at: None,
            is_deleted: false,
            status: ChatStatus::Sent,
            theme: None,
            message: Message {
                id: format!("m-{id}"),
                text: Some(text.into()),
                photo: None,
                emoji: None,
                link: None,
                created_at,
            },
            sender: UserRef {
                id: from.into(),
                ..Default::default()
            },
            receiver: UserRef {
                id: to.into(),
                ..Default::default()
            },
        }
    }

    fn ana() -> User {
        User {
            id: "a".into(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            ..Default::default()
        }
    }

    async fn logged_in(api: StubApi, fail_upload: bool) -> ChatClient<StubApi, StubHost> {
        let client = ChatClient::new(api, StubHost { fail: fail_upload });
        client
            .login(LoginRequest::new("ana@example.com", "password1"))
            .await
            .unwrap();
        client
    }

    fn png() -> StagedImage {
        StagedImage::from_bytes("cat.png", PNG_HEADER.to_vec(), MAX_IMAGE_BYTES).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_login_makes_no_request() {
        let client = ChatClient::new(StubApi { me: ana(), ..Default::default() }, StubHost { fail: false });
        let err = client
            .login(LoginRequest::new("ana", "short"))
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::Validation(_)));
        assert_eq!(client.api().calls(), 0);
        assert!(client.session_user().is_none());
    }

    #[tokio::test]
    async fn test_restore_without_cookie_stays_anonymous() {
        let client = ChatClient::new(StubApi { me: ana(), ..Default::default() }, StubHost { fail: false });
        assert_eq!(client.restore_session().await, RouteGate::Anonymous);
        assert_eq!(client.api().calls(), 0);
    }

    #[tokio::test]
    async fn test_verify_requires_pending_user() {
        let client = ChatClient::new(StubApi { me: ana(), ..Default::default() }, StubHost { fail: false });
        let err = client.verify_account("123456").await.unwrap_err();
        assert!(matches!(err, ChatError::NotAuthenticated));

        client
            .register(RegisterRequest {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                phone: "5550001111".into(),
                password: "Password1".into(),
            })
            .await
            .unwrap();
        let user = client.verify_account("123456").await.unwrap();
        assert!(user.is_account_active);
        assert_eq!(client.session_user(), Some(user));
    }

    #[tokio::test]
    async fn test_load_without_peer_is_skipped() {
        let client = logged_in(StubApi { me: ana(), ..Default::default() }, false).await;
        let before = client.api().calls();
        assert_eq!(client.load_conversation().await.unwrap(), None);
        assert_eq!(client.api().calls(), before);
    }

    #[tokio::test]
    async fn test_send_requires_peer_and_content() {
        let client = logged_in(StubApi { me: ana(), ..Default::default() }, false).await;
        let mut composer = Composer::new();
        assert!(matches!(
            client.send_message(&mut composer).await,
            Err(ChatError::EmptyMessage)
        ));

        composer.set_text("hi");
        assert!(matches!(
            client.send_message(&mut composer).await,
            Err(ChatError::NoPeerSelected)
        ));
        assert!(client.api().created.lock().is_empty());
    }

    #[tokio::test]
    async fn test_failed_send_keeps_composer_and_releases_flag() {
        let api = StubApi { me: ana(), ..Default::default() };
        api.fail_create.store(true, Ordering::SeqCst);
        let client = logged_in(api, false).await;
        client.select_peer("b");

        let mut composer = Composer::new();
        composer.set_text("hello");
        let err = client.send_message(&mut composer).await.unwrap_err();
        assert!(matches!(err, ChatError::Api { status: 500, .. }));
        assert_eq!(composer.text(), "hello");
        assert!(!client.is_sending());

        client.api().fail_create.store(false, Ordering::SeqCst);
        let outcome = client.send_message(&mut composer).await.unwrap();
        assert_eq!(outcome.payload.text, "hello");
        assert_eq!(composer, Composer::new());
    }

    #[tokio::test]
    async fn test_failed_upload_without_text_aborts() {
        let client = logged_in(StubApi { me: ana(), ..Default::default() }, true).await;
        client.select_peer("b");

        let mut composer = Composer::new();
        composer.stage(png());
        let err = client.send_message(&mut composer).await.unwrap_err();
        assert!(matches!(err, ChatError::Upload(_)));
        assert!(composer.staged().is_some());
        assert!(client.api().created.lock().is_empty());
    }

    #[tokio::test]
    async fn test_failed_upload_with_text_sends_text_only() {
        let client = logged_in(StubApi { me: ana(), ..Default::default() }, true).await;
        client.select_peer("b");

        let mut composer = Composer::new();
        composer.set_text("look");
        composer.stage(png());
        let outcome = client.send_message(&mut composer).await.unwrap();
        assert!(outcome.upload_failed);
        assert_eq!(outcome.payload.photo, None);
        assert_eq!(outcome.conversation.map(|c| c.len()), Some(1));
    }

    #[tokio::test]
    async fn test_logout_failure_keeps_session() {
        let client = logged_in(
            StubApi {
                me: ana(),
                fail_logout: true,
                ..Default::default()
            },
            false,
        )
        .await;
        assert!(client.logout().await.is_err());
        assert_eq!(client.session_user(), Some(ana()));
    }

    #[tokio::test]
    async fn test_logout_forgets_selection_and_caches() {
        let client = logged_in(StubApi { me: ana(), ..Default::default() }, false).await;
        client.select_peer("b");
        client.load_conversation().await.unwrap();
        assert!(client.conversation().is_some());

        client.logout().await.unwrap();
        assert_eq!(client.session_user(), None);
        assert_eq!(client.selected_peer(), None);
        client.select_peer("b");
        assert_eq!(client.conversation(), None);
    }

    #[tokio::test]
    async fn test_profile_update_uses_uploaded_avatar() {
        let client = logged_in(StubApi { me: ana(), ..Default::default() }, false).await;
        let mut update = ProfileUpdate::from(&ana());
        update.name = "Ana B".into();

        let user = client.update_profile(update, Some(png())).await.unwrap();
        assert_eq!(user.name, "Ana B");
        assert_eq!(user.photo, "https://img.example/cat.png");
        assert_eq!(client.session_user(), Some(user));
    }

    #[tokio::test]
    async fn test_conversation_is_not_refetched_on_reselect() {
        let client = logged_in(StubApi { me: ana(), ..Default::default() }, false).await;
        assert!(client.select_peer("b"));
        client.load_conversation().await.unwrap();

        client.clear_peer();
        assert!(!client.select_peer("b"));
        assert!(client.directory_needs_fetch());
    }
}
