//! REST access to the GupShup API server
//!
//! [`ChatApi`] is the seam the rest of the crate talks to. [`HttpApi`] is the
//! real implementation over `reqwest`; tests substitute in-memory fakes.
//!
//! Every request carries the session cookie: the client keeps a cookie jar
//! that the login response populates.

use std::future::Future;
use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::cookie::cookie_value;
use crate::error::{ChatError, ChatResult};
use crate::types::{
    ApiResponse, Chat, CreateChatRequest, DirectoryUser, LoginRequest, ProfileUpdate,
    RegisterRequest, User, VerifyAccountRequest,
};

/// Operations the client needs from the API server.
pub trait ChatApi {
    /// `POST /user/register`. Returns the pending (unverified) account.
    fn register(&self, req: &RegisterRequest) -> impl Future<Output = ChatResult<User>> + Send;

    /// `POST /user/login`
    fn login(&self, req: &LoginRequest) -> impl Future<Output = ChatResult<User>> + Send;

    /// `POST /user/verify-account`
    fn verify_account(
        &self,
        req: &VerifyAccountRequest,
    ) -> impl Future<Output = ChatResult<User>> + Send;

    /// `GET /user/me`
    fn current_user(&self) -> impl Future<Output = ChatResult<User>> + Send;

    /// `POST /user/logout`
    fn logout(&self) -> impl Future<Output = ChatResult<()>> + Send;

    /// `GET /user`: everyone else, with their chats.
    fn list_users(&self) -> impl Future<Output = ChatResult<Vec<DirectoryUser>>> + Send;

    /// `PATCH /user/{id}`
    fn update_user(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> impl Future<Output = ChatResult<User>> + Send;

    /// `POST /chat/create`
    fn create_chat(&self, req: &CreateChatRequest) -> impl Future<Output = ChatResult<()>> + Send;

    /// `GET /chat/{receiverId}`
    fn list_chats(&self, receiver_id: &str) -> impl Future<Output = ChatResult<Vec<Chat>>> + Send;

    /// Session token visible to the client, if any.
    fn session_token(&self) -> Option<String> {
        None
    }
}

/// [`ChatApi`] over HTTP.
#[derive(Clone)]
pub struct HttpApi {
    http: Client,
    jar: Arc<Jar>,
    base: Url,
    /// URL the session probe hits; cookies are read back for this path.
    probe: Url,
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> ChatResult<Self> {
        let base = Url::parse(&config.api_base_url)
            .map_err(|e| ChatError::Config(format!("invalid API URL {}: {}", config.api_base_url, e)))?;
        let probe = Url::parse(&config.endpoint("/user/me"))
            .map_err(|e| ChatError::Config(format!("invalid API URL {}: {}", config.api_base_url, e)))?;
        let jar = Arc::new(Jar::default());
        let http = Client::builder().cookie_provider(jar.clone()).build()?;

        Ok(Self {
            http,
            jar,
            base,
            probe,
            config: config.clone(),
        })
    }

    /// Seed the jar with a token obtained elsewhere (e.g. a previous run).
    pub fn restore_token(&self, token: &str) {
        let cookie = format!("{}={}; Path=/", self.config.session_cookie_name, token);
        self.jar.add_cookie_str(&cookie, &self.base);
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!(%method, %url, "API request");
        self.http.request(method, url)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ChatResult<ApiResponse<T>> {
        let response = builder.send().await?;
        read_envelope(response).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ChatResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let envelope = self.send(self.request(method, path).json(body)).await?;
        require_data(envelope)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ChatResult<T> {
        let envelope = self.send(self.request(Method::GET, path)).await?;
        require_data(envelope)
    }
}

impl ChatApi for HttpApi {
    async fn register(&self, req: &RegisterRequest) -> ChatResult<User> {
        self.send_json(Method::POST, "/user/register", req).await
    }

    async fn login(&self, req: &LoginRequest) -> ChatResult<User> {
        self.send_json(Method::POST, "/user/login", req).await
    }

    async fn verify_account(&self, req: &VerifyAccountRequest) -> ChatResult<User> {
        self.send_json(Method::POST, "/user/verify-account", req).await
    }

    async fn current_user(&self) -> ChatResult<User> {
        self.get("/user/me").await
    }

    async fn logout(&self) -> ChatResult<()> {
        let _: ApiResponse<serde_json::Value> =
            self.send(self.request(Method::POST, "/user/logout")).await?;
        Ok(())
    }

    async fn list_users(&self) -> ChatResult<Vec<DirectoryUser>> {
        self.get("/user").await
    }

    async fn update_user(&self, user_id: &str, update: &ProfileUpdate) -> ChatResult<User> {
        self.send_json(Method::PATCH, &format!("/user/{}", user_id), update)
            .await
    }

    async fn create_chat(&self, req: &CreateChatRequest) -> ChatResult<()> {
        let _: ApiResponse<serde_json::Value> = self
            .send(self.request(Method::POST, "/chat/create").json(req))
            .await?;
        Ok(())
    }

    async fn list_chats(&self, receiver_id: &str) -> ChatResult<Vec<Chat>> {
        self.get(&format!("/chat/{}", receiver_id)).await
    }

    fn session_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.probe)?;
        let header = header.to_str().ok()?;
        cookie_value(header, &self.config.session_cookie_name)
    }
}

/// Decode an envelope, mapping HTTP failures and `success: false` to
/// [`ChatError::Api`].
async fn read_envelope<T: DeserializeOwned>(response: Response) -> ChatResult<ApiResponse<T>> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        // Error bodies usually follow the envelope too; use their message when present.
        let message = serde_json::from_slice::<ApiResponse<serde_json::Value>>(&body)
            .ok()
            .and_then(|env| env.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());
        tracing::warn!(status = status.as_u16(), %message, "API request failed");
        return Err(ChatError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let envelope: ApiResponse<T> = serde_json::from_slice(&body)?;
    if !envelope.success {
        return Err(ChatError::Api {
            status: status.as_u16(),
            message: envelope.message.unwrap_or_default(),
        });
    }
    Ok(envelope)
}

fn require_data<T>(envelope: ApiResponse<T>) -> ChatResult<T> {
    envelope.data.ok_or_else(|| ChatError::Api {
        status: 200,
        message: envelope
            .message
            .unwrap_or_else(|| "Response carried no data".to_string()),
    })
}
