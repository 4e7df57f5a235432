use std::time::Duration;

use tracing::debug;

use tgb_core::{
    config::Config,
    domain::{ChatTarget, MessageRef},
    messaging::types::{ChatAction, InlineKeyboard, MediaKind},
    objects::{FileDescriptor, Update, User, WebhookInfo},
    Result,
};

use crate::{
    commands::{self, ApiRequest, UpdatesQuery, Verb},
    identity::Identity,
    media_edit::{self, MediaEdit},
    transport::{HttpTransport, RawResponse, Transport},
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Bot API client: builder → transport → envelope.
///
/// Holds no mutable state, so a shared reference can be used from many tasks at once.
/// Nothing is retried; each call is one round trip (two for downloads).
///
/// Write operations return the raw body, reads return the decoded `result`.
/// Both surface `ok=false` as `Error::RemoteRejected`.
#[derive(Clone)]
pub struct BotClient<T: Transport = HttpTransport> {
    pub(crate) transport: T,
}

impl BotClient<HttpTransport> {
    /// Client for `https://api.telegram.org` with a 30s per-request timeout.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_timeout(Identity::new(token), DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(identity: Identity, timeout: Duration) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(identity, timeout)?))
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::with_timeout(
            Identity::with_base(&cfg.api_base, cfg.bot_token.clone()),
            cfg.request_timeout,
        )
    }
}

impl<T: Transport> BotClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn identity(&self) -> &Identity {
        self.transport.identity()
    }

    /// Run a built request and return the body as received.
    pub async fn execute(&self, req: &ApiRequest) -> Result<RawResponse> {
        debug!(method = req.method, "executing bot api request");
        match req.verb {
            Verb::Post => self.transport.post_json(req.method, &req.params).await,
            Verb::Get => self.transport.get_json(req.method, &req.params).await,
        }
    }

    /// Run a write operation: raw body back, `ok=false` as an error.
    async fn call(&self, req: ApiRequest) -> Result<RawResponse> {
        let raw = self.execute(&req).await?;
        raw.envelope()?.ensure_ok()?;
        Ok(raw)
    }

    /// Run a read operation and decode its `result`.
    async fn query<R: serde::de::DeserializeOwned>(&self, req: ApiRequest) -> Result<R> {
        self.execute(&req).await?.decode()
    }

    pub async fn send_message(
        &self,
        chat: impl Into<ChatTarget>,
        text: &str,
        buttons: Option<&InlineKeyboard>,
    ) -> Result<RawResponse> {
        self.call(commands::send_message(&chat.into(), text, buttons))
            .await
    }

    pub async fn edit_message_text(
        &self,
        msg: &MessageRef,
        text: &str,
        buttons: Option<&InlineKeyboard>,
    ) -> Result<RawResponse> {
        self.call(commands::edit_message_text(msg, text, buttons))
            .await
    }

    pub async fn delete_message(&self, msg: &MessageRef) -> Result<RawResponse> {
        self.call(commands::delete_message(msg)).await
    }

    pub async fn send_media(
        &self,
        kind: MediaKind,
        chat: impl Into<ChatTarget>,
        media: &str,
        caption: &str,
    ) -> Result<RawResponse> {
        self.call(commands::send_media(kind, &chat.into(), media, caption))
            .await
    }

    pub async fn send_photo(
        &self,
        chat: impl Into<ChatTarget>,
        photo: &str,
        caption: &str,
    ) -> Result<RawResponse> {
        self.send_media(MediaKind::Photo, chat, photo, caption).await
    }

    pub async fn send_video(
        &self,
        chat: impl Into<ChatTarget>,
        video: &str,
        caption: &str,
    ) -> Result<RawResponse> {
        self.send_media(MediaKind::Video, chat, video, caption).await
    }

    pub async fn send_document(
        &self,
        chat: impl Into<ChatTarget>,
        document: &str,
        caption: &str,
    ) -> Result<RawResponse> {
        self.send_media(MediaKind::Document, chat, document, caption)
            .await
    }

    pub async fn send_audio(
        &self,
        chat: impl Into<ChatTarget>,
        audio: &str,
        caption: &str,
    ) -> Result<RawResponse> {
        self.send_media(MediaKind::Audio, chat, audio, caption).await
    }

    pub async fn send_chat_action(
        &self,
        chat: impl Into<ChatTarget>,
        action: impl Into<ChatAction>,
    ) -> Result<RawResponse> {
        self.call(commands::send_chat_action(&chat.into(), &action.into()))
            .await
    }

    pub async fn set_webhook(&self, url: &str) -> Result<RawResponse> {
        self.call(commands::set_webhook(url)).await
    }

    pub async fn delete_webhook(&self) -> Result<RawResponse> {
        self.call(commands::delete_webhook()).await
    }

    pub async fn get_webhook_info(&self) -> Result<WebhookInfo> {
        self.query(commands::get_webhook_info()).await
    }

    pub async fn get_me(&self) -> Result<User> {
        self.query(commands::get_me()).await
    }

    /// One `getUpdates` call. Polling cadence and offsets are the caller's business.
    ///
    /// With `query.timeout` set, the HTTP transport waits that many seconds beyond
    /// its configured timeout. Custom transports must do the same or long polls
    /// come back as `Error::Transport`.
    pub async fn get_updates(&self, query: &UpdatesQuery) -> Result<Vec<Update>> {
        self.query(commands::get_updates(query)).await
    }

    pub async fn get_file(&self, file_id: &str) -> Result<FileDescriptor> {
        self.query(commands::get_file(file_id)).await
    }

    /// Replace the photo, caption and buttons of `msg` (caption rendered as HTML).
    pub async fn edit_message_media(
        &self,
        msg: &MessageRef,
        media: &str,
        caption: &str,
        buttons: Option<&InlineKeyboard>,
    ) -> Result<RawResponse> {
        let edit = MediaEdit::photo(media).caption(caption);
        self.call(media_edit::edit_message_media(msg, &edit, buttons))
            .await
    }
}
