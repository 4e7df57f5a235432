//! Pure request builders, one per Bot API operation. No I/O.

use serde_json::{json, Map, Value};

use tgb_core::{
    domain::{ChatTarget, MessageRef},
    messaging::types::{ChatAction, InlineKeyboard, MediaKind},
};

/// How the request travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    /// JSON body.
    Post,
    /// Query string.
    Get,
}

/// A fully built call: method name, verb and parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: &'static str,
    pub verb: Verb,
    pub params: Map<String, Value>,
}

impl ApiRequest {
    pub fn post(method: &'static str, params: Value) -> Self {
        Self::build(method, Verb::Post, params)
    }

    pub fn get(method: &'static str, params: Value) -> Self {
        Self::build(method, Verb::Get, params)
    }

    fn build(method: &'static str, verb: Verb, params: Value) -> Self {
        let params = match params {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            method,
            verb,
            params,
        }
    }

    /// Nest `buttons` under `reply_markup.inline_keyboard` when given.
    fn with_keyboard(mut self, buttons: Option<&InlineKeyboard>) -> Self {
        if let Some(kb) = buttons {
            self.params.insert("reply_markup".to_string(), json!(kb));
        }
        self
    }
}

pub fn send_message(chat: &ChatTarget, text: &str, buttons: Option<&InlineKeyboard>) -> ApiRequest {
    ApiRequest::post("sendMessage", json!({"chat_id": chat, "text": text})).with_keyboard(buttons)
}

pub fn edit_message_text(
    msg: &MessageRef,
    text: &str,
    buttons: Option<&InlineKeyboard>,
) -> ApiRequest {
    ApiRequest::post(
        "editMessageText",
        json!({
            "chat_id": msg.chat,
            "message_id": msg.message_id,
            "text": text,
        }),
    )
    .with_keyboard(buttons)
}

pub fn delete_message(msg: &MessageRef) -> ApiRequest {
    ApiRequest::post(
        "deleteMessage",
        json!({"chat_id": msg.chat, "message_id": msg.message_id}),
    )
}

/// `sendPhoto`/`sendVideo`/`sendDocument`/`sendAudio` by URL or file id.
///
/// `caption` is always sent, empty when the caller has none.
pub fn send_media(kind: MediaKind, chat: &ChatTarget, media: &str, caption: &str) -> ApiRequest {
    let mut params = Map::new();
    params.insert("chat_id".to_string(), json!(chat));
    params.insert(kind.field().to_string(), Value::from(media));
    params.insert("caption".to_string(), Value::from(caption));
    ApiRequest::post(kind.method(), Value::Object(params))
}

pub fn send_chat_action(chat: &ChatTarget, action: &ChatAction) -> ApiRequest {
    ApiRequest::post(
        "sendChatAction",
        json!({"chat_id": chat, "action": action}),
    )
}

pub fn set_webhook(url: &str) -> ApiRequest {
    ApiRequest::post("setWebhook", json!({"url": url}))
}

pub fn delete_webhook() -> ApiRequest {
    ApiRequest::post("deleteWebhook", json!({}))
}

pub fn get_webhook_info() -> ApiRequest {
    ApiRequest::post("getWebhookInfo", json!({}))
}

pub fn get_me() -> ApiRequest {
    ApiRequest::post("getMe", json!({}))
}

/// Optional `getUpdates` knobs. The default sends no parameters at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdatesQuery {
    pub offset: Option<i64>,
    pub limit: Option<u32>,
    /// Long-poll seconds. `HttpTransport` adds this to its timeout for the call.
    pub timeout: Option<u32>,
}

pub fn get_updates(query: &UpdatesQuery) -> ApiRequest {
    let mut params = Map::new();
    if let Some(offset) = query.offset {
        params.insert("offset".to_string(), Value::from(offset));
    }
    if let Some(limit) = query.limit {
        params.insert("limit".to_string(), Value::from(limit));
    }
    if let Some(timeout) = query.timeout {
        params.insert("timeout".to_string(), Value::from(timeout));
    }
    ApiRequest::post("getUpdates", Value::Object(params))
}

/// The only builder that goes over GET.
pub fn get_file(file_id: &str) -> ApiRequest {
    ApiRequest::get("getFile", json!({"file_id": file_id}))
}
