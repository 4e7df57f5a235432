//! `editMessageMedia`: swap a message's photo, caption and buttons in one call.
//!
//! Unlike every other builder, this endpoint gets `media` and `reply_markup`
//! as pre-serialized JSON strings, not nested objects. Keep it that way; the
//! outer body is serialized again on top of these strings.

use serde::Serialize;
use serde_json::{json, Value};

use tgb_core::{
    domain::MessageRef,
    messaging::types::{InlineKeyboard, ParseMode},
};

use crate::commands::ApiRequest;

/// The `InputMediaPhoto` descriptor sent under `media`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MediaEdit {
    #[serde(rename = "type")]
    kind: &'static str,
    pub media: String,
    pub caption: String,
    pub parse_mode: ParseMode,
}

impl MediaEdit {
    /// Photo by public URL or file id, empty caption, HTML parse mode.
    pub fn photo(media: impl Into<String>) -> Self {
        Self {
            kind: "photo",
            media: media.into(),
            caption: String::new(),
            parse_mode: ParseMode::Html,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// JSON text of the descriptor.
    pub fn to_json_string(&self) -> String {
        json!(self).to_string()
    }
}

pub fn edit_message_media(
    msg: &MessageRef,
    edit: &MediaEdit,
    buttons: Option<&InlineKeyboard>,
) -> ApiRequest {
    let mut req = ApiRequest::post(
        "editMessageMedia",
        json!({
            "chat_id": msg.chat,
            "message_id": msg.message_id,
            "media": edit.to_json_string(),
        }),
    );
    if let Some(kb) = buttons {
        req.params
            .insert("reply_markup".to_string(), Value::String(json!(kb).to_string()));
    }
    req
}
