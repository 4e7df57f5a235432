use serde::{Deserialize, Serialize, Serializer};

/// What pressing an inline button does.
///
/// Serialized flat into the button object, e.g. `{"text":"Next","callback_data":"p:2"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    CallbackData(String),
    Url(String),
    SwitchInlineQuery(String),
    SwitchInlineQueryCurrentChat(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    pub text: String,
    #[serde(flatten)]
    pub action: ButtonAction,
}

impl InlineButton {
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::CallbackData(data.into()),
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::Url(url.into()),
        }
    }
}

/// Rows of inline buttons attached to a message.
///
/// Row order and order within a row are kept exactly as given; Telegram renders by position.
/// Serializes as the `reply_markup` object: `{"inline_keyboard": [[...], ...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboard {
    pub inline_keyboard: Vec<Vec<InlineButton>>,
}

impl InlineKeyboard {
    pub fn new(rows: Vec<Vec<InlineButton>>) -> Self {
        Self {
            inline_keyboard: rows,
        }
    }

    /// Append a row (builder style).
    pub fn row(mut self, buttons: Vec<InlineButton>) -> Self {
        self.inline_keyboard.push(buttons);
        self
    }
}

/// Activity shown in the chat header ("typing...", "sending photo...").
///
/// Tokens are not validated locally; `Custom` passes anything through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordVoice,
    UploadVoice,
    UploadDocument,
    ChooseSticker,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
    Custom(String),
}

impl ChatAction {
    pub fn as_str(&self) -> &str {
        match self {
            ChatAction::Typing => "typing",
            ChatAction::UploadPhoto => "upload_photo",
            ChatAction::RecordVideo => "record_video",
            ChatAction::UploadVideo => "upload_video",
            ChatAction::RecordVoice => "record_voice",
            ChatAction::UploadVoice => "upload_voice",
            ChatAction::UploadDocument => "upload_document",
            ChatAction::ChooseSticker => "choose_sticker",
            ChatAction::FindLocation => "find_location",
            ChatAction::RecordVideoNote => "record_video_note",
            ChatAction::UploadVideoNote => "upload_video_note",
            ChatAction::Custom(s) => s,
        }
    }
}

impl From<&str> for ChatAction {
    fn from(token: &str) -> Self {
        match token {
            "typing" => ChatAction::Typing,
            "upload_photo" => ChatAction::UploadPhoto,
            "record_video" => ChatAction::RecordVideo,
            "upload_video" => ChatAction::UploadVideo,
            "record_voice" => ChatAction::RecordVoice,
            "upload_voice" => ChatAction::UploadVoice,
            "upload_document" => ChatAction::UploadDocument,
            "choose_sticker" => ChatAction::ChooseSticker,
            "find_location" => ChatAction::FindLocation,
            "record_video_note" => ChatAction::RecordVideoNote,
            "upload_video_note" => ChatAction::UploadVideoNote,
            other => ChatAction::Custom(other.to_string()),
        }
    }
}

impl Serialize for ChatAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Caption/text formatting mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    #[default]
    #[serde(rename = "HTML")]
    Html,
    MarkdownV2,
    Markdown,
}

/// Media kinds sendable by URL or file id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
    Document,
    Audio,
}

impl MediaKind {
    /// Bot API method that sends this kind.
    pub fn method(self) -> &'static str {
        match self {
            MediaKind::Photo => "sendPhoto",
            MediaKind::Video => "sendVideo",
            MediaKind::Document => "sendDocument",
            MediaKind::Audio => "sendAudio",
        }
    }

    /// Parameter that carries the URL or file id.
    pub fn field(self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
            MediaKind::Document => "document",
            MediaKind::Audio => "audio",
        }
    }
}
