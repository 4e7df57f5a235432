use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a message goes: a numeric chat id or an `@channel` handle.
///
/// Passed through to Telegram unmodified.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatTarget {
    Id(i64),
    Handle(String),
}

impl From<i64> for ChatTarget {
    fn from(id: i64) -> Self {
        ChatTarget::Id(id)
    }
}

impl From<i32> for ChatTarget {
    fn from(id: i32) -> Self {
        ChatTarget::Id(i64::from(id))
    }
}

impl From<&str> for ChatTarget {
    fn from(handle: &str) -> Self {
        ChatTarget::Handle(handle.to_string())
    }
}

impl From<String> for ChatTarget {
    fn from(handle: String) -> Self {
        ChatTarget::Handle(handle)
    }
}

impl fmt::Display for ChatTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatTarget::Id(id) => write!(f, "{id}"),
            ChatTarget::Handle(h) => f.write_str(h),
        }
    }
}

/// Telegram message id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub i64);

/// A previously sent message, eligible for edit/delete.
///
/// Nothing is tracked locally; Telegram decides whether it still exists.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub chat: ChatTarget,
    pub message_id: MessageId,
}

impl MessageRef {
    pub fn new(chat: impl Into<ChatTarget>, message_id: i64) -> Self {
        Self {
            chat: chat.into(),
            message_id: MessageId(message_id),
        }
    }
}
