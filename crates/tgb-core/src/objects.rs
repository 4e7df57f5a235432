//! Typed `result` payloads returned by the Bot API.
//!
//! Only the fields this client reads are modelled; unknown fields are ignored,
//! but a present field of the wrong type fails deserialization.

use serde::{Deserialize, Serialize};

use crate::{domain::MessageId, Error, Result};

/// `getMe` result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// `getWebhookInfo` result. `url` is empty when no webhook is set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookInfo {
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_updates: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// One resolution of a photo. Telegram lists sizes smallest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
    #[serde(default)]
    pub file_unique_id: String,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: MessageId,
    pub chat: Chat,
    #[serde(default)]
    pub date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<PhotoSize>>,
}

impl Message {
    /// Highest quality photo: the last size in the list.
    ///
    /// Relies on Telegram returning sizes in ascending order; widths are not compared.
    pub fn largest_photo(&self) -> Result<&PhotoSize> {
        self.photo
            .as_ref()
            .and_then(|sizes| sizes.last())
            .ok_or(Error::NoPhotoFound)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// One entry of `getUpdates` (or a webhook payload).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,
}

/// `getFile` result. `file_path` is required before the bytes can be fetched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_unique_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// File id of the best photo in the first update that carries one.
pub fn highest_quality_photo_file_id(updates: &[Update]) -> Result<&str> {
    updates
        .iter()
        .filter_map(|u| u.message.as_ref())
        .find(|m| m.photo.is_some())
        .ok_or(Error::NoPhotoFound)
        .and_then(Message::largest_photo)
        .map(|p| p.file_id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn photo_update(id: i64, sizes: serde_json::Value) -> Update {
        serde_json::from_value(json!({
            "update_id": id,
            "message": {
                "message_id": 10,
                "date": 1700000000,
                "chat": {"id": 5, "type": "private"},
                "photo": sizes
            }
        }))
        .unwrap()
    }

    #[test]
    fn picks_last_photo_size() {
        let u = photo_update(
            1,
            json!([
                {"file_id": "a", "file_unique_id": "ua", "width": 90, "height": 90},
                {"file_id": "b", "file_unique_id": "ub", "width": 800, "height": 600}
            ]),
        );
        assert_eq!(highest_quality_photo_file_id(&[u]).unwrap(), "b");
    }

    #[test]
    fn skips_updates_without_photo() {
        let text: Update = serde_json::from_value(json!({
            "update_id": 1,
            "message": {"message_id": 1, "chat": {"id": 5, "type": "private"}, "text": "hi"}
        }))
        .unwrap();
        let photo = photo_update(2, json!([{"file_id": "p", "width": 1, "height": 1}]));
        assert_eq!(highest_quality_photo_file_id(&[text, photo]).unwrap(), "p");
    }

    #[test]
    fn no_photo_is_an_error() {
        let u: Update = serde_json::from_value(json!({"update_id": 3})).unwrap();
        assert!(matches!(
            highest_quality_photo_file_id(&[u]),
            Err(Error::NoPhotoFound)
        ));
        assert!(matches!(
            highest_quality_photo_file_id(&[]),
            Err(Error::NoPhotoFound)
        ));
    }

    #[test]
    fn empty_photo_list_is_no_photo() {
        let u = photo_update(4, json!([]));
        let msg = u.message.as_ref().unwrap();
        assert!(matches!(msg.largest_photo(), Err(Error::NoPhotoFound)));
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let bad = serde_json::from_value::<FileDescriptor>(json!({"file_id": 12}));
        assert!(bad.is_err());
    }
}
