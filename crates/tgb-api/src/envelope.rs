//! Decoding of the `{ok, result, error_code, description}` wrapper.
//!
//! Pure parsing only. Raw file bytes never pass through here.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use tgb_core::{errors::Error, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub ok: bool,
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

/// Extra hints Telegram attaches to some failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> Envelope<T> {
    /// `Ok(result)` for `ok=true`, `RemoteRejected` for `ok=false`.
    ///
    /// `ok=true` without a `result` breaks the envelope contract and is a decode error.
    pub fn into_result(self) -> Result<T> {
        if !self.ok {
            return Err(Error::RemoteRejected {
                error_code: self.error_code,
                description: self.description,
            });
        }
        self.result
            .ok_or_else(|| Error::Decode("envelope has ok=true but no result".to_string()))
    }

    /// Same check as [`into_result`](Self::into_result) but keeps nothing.
    pub fn ensure_ok(&self) -> Result<()> {
        if self.ok {
            return Ok(());
        }
        Err(Error::RemoteRejected {
            error_code: self.error_code,
            description: self.description.clone(),
        })
    }
}

/// Parse a body into an envelope. Not JSON, or no `ok` field, is a `Decode` error.
pub fn decode(raw: &[u8]) -> Result<Envelope<Value>> {
    let env: Envelope<Value> = serde_json::from_slice(raw)
        .map_err(|e| Error::Decode(format!("invalid envelope: {e}")))?;
    Ok(normalize(env))
}

/// Parse a body and deserialize its `result` as `T`.
pub fn decode_result<T: DeserializeOwned>(raw: &[u8]) -> Result<T> {
    let value = decode(raw)?.into_result()?;
    serde_json::from_value(value).map_err(|e| {
        Error::Decode(format!(
            "result does not match {}: {e}",
            std::any::type_name::<T>()
        ))
    })
}

// `"result": null` reads as a missing result.
fn normalize(mut env: Envelope<Value>) -> Envelope<Value> {
    if matches!(env.result, Some(Value::Null)) {
        env.result = None;
    }
    env
}
