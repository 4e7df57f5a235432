use std::{borrow::Cow, sync::Arc, time::Duration};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use tgb_core::{errors::Error, Result};

use crate::{envelope, envelope::Envelope, identity::Identity};

/// Body of a JSON-returning call, kept as received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    body: Vec<u8>,
}

impl RawResponse {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self { body: body.into() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Parse the envelope without interpreting `ok`.
    pub fn envelope(&self) -> Result<Envelope<Value>> {
        envelope::decode(&self.body)
    }

    /// Parse the envelope and deserialize `result` as `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        envelope::decode_result(&self.body)
    }
}

/// Executes requests against the Bot API.
///
/// Implementations own endpoint construction. A failure here means no usable
/// response came back; an `ok=false` envelope is a successful transport call.
#[async_trait]
pub trait Transport: Send + Sync {
    fn identity(&self) -> &Identity;

    /// POST `params` as a JSON body to `<api_root>/<method>`.
    async fn post_json(&self, method: &str, params: &Map<String, Value>) -> Result<RawResponse>;

    /// GET `<api_root>/<method>?<params>` with percent-encoded keys and values.
    async fn get_json(&self, method: &str, params: &Map<String, Value>) -> Result<RawResponse>;

    /// GET an absolute URL and return the raw bytes (file content, never JSON).
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// reqwest-backed transport. One connection pool, one timeout for every call.
///
/// The exception is a long-poll `getUpdates`: its `timeout` seconds are added on
/// top, so the server can hold the request without tripping the client timeout.
#[derive(Clone)]
pub struct HttpTransport {
    identity: Arc<Identity>,
    http: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(identity: Identity, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport("http client build", e))?;
        Ok(Self {
            identity: Arc::new(identity),
            http,
            timeout,
        })
    }

    /// Per-call timeout: the configured one, stretched by the long-poll window.
    pub fn timeout_for(&self, method: &str, params: &Map<String, Value>) -> Duration {
        let long_poll = match (method, params.get("timeout").and_then(Value::as_u64)) {
            ("getUpdates", Some(secs)) => Duration::from_secs(secs),
            _ => Duration::ZERO,
        };
        self.timeout + long_poll
    }

    async fn read_body(method: &str, resp: reqwest::Response) -> Result<RawResponse> {
        // Telegram reports ok=false with 4xx/5xx statuses; the envelope decides, not the status.
        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| fail(method, e))?;
        if body.is_empty() {
            warn!(method, %status, "telegram returned an empty body");
            return Err(Error::transport(
                method,
                format!("empty response body (HTTP {status})"),
            ));
        }
        Ok(RawResponse::new(body.to_vec()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    async fn post_json(&self, method: &str, params: &Map<String, Value>) -> Result<RawResponse> {
        debug!(method, "POST bot api");
        let resp = self
            .http
            .post(self.identity.method_url(method))
            .timeout(self.timeout_for(method, params))
            .json(params)
            .send()
            .await
            .map_err(|e| fail(method, e))?;
        Self::read_body(method, resp).await
    }

    async fn get_json(&self, method: &str, params: &Map<String, Value>) -> Result<RawResponse> {
        debug!(method, "GET bot api");
        let resp = self
            .http
            .get(self.identity.method_url(method))
            .query(&query_pairs(params))
            .send()
            .await
            .map_err(|e| fail(method, e))?;
        Self::read_body(method, resp).await
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET file content");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| fail("file download", e))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "file download failed");
            return Err(Error::transport(
                "file download",
                format!("HTTP {status}"),
            ));
        }

        let bytes = resp.bytes().await.map_err(|e| fail("file download", e))?;
        Ok(bytes.to_vec())
    }
}

/// Flatten a parameter map into query pairs. Strings go as-is, anything else as JSON text.
pub fn query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(k, v)| {
            let v = match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (k.clone(), v)
        })
        .collect()
}

fn fail(context: &str, e: reqwest::Error) -> Error {
    // URLs embed the bot token.
    let e = e.without_url();
    warn!(context, error = %e, "telegram request failed");
    Error::transport(context, e)
}
