//! Scripted in-memory transport for unit tests.

use std::{collections::VecDeque, sync::Mutex};

use async_trait::async_trait;
use serde_json::{Map, Value};

use tgb_core::{errors::Error, Result};

use crate::{identity::Identity, transport::RawResponse, transport::Transport};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Post {
        method: String,
        params: Map<String, Value>,
    },
    Get {
        method: String,
        params: Map<String, Value>,
    },
    Bytes {
        url: String,
    },
}

pub enum Reply {
    Json(&'static str),
    Bytes(Vec<u8>),
    Unreachable,
}

pub struct FakeTransport {
    identity: Identity,
    replies: Mutex<VecDeque<Reply>>,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeTransport {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            identity: Identity::with_base("https://tg.test", "42:TOKEN"),
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self) -> Result<Reply> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::transport("fake", "no scripted reply"))
    }

    fn json(&self, context: &str) -> Result<RawResponse> {
        match self.next()? {
            Reply::Json(body) => Ok(RawResponse::new(body.as_bytes().to_vec())),
            Reply::Bytes(b) => Ok(RawResponse::new(b)),
            Reply::Unreachable => Err(Error::transport(context, "connection refused")),
        }
    }
}

#[async_trait]
impl Transport for FakeTransport {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    async fn post_json(&self, method: &str, params: &Map<String, Value>) -> Result<RawResponse> {
        self.calls.lock().unwrap().push(Call::Post {
            method: method.to_string(),
            params: params.clone(),
        });
        self.json(method)
    }

    async fn get_json(&self, method: &str, params: &Map<String, Value>) -> Result<RawResponse> {
        self.calls.lock().unwrap().push(Call::Get {
            method: method.to_string(),
            params: params.clone(),
        });
        self.json(method)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(Call::Bytes {
            url: url.to_string(),
        });
        match self.next()? {
            Reply::Bytes(b) => Ok(b),
            Reply::Json(body) => Ok(body.as_bytes().to_vec()),
            Reply::Unreachable => Err(Error::transport("file download", "connection refused")),
        }
    }
}
