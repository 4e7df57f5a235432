use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{errors::Error, Result};

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_DOWNLOAD_DIR: &str = "/tmp/tgb-downloads";

/// Process configuration for a binary driving the client.
///
/// The client itself only needs the token, base and timeout; everything else
/// is for the operator tool.
#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    pub api_base: String,
    pub request_timeout: Duration,
    pub download_dir: PathBuf,
}

impl Config {
    /// Load from the environment, merging `./.env` first when present.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = lookup("TELEGRAM_BOT_TOKEN")
            .and_then(non_empty)
            .ok_or_else(|| {
                Error::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
            })?;

        let api_base = lookup("TELEGRAM_API_BASE")
            .and_then(non_empty)
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout_ms = match lookup("TELEGRAM_REQUEST_TIMEOUT_MS").and_then(non_empty) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                Error::Config(format!(
                    "TELEGRAM_REQUEST_TIMEOUT_MS must be a number of milliseconds, got {raw:?}"
                ))
            })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        let download_dir = lookup("TELEGRAM_DOWNLOAD_DIR")
            .and_then(non_empty)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOWNLOAD_DIR));

        Ok(Self {
            bot_token: bot_token.trim().to_string(),
            api_base,
            request_timeout: Duration::from_millis(timeout_ms),
            download_dir,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
