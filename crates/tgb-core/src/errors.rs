/// Error taxonomy shared by every crate in the workspace.
///
/// Callers must be able to tell "could not reach the platform" (`Transport`),
/// "the platform answered but broke the protocol" (`Decode`) and "the platform
/// said no" (`RemoteRejected`) apart, so these are never folded together.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("transport error ({context}): {message}")]
    Transport { context: String, message: String },

    #[error("decode error: {0}")]
    Decode(String),

    #[error("telegram rejected the call ({}): {}", fmt_code(.error_code), .description.as_deref().unwrap_or("no description"))]
    RemoteRejected {
        error_code: Option<i64>,
        description: Option<String>,
    },

    #[error("could not resolve file {file_id}: {}", .description.as_deref().unwrap_or("no file_path returned"))]
    Resolution {
        file_id: String,
        description: Option<String>,
    },

    #[error("update carries no photo")]
    NoPhotoFound,
}

impl Error {
    pub fn transport(context: impl Into<String>, message: impl ToString) -> Self {
        Error::Transport {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// The request never produced a usable response (connect, timeout, empty body).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    /// A well-formed envelope came back with `ok=false`.
    pub fn is_remote_rejected(&self) -> bool {
        matches!(self, Error::RemoteRejected { .. })
    }
}

fn fmt_code(code: &Option<i64>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "no code".to_string())
}

pub type Result<T> = std::result::Result<T, Error>;
