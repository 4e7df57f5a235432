use std::fmt;

use tgb_core::config::DEFAULT_API_BASE;

/// Token plus the two endpoint roots derived from it.
///
/// Immutable after construction. The token is not validated locally; a bad one
/// shows up as a rejected envelope on the first call.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    token: String,
    api_root: String,
    file_root: String,
}

impl Identity {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base(DEFAULT_API_BASE, token)
    }

    /// Use a different server root (self-hosted Bot API server, local test server).
    pub fn with_base(base: &str, token: impl Into<String>) -> Self {
        let token = token.into();
        let base = base.trim_end_matches('/');
        Self {
            api_root: format!("{base}/bot{token}/"),
            file_root: format!("{base}/file/bot{token}/"),
            token,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// `<base>/bot<token>/`
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// `<base>/file/bot<token>/`
    pub fn file_root(&self) -> &str {
        &self.file_root
    }

    pub fn method_url(&self, method: &str) -> String {
        format!("{}{method}", self.api_root)
    }

    /// Content URL for a `file_path` returned by `getFile`.
    pub fn file_url(&self, file_path: &str) -> String {
        format!("{}{}", self.file_root, file_path.trim_start_matches('/'))
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_both_roots_from_token() {
        let id = Identity::new("123:abc");
        assert_eq!(id.api_root(), "https://api.telegram.org/bot123:abc/");
        assert_eq!(id.file_root(), "https://api.telegram.org/file/bot123:abc/");
        assert_eq!(
            id.method_url("getMe"),
            "https://api.telegram.org/bot123:abc/getMe"
        );
    }

    #[test]
    fn file_url_joins_relative_path() {
        let id = Identity::with_base("http://127.0.0.1:8081/", "t");
        assert_eq!(
            id.file_url("photos/file_1.jpg"),
            "http://127.0.0.1:8081/file/bott/photos/file_1.jpg"
        );
        assert_eq!(
            id.file_url("/photos/file_1.jpg"),
            "http://127.0.0.1:8081/file/bott/photos/file_1.jpg"
        );
    }

    #[test]
    fn debug_hides_token() {
        let id = Identity::new("secret-token");
        assert!(!format!("{id:?}").contains("secret-token"));
    }
}
