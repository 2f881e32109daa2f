//! Unread-message endpoint client library.
//!
//! Provides the decoded status type and a typed REST client for the
//! unread-message count endpoint.

pub mod api;

use serde::{Deserialize, Serialize};

/// Label substituted when the endpoint reports no usable sender.
pub const FALLBACK_SENDER: &str = "Anonymous sender";

/// One poll result from the unread-message endpoint.
///
/// Exists only for the duration of a single poll; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadStatus {
    pub unread_count: u64,
    #[serde(default)]
    pub sender: Option<String>,
}

impl UnreadStatus {
    /// Sender name, with [`FALLBACK_SENDER`] substituted for a missing or
    /// empty value.
    pub fn resolved_sender(&self) -> &str {
        match self.sender.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => FALLBACK_SENDER,
        }
    }
}

/// Unified error type for the unread-client crate.
#[derive(Debug, thiserror::Error)]
pub enum UnreadError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("endpoint error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_count_and_sender() {
        let status: UnreadStatus =
            serde_json::from_str(r#"{"unread_count": 3, "sender": "Alice"}"#).unwrap();
        assert_eq!(status.unread_count, 3);
        assert_eq!(status.sender.as_deref(), Some("Alice"));
    }

    #[test]
    fn decodes_null_sender() {
        let status: UnreadStatus =
            serde_json::from_str(r#"{"unread_count": 0, "sender": null}"#).unwrap();
        assert_eq!(status.unread_count, 0);
        assert_eq!(status.sender, None);
    }

    #[test]
    fn decodes_missing_sender() {
        let status: UnreadStatus = serde_json::from_str(r#"{"unread_count": 1}"#).unwrap();
        assert_eq!(status.unread_count, 1);
        assert_eq!(status.sender, None);
    }

    #[test]
    fn resolved_sender_prefers_reported_name() {
        let status = UnreadStatus {
            unread_count: 3,
            sender: Some("Alice".into()),
        };
        assert_eq!(status.resolved_sender(), "Alice");
    }

    #[test]
    fn resolved_sender_falls_back_for_empty_name() {
        let status = UnreadStatus {
            unread_count: 1,
            sender: Some(String::new()),
        };
        assert_eq!(status.resolved_sender(), FALLBACK_SENDER);
    }

    #[test]
    fn resolved_sender_falls_back_for_missing_name() {
        let status = UnreadStatus {
            unread_count: 1,
            sender: None,
        };
        assert_eq!(status.resolved_sender(), FALLBACK_SENDER);
    }
}
