//! Unread-message endpoint REST client.
//!
//! One fixed, parameterless GET endpoint. No authentication, retry, or
//! pagination; a failed call is terminal for that poll.

use url::Url;

use crate::{UnreadError, UnreadStatus};

/// HTTP client for the unread-message count endpoint.
#[derive(Debug, Clone)]
pub struct UnreadApiClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl UnreadApiClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Parse `endpoint` and build a client for it.
    pub fn from_url_str(endpoint: &str) -> Result<Self, UnreadError> {
        Ok(Self::new(Url::parse(endpoint)?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the current unread status with a single GET request.
    pub async fn get_unread_status(&self) -> Result<UnreadStatus, UnreadError> {
        let resp = self.http.get(self.endpoint.clone()).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(UnreadError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let decoded: UnreadStatus = serde_json::from_str(&body)?;
        tracing::debug!(
            unread = decoded.unread_count,
            sender = decoded.sender.as_deref().unwrap_or(""),
            "Fetched unread status"
        );
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_client_from_valid_url() {
        let client =
            UnreadApiClient::from_url_str("http://127.0.0.1:8000/accounts/unread_message_count/")
                .unwrap();
        assert_eq!(client.endpoint().path(), "/accounts/unread_message_count/");
    }

    #[test]
    fn rejects_relative_url() {
        let err = UnreadApiClient::from_url_str("/accounts/unread_message_count/").unwrap_err();
        assert!(matches!(err, UnreadError::UrlParse(_)));
    }

    #[test]
    fn malformed_body_maps_to_json_error() {
        let err = serde_json::from_str::<UnreadStatus>("not json")
            .map_err(UnreadError::from)
            .unwrap_err();
        assert!(matches!(err, UnreadError::Json(_)));
    }
}
