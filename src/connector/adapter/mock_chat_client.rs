use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::DomainError;

/// One recorded `complete` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub system: String,
    pub user: String,
}

/// A scriptable [`ChatClient`] that records every call instead of going
/// over the network.
///
/// Returns either a canned answer or a canned failure, letting tests pin
/// down call counts and exact payloads without a live endpoint.
pub struct MockChatClient {
    reply: Result<String, String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockChatClient {
    /// A mock that answers every call with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A mock that fails every call with a completion error carrying `detail`.
    pub fn failing(detail: impl Into<String>) -> Self {
        Self {
            reply: Err(detail.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        debug!("MockChatClient: recording call ({} byte user prompt)", user.len());

        self.calls.lock().unwrap().push(RecordedCall {
            system: system.to_string(),
            user: user.to_string(),
        });

        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(detail) => Err(DomainError::completion(detail.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_payloads_in_order() {
        let mock = MockChatClient::replying("ok");

        mock.complete("sys", "first").await.unwrap();
        mock.complete("sys", "second").await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].user, "first");
        assert_eq!(calls[1].user, "second");
    }

    #[tokio::test]
    async fn failing_mock_returns_completion_error() {
        let mock = MockChatClient::failing("boom");

        let err = mock.complete("sys", "q").await.unwrap_err();
        assert!(err.is_completion_error());
        assert!(err.to_string().contains("boom"));
        assert_eq!(mock.call_count(), 1);
    }
}
