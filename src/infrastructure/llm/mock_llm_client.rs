use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{LlmClient, LlmClientError};

enum MockReply {
    Text(String),
    Failure(String),
}

/// Deterministic [`LlmClient`] for tests. Replies are chosen by the first
/// registered needle found in the prompt.
pub struct MockLlmClient {
    rules: Vec<(String, MockReply)>,
    fallback: String,
    calls: AtomicUsize,
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            fallback: "Mock answer".to_string(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_to(mut self, needle: impl Into<String>, reply: impl Into<String>) -> Self {
        self.rules
            .push((needle.into(), MockReply::Text(reply.into())));
        self
    }

    pub fn fail_on(mut self, needle: impl Into<String>, message: impl Into<String>) -> Self {
        self.rules
            .push((needle.into(), MockReply::Failure(message.into())));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.rules.iter().find(|(needle, _)| prompt.contains(needle.as_str())) {
            Some((_, MockReply::Text(reply))) => Ok(reply.clone()),
            Some((_, MockReply::Failure(message))) => {
                Err(LlmClientError::ApiRequestFailed(message.clone()))
            }
            None => Ok(self.fallback.clone()),
        }
    }
}
