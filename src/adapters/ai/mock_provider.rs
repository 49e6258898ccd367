//! Mock AiProvider for tests and offline development.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{AiError, AiProvider, CompletionRequest};

/// Scripted provider: pops queued replies, then repeats the default reply.
pub struct MockAiProvider {
    replies: Mutex<Vec<String>>,
    default_reply: String,
    fail: bool,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(Vec::new()),
            default_reply: "Understood. What else should we consider?".to_string(),
            fail: false,
        }
    }

    /// Queues a reply to return before falling back to the default.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push(reply.into());
        self
    }

    pub fn with_default_reply(mut self, reply: impl Into<String>) -> Self {
        self.default_reply = reply.into();
        self
    }

    /// Makes every completion fail, for exercising fallback paths.
    pub fn failing() -> Self {
        Self {
            replies: Mutex::new(Vec::new()),
            default_reply: String::new(),
            fail: true,
        }
    }
}

impl Default for MockAiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, AiError> {
        if self.fail {
            return Err(AiError::unavailable("mock provider configured to fail"));
        }
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            Ok(self.default_reply.clone())
        } else {
            Ok(replies.remove(0))
        }
    }
}
