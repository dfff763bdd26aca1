use crate::block::Block;
use serde::{Deserialize, Serialize};

/// Body accepted by Slack-style incoming webhooks: `{"text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WebhookMessage {
    pub text: String,
}

impl WebhookMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&Block> for WebhookMessage {
    fn from(block: &Block) -> Self {
        Self::new(block.render_message())
    }
}
