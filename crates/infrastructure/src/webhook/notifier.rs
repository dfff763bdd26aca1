use crate::http::{body_excerpt, map_send_error};
use async_trait::async_trait;
use blockwatch_application::ports::BlockNotifier;
use blockwatch_domain::{Block, DomainError, WebhookMessage};
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

/// Posts one `{"text": ...}` message per block to a chat webhook.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl BlockNotifier for WebhookNotifier {
    async fn notify(&self, block: &Block) -> Result<(), DomainError> {
        let message = WebhookMessage::from(block);
        let body =
            serde_json::to_vec(&message).map_err(|e| DomainError::RequestBuild(e.to_string()))?;

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .bytes()
                .await
                .map(|b| body_excerpt(&b))
                .unwrap_or_default();
            let message = format!("HTTP {} {}", status.as_u16(), detail);
            return Err(DomainError::DeliveryFailed(message.trim_end().to_string()));
        }

        debug!(email = %block.email, status = status.as_u16(), "Webhook notification delivered");
        Ok(())
    }
}
