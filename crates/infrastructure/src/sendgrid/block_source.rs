use crate::http::{body_excerpt, map_send_error};
use async_trait::async_trait;
use blockwatch_application::ports::BlockSource;
use blockwatch_domain::{Block, DomainError, Watermark};
use tracing::debug;

const BLOCKS_PATH: &str = "/v3/suppression/blocks";

/// Reads the SendGrid suppression block list
///
/// `GET {api_url}/v3/suppression/blocks?start_time=<watermark>` with a
/// bearer token. SendGrid treats `start_time` as inclusive.
pub struct SendgridBlockSource {
    client: reqwest::Client,
    blocks_url: String,
    api_token: String,
}

impl SendgridBlockSource {
    pub fn new(client: reqwest::Client, api_url: &str, api_token: impl Into<String>) -> Self {
        Self {
            client,
            blocks_url: format!("{}{}", api_url.trim_end_matches('/'), BLOCKS_PATH),
            api_token: api_token.into(),
        }
    }

    pub fn blocks_url(&self) -> &str {
        &self.blocks_url
    }
}

#[async_trait]
impl BlockSource for SendgridBlockSource {
    async fn fetch_blocks(&self, since: Watermark) -> Result<Vec<Block>, DomainError> {
        debug!(url = %self.blocks_url, start_time = %since, "Querying SendGrid blocks");

        let response = self
            .client
            .get(&self.blocks_url)
            .query(&[("start_time", since.as_secs())])
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        // Consumes the response, releasing the connection whatever happens next.
        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::Transport(format!("read error: {}", e)))?;

        if !status.is_success() {
            return Err(DomainError::UnexpectedStatus(
                status.as_u16(),
                body_excerpt(&body),
            ));
        }

        serde_json::from_slice(&body).map_err(|e| {
            DomainError::InvalidResponse(format!("{} (body: {})", e, body_excerpt(&body)))
        })
    }
}
