use async_trait::async_trait;
use blockwatch_domain::{Block, DomainError, Watermark};

#[async_trait]
pub trait BlockSource: Send + Sync {
    /// Blocks created at or after `since`, in the order the provider returns them.
    async fn fetch_blocks(&self, since: Watermark) -> Result<Vec<Block>, DomainError>;
}
