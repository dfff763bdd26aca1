use crate::ports::BlockSource;
use blockwatch_domain::{Block, Watermark};
use std::sync::Arc;
use tracing::{debug, error};

/// Use case: fetch suppression blocks newer than the watermark
///
/// Failures are logged and yield an empty batch; the next cycle simply
/// tries again.
pub struct FetchBlocksUseCase {
    source: Arc<dyn BlockSource>,
}

impl FetchBlocksUseCase {
    pub fn new(source: Arc<dyn BlockSource>) -> Self {
        Self { source }
    }

    pub async fn execute(&self, since: Watermark) -> Vec<Block> {
        match self.source.fetch_blocks(since).await {
            Ok(blocks) => {
                debug!(since = %since, count = blocks.len(), "Fetched suppression blocks");
                blocks
            }
            Err(e) => {
                error!(error = %e, since = %since, "Failed to fetch suppression blocks");
                Vec::new()
            }
        }
    }
}
