use crate::ports::BlockNotifier;
use blockwatch_domain::{Block, Watermark};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub notified: u64,
    pub failed: u64,
}

/// Use case: notify every block of a batch and advance the watermark
///
/// Notifications are sent one at a time in batch order. A failed delivery
/// is logged and still counts toward the watermark, so it is not retried.
pub struct ProcessBlocksUseCase {
    notifier: Arc<dyn BlockNotifier>,
}

impl ProcessBlocksUseCase {
    pub fn new(notifier: Arc<dyn BlockNotifier>) -> Self {
        Self { notifier }
    }

    pub async fn execute(&self, blocks: &[Block], watermark: &mut Watermark) -> ProcessOutcome {
        let mut outcome = ProcessOutcome::default();

        for block in blocks {
            match self.notifier.notify(block).await {
                Ok(()) => outcome.notified += 1,
                Err(e) => {
                    outcome.failed += 1;
                    warn!(error = %e, email = %block.email, created = block.created, "Failed to notify block");
                }
            }

            if watermark.observe(block.created) {
                debug!(watermark = %watermark, "Watermark advanced");
            }
        }

        outcome
    }
}
