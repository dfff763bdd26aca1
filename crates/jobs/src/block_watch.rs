use blockwatch_application::use_cases::{FetchBlocksUseCase, ProcessBlocksUseCase, ProcessOutcome};
use blockwatch_domain::Watermark;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;

const DEFAULT_INTERVAL_SECS: u64 = 5;

/// Background job that polls SendGrid blocks and forwards them to the webhook.
///
///   - The watermark lives in the loop and is threaded through every cycle
///   - First tick consumed immediately, so the first poll happens one
///     interval after startup
///   - Cycles never overlap: an overrunning cycle delays the next tick
pub struct BlockWatchJob {
    fetch: Arc<FetchBlocksUseCase>,
    process: Arc<ProcessBlocksUseCase>,
    interval_secs: u64,
}

impl BlockWatchJob {
    pub fn new(fetch: Arc<FetchBlocksUseCase>, process: Arc<ProcessBlocksUseCase>) -> Self {
        Self {
            fetch,
            process,
            interval_secs: DEFAULT_INTERVAL_SECS,
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    /// One fetch-process pass.
    pub async fn run_cycle(&self, watermark: &mut Watermark) -> ProcessOutcome {
        let blocks = self.fetch.execute(*watermark).await;
        if blocks.is_empty() {
            return ProcessOutcome::default();
        }

        let outcome = self.process.execute(&blocks, watermark).await;
        info!(
            blocks = blocks.len(),
            notified = outcome.notified,
            failed = outcome.failed,
            watermark = %watermark,
            "BlockWatchJob: cycle completed"
        );
        outcome
    }

    /// Polls forever on the current task.
    pub async fn run(self: Arc<Self>, mut watermark: Watermark) {
        info!(
            interval_secs = self.interval_secs,
            watermark = %watermark,
            "Starting block watch job"
        );

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval.tick().await;

        loop {
            interval.tick().await;
            self.run_cycle(&mut watermark).await;
        }
    }

    pub fn start(self: Arc<Self>, watermark: Watermark) -> JoinHandle<()> {
        tokio::spawn(self.run(watermark))
    }
}
