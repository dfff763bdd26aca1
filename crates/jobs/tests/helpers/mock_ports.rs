use async_trait::async_trait;
use blockwatch_application::ports::{BlockNotifier, BlockSource};
use blockwatch_domain::{Block, DomainError, Watermark};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub fn block(created: i64, email: &str) -> Block {
    Block::new(created, email, "bounce", "bounced")
}

/// Records every requested watermark; serves a swappable batch.
pub struct MockBlockSource {
    blocks: RwLock<Vec<Block>>,
    requested: RwLock<Vec<Watermark>>,
    call_count: AtomicU64,
    should_fail: RwLock<bool>,
}

impl MockBlockSource {
    pub fn new() -> Self {
        Self::with_blocks(vec![])
    }

    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks: RwLock::new(blocks),
            requested: RwLock::new(Vec::new()),
            call_count: AtomicU64::new(0),
            should_fail: RwLock::new(false),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn requested(&self) -> Vec<Watermark> {
        self.requested.read().await.clone()
    }

    pub async fn set_blocks(&self, blocks: Vec<Block>) {
        *self.blocks.write().await = blocks;
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl BlockSource for MockBlockSource {
    async fn fetch_blocks(&self, since: Watermark) -> Result<Vec<Block>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.requested.write().await.push(since);
        if *self.should_fail.read().await {
            return Err(DomainError::Transport("connection refused".to_string()));
        }
        Ok(self.blocks.read().await.clone())
    }
}

/// Webhook stand-in with an optional per-send delay and a failing address.
pub struct MockBlockNotifier {
    sent: RwLock<Vec<String>>,
    attempts: AtomicU64,
    failing_email: RwLock<Option<String>>,
    delay: Option<Duration>,
}

impl MockBlockNotifier {
    pub fn new() -> Self {
        Self {
            sent: RwLock::new(Vec::new()),
            attempts: AtomicU64::new(0),
            failing_email: RwLock::new(None),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn fail_for(&self, email: &str) {
        *self.failing_email.write().await = Some(email.to_string());
    }

    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    pub async fn sent_emails(&self) -> Vec<String> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl BlockNotifier for MockBlockNotifier {
    async fn notify(&self, block: &Block) -> Result<(), DomainError> {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing_email.read().await.as_deref() == Some(block.email.as_str()) {
            return Err(DomainError::DeliveryFailed("HTTP 500".to_string()));
        }
        self.sent.write().await.push(block.email.clone());
        Ok(())
    }
}
