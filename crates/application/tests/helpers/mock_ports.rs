use async_trait::async_trait;
use blockwatch_application::ports::{BlockNotifier, BlockSource};
use blockwatch_domain::{Block, DomainError, Watermark};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub fn block(created: i64, email: &str) -> Block {
    Block::new(created, email, "bounce", "bounced")
}

pub struct MockBlockSource {
    blocks: Arc<RwLock<Vec<Block>>>,
    requested: Arc<RwLock<Vec<Watermark>>>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockBlockSource {
    pub fn new() -> Self {
        Self::with_blocks(vec![])
    }

    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks: Arc::new(RwLock::new(blocks)),
            requested: Arc::new(RwLock::new(Vec::new())),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn requested(&self) -> Vec<Watermark> {
        self.requested.read().await.clone()
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

pub struct MockBlockNotifier {
    sent: Arc<RwLock<Vec<Block>>>,
    attempts: Arc<AtomicU64>,
    failing_emails: Arc<RwLock<HashSet<String>>>,
}

impl MockBlockNotifier {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            attempts: Arc::new(AtomicU64::new(0)),
            failing_emails: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    pub async fn fail_for(&self, email: &str) {
        self.failing_emails.write().await.insert(email.to_string());
    }

    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    pub async fn sent(&self) -> Vec<Block> {
        self.sent.read().await.clone()
    }

    pub async fn sent_emails(&self) -> Vec<String> {
        self.sent
            .read()
            .await
            .iter()
            .map(|b| b.email.clone())
            .collect()
    }
}

#[async_trait]
impl BlockNotifier for MockBlockNotifier {
    async fn notify(&self, block: &Block) -> Result<(), DomainError> {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        if self.failing_emails.read().await.contains(&block.email) {
            return Err(DomainError::DeliveryFailed("HTTP 500".to_string()));
        }
        self.sent.write().await.push(block.clone());
        Ok(())
    }
}
