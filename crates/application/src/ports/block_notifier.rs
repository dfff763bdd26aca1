use async_trait::async_trait;
use blockwatch_domain::{Block, DomainError};

#[async_trait]
pub trait BlockNotifier: Send + Sync {
    async fn notify(&self, block: &Block) -> Result<(), DomainError>;
}
