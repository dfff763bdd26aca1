use super::Adapters;
use blockwatch_application::use_cases::{FetchBlocksUseCase, ProcessBlocksUseCase};
use std::sync::Arc;

pub struct UseCases {
    pub fetch_blocks: Arc<FetchBlocksUseCase>,
    pub process_blocks: Arc<ProcessBlocksUseCase>,
}

impl UseCases {
    pub fn new(adapters: &Adapters) -> Self {
        Self {
            fetch_blocks: Arc::new(FetchBlocksUseCase::new(adapters.block_source.clone())),
            process_blocks: Arc::new(ProcessBlocksUseCase::new(adapters.notifier.clone())),
        }
    }
}
