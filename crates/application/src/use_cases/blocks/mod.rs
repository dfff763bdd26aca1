pub mod fetch_blocks;
pub mod process_blocks;

pub use fetch_blocks::FetchBlocksUseCase;
pub use process_blocks::{ProcessBlocksUseCase, ProcessOutcome};
