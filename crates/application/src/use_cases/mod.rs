pub mod blocks;

pub use blocks::{FetchBlocksUseCase, ProcessBlocksUseCase, ProcessOutcome};
