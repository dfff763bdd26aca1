pub mod block_watch;

pub use block_watch::BlockWatchJob;
