mod block_notifier;
mod block_source;

pub use block_notifier::BlockNotifier;
pub use block_source::BlockSource;
