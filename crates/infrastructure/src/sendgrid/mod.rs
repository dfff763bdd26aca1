pub mod block_source;

pub use block_source::SendgridBlockSource;
