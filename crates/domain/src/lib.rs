//! Blockwatch Domain Layer
pub mod block;
pub mod config;
pub mod errors;
pub mod notification;
pub mod watermark;

pub use block::Block;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use notification::WebhookMessage;
pub use watermark::Watermark;
