pub mod errors;
pub mod logging;
pub mod polling;
pub mod root;
pub mod sendgrid;
pub mod webhook;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use polling::PollingConfig;
pub use root::{CliOverrides, Config};
pub use sendgrid::SendgridConfig;
pub use webhook::WebhookConfig;
