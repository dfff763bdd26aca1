use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    #[error("HTTP call failed: {0}")]
    Transport(String),

    #[error("Unexpected HTTP status {0}: {1}")]
    UnexpectedStatus(u16, String),

    #[error("Failed parsing json: {0}")]
    InvalidResponse(String),

    #[error("Webhook delivery failed: {0}")]
    DeliveryFailed(String),
}
