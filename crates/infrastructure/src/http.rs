use blockwatch_domain::DomainError;
use std::time::Duration;

const USER_AGENT: &str = concat!("Blockwatch/", env!("CARGO_PKG_VERSION"));

/// Longest response excerpt carried in an error message.
const MAX_ERROR_BODY_LEN: usize = 512;

/// Shared client for both the SendGrid and the webhook calls.
///
/// Without a timeout the client's own defaults apply, so a hanging peer
/// stalls the cycle.
pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, DomainError> {
    let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| DomainError::RequestBuild(e.to_string()))
}

pub(crate) fn map_send_error(e: reqwest::Error) -> DomainError {
    if e.is_builder() {
        DomainError::RequestBuild(e.to_string())
    } else {
        DomainError::Transport(e.to_string())
    }
}

pub(crate) fn body_excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    match text.char_indices().nth(MAX_ERROR_BODY_LEN) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.into_owned(),
    }
}
