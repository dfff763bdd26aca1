use std::fmt;

/// Exclusive lower bound for the next suppression fetch, in Unix seconds.
///
/// Only ever moves forward. SendGrid treats `start_time` as inclusive, so
/// observing a block created at `t` moves the watermark to `t + 1`;
/// otherwise the newest block would be fetched again on every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Watermark(i64);

impl Watermark {
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp())
    }

    /// Starting watermark: the configured timestamp, or the current time.
    ///
    /// A negative timestamp (conventionally `-1`) counts as unset.
    pub fn starting_at(last_timestamp: Option<i64>) -> Self {
        match last_timestamp {
            Some(ts) if ts >= 0 => Self::new(ts),
            _ => Self::now(),
        }
    }

    pub fn as_secs(&self) -> i64 {
        self.0
    }

    /// Moves past `created` if it is newer than the current watermark.
    /// Returns whether the watermark moved.
    pub fn observe(&mut self, created: i64) -> bool {
        if created > self.0 {
            self.0 = created.saturating_add(1);
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Watermark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
