use chrono::{DateTime, Local, TimeZone};
use serde::Deserialize;
use std::fmt::Display;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// A SendGrid suppression block.
///
/// Mirrors one element of the `GET /v3/suppression/blocks` response body.
/// `created` is a Unix timestamp in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Block {
    pub created: i64,
    pub email: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: String,
}

impl Block {
    pub fn new(
        created: i64,
        email: impl Into<String>,
        reason: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            created,
            email: email.into(),
            reason: reason.into(),
            status: status.into(),
        }
    }

    /// Creation time in the given timezone, `None` if `created` is out of range.
    pub fn created_at<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        tz.timestamp_opt(self.created, 0).single()
    }

    /// Chat message for this block, with the date in the local timezone.
    pub fn render_message(&self) -> String {
        self.render_message_in(&Local)
    }

    pub fn render_message_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let date = match self.created_at(tz) {
            Some(dt) => dt.format(DATE_FORMAT).to_string(),
            None => self.created.to_string(),
        };

        format!(
            "Failed to send mail:\nCreated at: {}\nEmail: {}\nReason: {}\nStatus: {}\n",
            date, self.email, self.reason, self.status
        )
    }
}
