//! Thread identifiers and sidebar summaries.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Number of identifier characters shown in a sidebar label.
const SHORT_ID_LEN: usize = 8;

/// Opaque, server-issued thread identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(String);

impl ThreadId {
    /// Wraps a server-issued identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The identifier as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first eight characters of the identifier.
    #[must_use]
    pub fn short(&self) -> String {
        self.0.chars().take(SHORT_ID_LEN).collect()
    }
}

impl Display for ThreadId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThreadId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ThreadId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One entry of `GET /threads/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadSummary {
    /// Thread the entry refers to.
    pub thread_id: ThreadId,
    /// Last update as sent by the server, usually ISO 8601.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ThreadSummary {
    /// Builds a summary, mostly for fixtures.
    pub fn new(thread_id: impl Into<ThreadId>, updated_at: Option<&str>) -> Self {
        Self {
            thread_id: thread_id.into(),
            updated_at: updated_at.map(str::to_owned),
        }
    }

    /// Sidebar label: `#` plus the short id, followed by the last update time.
    #[must_use]
    pub fn display_label(&self) -> String {
        let updated = self
            .updated_at
            .as_deref()
            .map(format_local_datetime)
            .unwrap_or_default();
        format!("#{} · {}", self.thread_id.short(), updated)
    }
}

/// Renders a server timestamp in the viewer's local time zone.
///
/// Offset-qualified values are converted to local time; naive values are
/// already local and are only reformatted. Anything unparseable is shown
/// verbatim.
#[must_use]
pub fn format_local_datetime(raw: &str) -> String {
    const FORMAT: &str = "%Y-%m-%d %H:%M";

    if raw.trim().is_empty() {
        return String::new();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Local).format(FORMAT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(FORMAT).to_string();
    }
    raw.to_string()
}

/// Body of `GET /threads/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadListResponse {
    /// Threads in server order.
    #[serde(default)]
    pub threads: Vec<ThreadSummary>,
}
