//! Time and table-row formatting helpers for console display.
//!
//! Two formats cover the whole application: `HH:MM` for cycle durations in
//! history tables and `MM:SS` for the live countdown. Negative durations
//! clamp to zero so clock skew never renders a minus sign.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A cycle pre-formatted for table display.
///
/// Values are rendered to strings up front so table code and exports never
/// re-derive them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedCycle {
    /// Sequential row number, starting from 1.
    pub id: i32,
    /// Task label.
    pub task: String,
    /// Requested duration, "HH:MM".
    pub duration: String,
    /// Start timestamp, "YYYY-MM-DD HH:MM".
    pub start: String,
    /// Lifecycle status: running, finished or interrupted.
    pub status: String,
}

/// Formats a duration as zero-padded "HH:MM".
///
/// Seconds are dropped; negative durations render as "00:00".
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats remaining seconds as a zero-padded "MM:SS" countdown.
///
/// Minutes may exceed two digits for long cycles; negative values clamp
/// to "00:00".
pub fn format_countdown(remaining_seconds: i64) -> String {
    let remaining = remaining_seconds.max(0);
    format!("{:02}:{:02}", remaining / 60, remaining % 60)
}
