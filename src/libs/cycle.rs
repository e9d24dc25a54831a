//! The cycle record: one pomodoro run from creation to its terminal event.

use crate::libs::formatter::FormattedCycle;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

/// Last issued id value, to keep ids strictly increasing even when two
/// cycles are created within the same millisecond.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis();
    let prev = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(millis.max(last + 1)))
        .unwrap_or(millis);
    millis.max(prev + 1).to_string()
}

/// A single timer run.
///
/// A cycle is append-only after creation: `task`, `minutes_amount` and
/// `start_date` never change, and exactly one of the terminal dates may be
/// set once, by the corresponding state transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cycle {
    /// Unique identifier assigned at creation, never reused.
    pub id: String,
    /// Free-text task label.
    pub task: String,
    /// Requested duration in minutes.
    pub minutes_amount: u32,
    /// Timestamp when the cycle became active.
    pub start_date: DateTime<Utc>,
    /// Set exactly once, when a running cycle is manually stopped early.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrupted_date: Option<DateTime<Utc>>,
    /// Set exactly once, when a running cycle reaches its full duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_date: Option<DateTime<Utc>>,
}

/// Derived lifecycle status of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStatus {
    Running,
    Finished,
    Interrupted,
}

impl std::fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycleStatus::Running => write!(f, "running"),
            CycleStatus::Finished => write!(f, "finished"),
            CycleStatus::Interrupted => write!(f, "interrupted"),
        }
    }
}

impl Cycle {
    /// Creates a new running cycle starting now.
    ///
    /// The id is the current epoch-millisecond timestamp rendered as a
    /// decimal string, nudged forward when two cycles land in the same
    /// millisecond so ids never repeat within a process.
    pub fn new(task: &str, minutes_amount: u32) -> Self {
        let now = Utc::now();
        Cycle {
            id: next_id(now),
            task: task.to_string(),
            minutes_amount,
            start_date: now,
            interrupted_date: None,
            finished_date: None,
        }
    }

    pub fn status(&self) -> CycleStatus {
        if self.finished_date.is_some() {
            CycleStatus::Finished
        } else if self.interrupted_date.is_some() {
            CycleStatus::Interrupted
        } else {
            CycleStatus::Running
        }
    }

    /// Requested duration in seconds.
    pub fn duration_seconds(&self) -> i64 {
        i64::from(self.minutes_amount) * 60
    }

    /// Wall-clock seconds elapsed since the cycle started.
    pub fn seconds_since_start(&self, now: DateTime<Utc>) -> i64 {
        (now - self.start_date).num_seconds().max(0)
    }
}

/// A trait for formatting a collection of `Cycle` instances.
pub trait CycleGroup {
    /// Formats cycles into `FormattedCycle` rows for table display.
    fn format(&self) -> Vec<FormattedCycle>;
}

impl CycleGroup for Vec<Cycle> {
    fn format(&self) -> Vec<FormattedCycle> {
        self.iter()
            .enumerate()
            .map(|(index, cycle)| FormattedCycle {
                id: (index + 1) as i32,
                task: cycle.task.clone(),
                duration: crate::libs::formatter::format_duration(&Duration::minutes(i64::from(cycle.minutes_amount))),
                start: cycle.start_date.format("%Y-%m-%d %H:%M").to_string(),
                status: cycle.status().to_string(),
            })
            .collect()
    }
}
