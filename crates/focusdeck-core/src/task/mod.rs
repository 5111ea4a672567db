//! Task records, deadline handling, and the persisted collection.

mod filter;
mod store;

pub use filter::TaskFilter;
pub use store::{TaskStore, TASKS_KEY};

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of work that finished pomodoro sessions are credited to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task name
    pub name: String,
    /// Whether the task is completed
    pub completed: bool,
    /// Estimated number of pomodoros (one per focus session)
    #[serde(default = "default_estimate")]
    pub estimated_pomodoros: u32,
    /// Pomodoros credited so far
    #[serde(default)]
    pub completed_pomodoros: u32,
    /// Optional due date; absent means no deadline
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

fn default_estimate() -> u32 {
    1
}

impl Task {
    /// Create a new task with default values.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Task {
            id: format!("task-{}-{}", now.timestamp(), Uuid::new_v4()),
            name: name.into(),
            completed: false,
            estimated_pomodoros: 1,
            completed_pomodoros: 0,
            deadline: None,
            created_at: now,
        }
    }

    /// Credit one finished pomodoro, completing the task once the
    /// estimate is reached.
    pub fn credit_pomodoro(&mut self) {
        self.completed_pomodoros += 1;
        if self.completed_pomodoros >= self.estimated_pomodoros {
            self.completed = true;
        }
    }

    /// Deadline as a local calendar date.
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        self.deadline.map(|d| d.with_timezone(&Local).date_naive())
    }
}

/// Parse user-entered `YYYY-MM-DD` input into a deadline timestamp
/// (local midnight).
///
/// Unparseable input yields `None`; the operation carrying it still goes
/// through, just with no deadline set.
pub fn parse_deadline(input: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
