use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Mode;

/// Every engine state change produces an Event.
///
/// Commands return the event they caused; `tick` returns `SessionEnded`
/// when a countdown finishes. Front ends render these or forward them as
/// JSON lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        seconds_remaining: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        seconds_remaining: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: Mode,
        seconds_remaining: u32,
        at: DateTime<Utc>,
    },
    ModeChanged {
        mode: Mode,
        seconds_remaining: u32,
        at: DateTime<Utc>,
    },
    /// A countdown reached zero. Counters and `running` are already
    /// updated when this is emitted.
    SessionEnded {
        mode: Mode,
        focus_sessions_completed: u32,
        break_sessions_completed: u32,
        at: DateTime<Utc>,
    },
}

/// Full engine state at a point in time.
///
/// Handed to the tick observer on every decrement and printed by
/// `timer status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub mode: Mode,
    pub seconds_remaining: u32,
    pub running: bool,
    pub focus_sessions_completed: u32,
    pub break_sessions_completed: u32,
    pub active_task_id: Option<String>,
    pub at: DateTime<Utc>,
}
