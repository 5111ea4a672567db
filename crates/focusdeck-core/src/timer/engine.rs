//! Timer engine implementation.
//!
//! The engine is a fixed-step countdown state machine. It owns no clock and
//! no thread - the driver schedules a once-per-second tick and calls
//! `tick()` with the generation it captured at start. Scheduling drift
//! under load is tolerated and never corrected.
//!
//! ## State Transitions
//!
//! ```text
//! Paused -> Running   on start
//! Running -> Paused   on pause / reset / set_mode / session end
//! ```
//!
//! Mode changes always land paused at the new mode's full duration.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::default();
//! engine.start();
//! let generation = engine.generation();
//! // Once per second:
//! engine.tick(generation); // Returns Some(Event::SessionEnded) at zero
//! ```

use chrono::Utc;

use super::mode::{Mode, ModeDurations};
use crate::events::{Event, TimerSnapshot};

/// Observer invoked with a state snapshot on every successful decrement.
pub type TickObserver = Box<dyn FnMut(TimerSnapshot) + Send>;

/// Core timer engine.
///
/// A tick carrying a stale generation is a no-op, so a cancelled schedule
/// may safely deliver one last tick.
pub struct TimerEngine {
    durations: ModeDurations,
    /// Focus sessions between long breaks.
    sessions_before_long_break: u32,
    mode: Mode,
    seconds_remaining: u32,
    running: bool,
    focus_sessions_completed: u32,
    break_sessions_completed: u32,
    /// Weak reference: the task may be deleted mid-session.
    active_task_id: Option<String>,
    /// Bumped whenever an outstanding tick schedule becomes invalid.
    generation: u64,
    on_tick: Option<TickObserver>,
}

impl TimerEngine {
    /// Create an engine paused in Focus mode at full duration.
    pub fn new(durations: ModeDurations, sessions_before_long_break: u32) -> Self {
        Self {
            durations,
            sessions_before_long_break: sessions_before_long_break.max(1),
            mode: Mode::Focus,
            seconds_remaining: durations.for_mode(Mode::Focus),
            running: false,
            focus_sessions_completed: 0,
            break_sessions_completed: 0,
            active_task_id: None,
            generation: 0,
            on_tick: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn focus_sessions_completed(&self) -> u32 {
        self.focus_sessions_completed
    }

    pub fn break_sessions_completed(&self) -> u32 {
        self.break_sessions_completed
    }

    pub fn active_task_id(&self) -> Option<&str> {
        self.active_task_id.as_deref()
    }

    /// Generation to hand to a newly scheduled tick source.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Build a full state snapshot.
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            seconds_remaining: self.seconds_remaining,
            running: self.running,
            focus_sessions_completed: self.focus_sessions_completed,
            break_sessions_completed: self.break_sessions_completed,
            active_task_id: self.active_task_id.clone(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin counting down. No-op while already running.
    ///
    /// Starting with zero seconds remaining is permitted; the first tick
    /// then ends the session immediately.
    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(Event::TimerStarted {
            mode: self.mode,
            seconds_remaining: self.seconds_remaining,
            at: Utc::now(),
        })
    }

    /// Stop counting down. Idempotent.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        self.generation += 1;
        Some(Event::TimerPaused {
            seconds_remaining: self.seconds_remaining,
            at: Utc::now(),
        })
    }

    /// Pause and restore the current mode's full duration.
    pub fn reset(&mut self) -> Option<Event> {
        self.pause();
        self.seconds_remaining = self.durations.for_mode(self.mode);
        Some(Event::TimerReset {
            mode: self.mode,
            seconds_remaining: self.seconds_remaining,
            at: Utc::now(),
        })
    }

    /// Pause, switch mode, restore that mode's full duration. Never
    /// auto-starts.
    pub fn set_mode(&mut self, mode: Mode) -> Option<Event> {
        self.pause();
        self.mode = mode;
        self.seconds_remaining = self.durations.for_mode(mode);
        Some(Event::ModeChanged {
            mode,
            seconds_remaining: self.seconds_remaining,
            at: Utc::now(),
        })
    }

    /// Advance to the next mode after a finished session.
    ///
    /// From Focus the next mode is LongBreak when the completed
    /// focus-session count is a positive multiple of the long-break
    /// cadence, otherwise ShortBreak; from either break the next mode is
    /// Focus. Starts the new countdown only when `auto_start` is set.
    pub fn advance_after_session(&mut self, auto_start: bool) -> Option<Event> {
        let next = match self.mode {
            Mode::Focus => {
                if self.focus_sessions_completed > 0
                    && self.focus_sessions_completed % self.sessions_before_long_break == 0
                {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                }
            }
            Mode::ShortBreak | Mode::LongBreak => Mode::Focus,
        };
        let changed = self.set_mode(next);
        self.reset();
        if auto_start {
            self.start()
        } else {
            changed
        }
    }

    /// Register the per-tick observer. The latest registration wins.
    pub fn set_on_tick(&mut self, observer: TickObserver) {
        self.on_tick = Some(observer);
    }

    pub fn set_active_task(&mut self, id: impl Into<String>) {
        self.active_task_id = Some(id.into());
    }

    pub fn clear_active_task(&mut self) {
        self.active_task_id = None;
    }

    /// Deliver one scheduled tick.
    ///
    /// `generation` must match the value captured when the schedule was
    /// set up; a stale tick is a no-op, as is a tick while paused.
    /// Decrements by exactly 1 and notifies the tick observer. Returns
    /// `Some(Event::SessionEnded)` when the countdown ends, with counters,
    /// `running`, and the generation already updated.
    pub fn tick(&mut self, generation: u64) -> Option<Event> {
        if !self.running || generation != self.generation {
            return None;
        }
        let decremented = if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
            true
        } else {
            false
        };
        if self.seconds_remaining > 0 {
            self.notify_tick();
            return None;
        }

        // Countdown finished: stop and count the session before notifying,
        // so observers see the final state.
        self.running = false;
        self.generation += 1;
        match self.mode {
            Mode::Focus => self.focus_sessions_completed += 1,
            Mode::ShortBreak | Mode::LongBreak => self.break_sessions_completed += 1,
        }
        if decremented {
            self.notify_tick();
        }
        Some(Event::SessionEnded {
            mode: self.mode,
            focus_sessions_completed: self.focus_sessions_completed,
            break_sessions_completed: self.break_sessions_completed,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn notify_tick(&mut self) {
        let snapshot = self.snapshot();
        if let Some(observer) = self.on_tick.as_mut() {
            observer(snapshot);
        }
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(ModeDurations::default(), 4)
    }
}
