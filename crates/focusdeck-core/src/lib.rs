//! # FocusDeck Core Library
//!
//! Core business logic for FocusDeck, a Pomodoro timer paired with a
//! persisted task list. The library is UI-agnostic: any front end (the
//! bundled CLI, a GUI shell) drives it through direct calls and renders the
//! snapshots and query results it gets back.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a fixed-step countdown state machine. The caller
//!   schedules a once-per-second tick; a generation counter makes late
//!   ticks from a cancelled schedule harmless
//! - **Task Store**: read-modify-write CRUD over a JSON key/value store,
//!   with deadline/completion filters evaluated at call time
//! - **Session handling**: credits a finished session to the active task
//!   and advances the engine to the next mode
//! - **Storage**: a single-file JSON key/value store plus TOML-based
//!   configuration for the countdown durations
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: countdown state machine
//! - [`TaskStore`]: task collection persistence and filtering
//! - [`handle_session_end`]: session-to-task attribution
//! - [`JsonStore`]: key/value persistence
//! - [`Config`] / [`Settings`]: durations and user preferences

pub mod error;
pub mod events;
pub mod session;
pub mod settings;
pub mod storage;
pub mod task;
pub mod timer;

pub use error::{ConfigError, CoreError, StorageError};
pub use events::{Event, TimerSnapshot};
pub use session::handle_session_end;
pub use settings::Settings;
pub use storage::{Config, JsonStore};
pub use task::{Task, TaskFilter, TaskStore};
pub use timer::{Mode, ModeDurations, TimerEngine};
