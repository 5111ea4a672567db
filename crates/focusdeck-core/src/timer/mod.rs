mod engine;
mod mode;

pub use engine::{TickObserver, TimerEngine};
pub use mode::{Mode, ModeDurations};
