//! Session completion handling: task attribution and mode advancement.

use crate::error::Result;
use crate::settings::Settings;
use crate::task::{Task, TaskStore};
use crate::timer::TimerEngine;

/// Handle one session-end event.
///
/// Credits the finished pomodoro to the engine's active task when that
/// task still exists - a task deleted mid-session is skipped silently -
/// then advances the engine to the next mode, auto-starting it when the
/// `auto_start` setting is on. Returns the credited task, if any, so the
/// caller can render the new state.
///
/// Must run exactly once per [`crate::Event::SessionEnded`], before any
/// rendering, so the next render reflects both the task and the new mode.
pub fn handle_session_end(
    engine: &mut TimerEngine,
    tasks: &TaskStore,
    settings: &Settings,
) -> Result<Option<Task>> {
    let credited = match engine.active_task_id() {
        Some(id) => match tasks.get(id) {
            Some(mut task) => {
                task.credit_pomodoro();
                tasks.update(&task)?;
                Some(task)
            }
            None => None,
        },
        None => None,
    };

    engine.advance_after_session(settings.auto_start);
    Ok(credited)
}
