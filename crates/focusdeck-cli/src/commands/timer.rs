//! Timer commands: a foreground countdown run and a state snapshot.

use std::io::Write;
use std::time::Duration;

use clap::Subcommand;
use focusdeck_core::storage::{Config, JsonStore};
use focusdeck_core::task::TaskStore;
use focusdeck_core::timer::{Mode, TimerEngine};
use focusdeck_core::{handle_session_end, Event, Settings};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run countdown sessions in the foreground
    Run {
        /// Starting mode: focus, short-break, or long-break
        #[arg(long, default_value = "focus")]
        mode: Mode,
        /// Task ID to credit finished sessions to
        #[arg(long)]
        task: Option<String>,
        /// Stop after this many completed sessions (auto-start keeps the
        /// run going until the count is reached)
        #[arg(long, default_value = "1")]
        sessions: u32,
        /// Print events as JSON lines instead of a live countdown
        #[arg(long)]
        json: bool,
    },
    /// Print the initial timer state as JSON
    Status,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Run {
            mode,
            task,
            sessions,
            json,
        } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(run_sessions(mode, task, sessions, json))
        }
        TimerAction::Status => {
            let config = Config::load_or_default();
            let engine =
                TimerEngine::new(config.durations(), config.timer.sessions_before_long_break);
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
            Ok(())
        }
    }
}

fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

async fn run_sessions(
    mode: Mode,
    task: Option<String>,
    sessions: u32,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonStore::open()?;
    let tasks = TaskStore::new(store.clone());
    let config = Config::load_or_default();
    let mut engine = TimerEngine::new(config.durations(), config.timer.sessions_before_long_break);

    engine.set_mode(mode);
    if let Some(id) = task {
        // Weak reference: a task deleted before the session ends is
        // simply not credited.
        if tasks.get(&id).is_none() {
            eprintln!("warning: task {id} not found; sessions will not be credited");
        }
        engine.set_active_task(id);
    }

    if json {
        engine.set_on_tick(Box::new(|snapshot| {
            if let Ok(line) = serde_json::to_string(&snapshot) {
                println!("{line}");
            }
        }));
    } else {
        engine.set_on_tick(Box::new(|snapshot| {
            print!(
                "\r{} {}  ",
                snapshot.mode.label(),
                format_time(snapshot.seconds_remaining)
            );
            let _ = std::io::stdout().flush();
        }));
    }

    if let Some(event) = engine.start() {
        if json {
            println!("{}", serde_json::to_string(&event)?);
        }
    }
    let mut generation = engine.generation();
    let mut completed = 0u32;
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.tick().await; // the first tick completes immediately

    while completed < sessions {
        interval.tick().await;
        let Some(event) = engine.tick(generation) else {
            continue;
        };

        if let Event::SessionEnded { .. } = &event {
            completed += 1;
            let settings = Settings::load(&store);
            let credited = handle_session_end(&mut engine, &tasks, &settings)?;

            if json {
                println!("{}", serde_json::to_string(&event)?);
            } else {
                println!();
                match &credited {
                    Some(task) if task.completed => println!(
                        "Session complete -- '{}' finished ({}/{})",
                        task.name, task.completed_pomodoros, task.estimated_pomodoros
                    ),
                    Some(task) => println!(
                        "Session complete -- '{}' at {}/{}",
                        task.name, task.completed_pomodoros, task.estimated_pomodoros
                    ),
                    None => println!("Session complete"),
                }
            }

            if completed >= sessions || !engine.is_running() {
                break;
            }
            generation = engine.generation();
            if !json {
                println!(
                    "Next: {} {}",
                    engine.mode().label(),
                    format_time(engine.seconds_remaining())
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn format_time_pads_minutes_and_seconds() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(61), "01:01");
        assert_eq!(format_time(1500), "25:00");
        assert_eq!(format_time(599), "09:59");
    }
}
