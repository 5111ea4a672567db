//! End-to-end session flow: countdown, task credit, mode advancement.

use focusdeck_core::session::handle_session_end;
use focusdeck_core::storage::JsonStore;
use focusdeck_core::task::{Task, TaskStore};
use focusdeck_core::timer::{Mode, ModeDurations, TimerEngine};
use focusdeck_core::{Event, Settings};

fn small_durations() -> ModeDurations {
    ModeDurations {
        focus_secs: 3,
        short_break_secs: 2,
        long_break_secs: 4,
    }
}

/// Drive the running countdown to its end, returning the end event.
fn run_to_end(engine: &mut TimerEngine) -> Event {
    engine.start();
    let generation = engine.generation();
    loop {
        if let Some(event) = engine.tick(generation) {
            return event;
        }
    }
}

#[test]
fn focus_session_credits_active_task_and_advances() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::at(dir.path().join("store.json"));
    let tasks = TaskStore::new(store.clone());

    let mut task = Task::new("write report");
    task.estimated_pomodoros = 2;
    task.completed_pomodoros = 1;
    let id = task.id.clone();
    tasks.add(task).unwrap();

    let mut engine = TimerEngine::new(small_durations(), 4);
    engine.set_active_task(id.clone());

    let event = run_to_end(&mut engine);
    match event {
        Event::SessionEnded {
            mode,
            focus_sessions_completed,
            ..
        } => {
            assert_eq!(mode, Mode::Focus);
            assert_eq!(focus_sessions_completed, 1);
        }
        other => panic!("expected SessionEnded, got {other:?}"),
    }

    let credited = handle_session_end(&mut engine, &tasks, &Settings::default())
        .unwrap()
        .unwrap();
    assert_eq!(credited.completed_pomodoros, 2);
    assert!(credited.completed);

    assert_eq!(tasks.get(&id).unwrap().completed_pomodoros, 2);
    assert_eq!(engine.mode(), Mode::ShortBreak);
    assert_eq!(engine.seconds_remaining(), 2);
    assert!(!engine.is_running());
}

#[test]
fn deleting_the_active_task_mid_session_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::at(dir.path().join("store.json"));
    let tasks = TaskStore::new(store);

    let task = Task::new("soon gone");
    let id = task.id.clone();
    tasks.add(task).unwrap();

    let mut engine = TimerEngine::new(small_durations(), 4);
    engine.set_active_task(id.clone());
    engine.start();
    let generation = engine.generation();

    engine.tick(generation);
    tasks.delete(&id).unwrap(); // mid-session
    while engine.tick(generation).is_none() {}

    let credited = handle_session_end(&mut engine, &tasks, &Settings::default()).unwrap();
    assert!(credited.is_none());
    assert_eq!(engine.mode(), Mode::ShortBreak);
}

#[test]
fn auto_start_runs_sessions_back_to_back() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::at(dir.path().join("store.json"));
    let tasks = TaskStore::new(store.clone());

    let settings = Settings {
        auto_start: true,
        ..Settings::default()
    };

    let mut engine = TimerEngine::new(small_durations(), 4);
    engine.start();

    // Focus ends, break auto-starts, break ends, focus auto-starts.
    let mut generation = engine.generation();
    loop {
        if engine.tick(generation).is_some() {
            handle_session_end(&mut engine, &tasks, &settings).unwrap();
            break;
        }
    }
    assert_eq!(engine.mode(), Mode::ShortBreak);
    assert!(engine.is_running());

    generation = engine.generation();
    loop {
        if engine.tick(generation).is_some() {
            handle_session_end(&mut engine, &tasks, &settings).unwrap();
            break;
        }
    }
    assert_eq!(engine.mode(), Mode::Focus);
    assert!(engine.is_running());
    assert_eq!(engine.seconds_remaining(), 3);
    assert_eq!(engine.focus_sessions_completed(), 1);
    assert_eq!(engine.break_sessions_completed(), 1);
}

#[test]
fn every_fourth_focus_session_earns_a_long_break() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::at(dir.path().join("store.json"));
    let tasks = TaskStore::new(store);

    let mut engine = TimerEngine::new(small_durations(), 4);

    for session in 1..=4u32 {
        assert_eq!(engine.mode(), Mode::Focus);
        run_to_end(&mut engine);
        handle_session_end(&mut engine, &tasks, &Settings::default()).unwrap();

        if session == 4 {
            assert_eq!(engine.mode(), Mode::LongBreak);
            assert_eq!(engine.seconds_remaining(), 4);
        } else {
            assert_eq!(engine.mode(), Mode::ShortBreak);
        }

        run_to_end(&mut engine);
        handle_session_end(&mut engine, &tasks, &Settings::default()).unwrap();
        assert_eq!(engine.mode(), Mode::Focus);
    }
}

#[test]
fn one_task_absorbs_a_full_day_of_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::at(dir.path().join("store.json"));
    let tasks = TaskStore::new(store);

    let mut task = Task::new("thesis chapter");
    task.estimated_pomodoros = 3;
    let id = task.id.clone();
    tasks.add(task).unwrap();

    let mut engine = TimerEngine::new(small_durations(), 4);
    engine.set_active_task(id.clone());

    let mut credited_count = 0;
    while tasks.get(&id).map(|t| t.completed) == Some(false) {
        run_to_end(&mut engine);
        if handle_session_end(&mut engine, &tasks, &Settings::default())
            .unwrap()
            .is_some()
        {
            credited_count += 1;
        }
    }

    // Breaks credit the task too, so three session ends finish it.
    assert_eq!(credited_count, 3);
    let done = tasks.get(&id).unwrap();
    assert_eq!(done.completed_pomodoros, 3);
    assert!(done.completed);
}
