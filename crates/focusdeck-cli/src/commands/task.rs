//! Task management commands.

use clap::Subcommand;
use focusdeck_core::storage::JsonStore;
use focusdeck_core::task::{parse_deadline, Task, TaskFilter, TaskStore};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a new task
    Add {
        /// Task name
        name: String,
        /// Deadline date (YYYY-MM-DD); unparseable input stores no deadline
        #[arg(long)]
        deadline: Option<String>,
        /// Estimated pomodoros
        #[arg(long, default_value = "1")]
        pomodoros: u32,
    },
    /// List tasks
    List {
        /// Filter: today, upcoming, completed, or all
        #[arg(long, default_value = "all")]
        filter: TaskFilter,
    },
    /// Show one task
    Get {
        /// Task ID
        id: String,
    },
    /// Edit a task's name, deadline, or estimate
    Edit {
        /// Task ID
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New deadline date (YYYY-MM-DD); pass "none" to clear it
        #[arg(long)]
        deadline: Option<String>,
        /// New estimated pomodoros
        #[arg(long)]
        pomodoros: Option<u32>,
    },
    /// Toggle completion
    Done {
        /// Task ID
        id: String,
    },
    /// Credit one pomodoro without running a session
    Record {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = TaskStore::new(JsonStore::open()?);

    match action {
        TaskAction::Add {
            name,
            deadline,
            pomodoros,
        } => {
            let mut task = Task::new(name);
            task.estimated_pomodoros = pomodoros.max(1);
            task.deadline = deadline.as_deref().and_then(parse_deadline);
            tasks.add(task.clone())?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { filter } => {
            let list = tasks.list_filtered(filter);
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        TaskAction::Get { id } => match tasks.get(&id) {
            Some(task) => println!("{}", serde_json::to_string_pretty(&task)?),
            None => println!("Task not found: {id}"),
        },
        TaskAction::Edit {
            id,
            name,
            deadline,
            pomodoros,
        } => match tasks.get(&id) {
            Some(mut task) => {
                if let Some(name) = name {
                    task.name = name;
                }
                if let Some(deadline) = deadline {
                    task.deadline = if deadline == "none" {
                        None
                    } else {
                        parse_deadline(&deadline)
                    };
                }
                if let Some(pomodoros) = pomodoros {
                    task.estimated_pomodoros = pomodoros.max(1);
                    if task.completed_pomodoros >= task.estimated_pomodoros {
                        task.completed = true;
                    }
                }
                tasks.update(&task)?;
                println!("{}", serde_json::to_string_pretty(&task)?);
            }
            None => println!("Task not found: {id}"),
        },
        TaskAction::Done { id } => match tasks.get(&id) {
            Some(mut task) => {
                task.completed = !task.completed;
                tasks.update(&task)?;
                println!("{}", serde_json::to_string_pretty(&task)?);
            }
            None => println!("Task not found: {id}"),
        },
        TaskAction::Record { id } => match tasks.record_pomodoro(&id)? {
            Some(task) => println!("{}", serde_json::to_string_pretty(&task)?),
            None => println!("Task not found: {id}"),
        },
        TaskAction::Delete { id } => {
            tasks.delete(&id)?;
            println!("Task deleted: {id}");
        }
    }

    Ok(())
}
