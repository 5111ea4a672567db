use chrono::NaiveDate;

use super::Task;

/// Which slice of the task collection a query returns.
///
/// Filters are pure predicates over a task and "today" - the current local
/// calendar date, taken at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    /// Due today and not completed.
    Today,
    /// Due strictly after today and not completed.
    Upcoming,
    /// Completed, regardless of deadline.
    Completed,
    /// Everything.
    All,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        match self {
            TaskFilter::Today => !task.completed && task.deadline_date() == Some(today),
            TaskFilter::Upcoming => {
                !task.completed && task.deadline_date().is_some_and(|d| d > today)
            }
            TaskFilter::Completed => task.completed,
            TaskFilter::All => true,
        }
    }
}

impl std::str::FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(TaskFilter::Today),
            "upcoming" => Ok(TaskFilter::Upcoming),
            "completed" => Ok(TaskFilter::Completed),
            "all" => Ok(TaskFilter::All),
            other => Err(format!("unknown filter: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, Utc};

    use super::*;

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    fn due_in(days: i64) -> Task {
        let mut task = Task::new("due");
        task.deadline = Some(Utc::now() + Duration::days(days));
        task
    }

    #[test]
    fn due_today_shows_in_today_only() {
        let task = due_in(0);
        assert!(TaskFilter::Today.matches(&task, today()));
        assert!(!TaskFilter::Upcoming.matches(&task, today()));
        assert!(!TaskFilter::Completed.matches(&task, today()));
        assert!(TaskFilter::All.matches(&task, today()));
    }

    #[test]
    fn due_later_shows_in_upcoming_only() {
        let task = due_in(3);
        assert!(!TaskFilter::Today.matches(&task, today()));
        assert!(TaskFilter::Upcoming.matches(&task, today()));
    }

    #[test]
    fn overdue_shows_nowhere_but_all() {
        let task = due_in(-2);
        assert!(!TaskFilter::Today.matches(&task, today()));
        assert!(!TaskFilter::Upcoming.matches(&task, today()));
        assert!(TaskFilter::All.matches(&task, today()));
    }

    #[test]
    fn completed_never_shows_in_today_or_upcoming() {
        let mut task = due_in(0);
        task.completed = true;
        assert!(!TaskFilter::Today.matches(&task, today()));
        assert!(!TaskFilter::Upcoming.matches(&task, today()));
        assert!(TaskFilter::Completed.matches(&task, today()));

        let mut later = due_in(5);
        later.completed = true;
        assert!(!TaskFilter::Upcoming.matches(&later, today()));
        assert!(TaskFilter::Completed.matches(&later, today()));
    }

    #[test]
    fn no_deadline_only_in_all_until_completed() {
        let task = Task::new("someday");
        assert!(!TaskFilter::Today.matches(&task, today()));
        assert!(!TaskFilter::Upcoming.matches(&task, today()));
        assert!(!TaskFilter::Completed.matches(&task, today()));
        assert!(TaskFilter::All.matches(&task, today()));
    }

    #[test]
    fn filter_parse() {
        assert_eq!("today".parse::<TaskFilter>(), Ok(TaskFilter::Today));
        assert_eq!("all".parse::<TaskFilter>(), Ok(TaskFilter::All));
        assert!("overdue".parse::<TaskFilter>().is_err());
    }
}
