//! Task and subtask data structures.
//!
//! A `Task` is the unit of trackable work: title, dates, classification,
//! hour estimates, plus optional subtasks, member assignments and links to
//! external assets. Subtasks are owned by their parent task and carry a
//! generated id so they can be removed or toggled without relying on a
//! positional index.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fields::{Category, Priority, Status};

/// A unit of trackable work.
///
/// `id` and `created` are stamped when the task enters the store and never
/// change afterwards. Dates are calendar dates only; there is no
/// time-of-day component to truncate or drift across time zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due: NaiveDate,
    pub created: NaiveDate,
    pub priority: Priority,
    pub category: Category,
    pub status: Status,
    #[serde(default)]
    pub estimated_hours: u32,
    #[serde(default)]
    pub actual_hours: u32,
    #[serde(default)]
    pub sub_tasks: Vec<SubTask>,
    /// Member ids. Uniqueness is enforced on assignment.
    #[serde(default)]
    pub assigned_members: Vec<String>,
    /// Opaque external-resource identifiers, stored and compared for
    /// presence only. Insertion order is preserved.
    #[serde(default)]
    pub asset_guids: Vec<String>,
}

impl Task {
    /// A task is overdue once its due date has passed and it is not done.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due < today && self.status != Status::Completed
    }

    /// Completed subtasks out of the total, for progress display.
    pub fn subtask_progress(&self) -> (usize, usize) {
        let done = self.sub_tasks.iter().filter(|st| st.is_completed).count();
        (done, self.sub_tasks.len())
    }
}

/// A checklist item owned by a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubTask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub assigned_to: Vec<String>,
    #[serde(default)]
    pub asset_guids: Vec<String>,
}

impl SubTask {
    pub fn new(title: &str) -> Self {
        SubTask {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            is_completed: false,
            assigned_to: Vec::new(),
            asset_guids: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_with_status(status: Status, due: NaiveDate) -> Task {
        Task {
            id: "t1".into(),
            title: "Fix bug".into(),
            description: String::new(),
            due,
            created: due,
            priority: Priority::Medium,
            category: Category::General,
            status,
            estimated_hours: 0,
            actual_hours: 0,
            sub_tasks: Vec::new(),
            assigned_members: Vec::new(),
            asset_guids: Vec::new(),
        }
    }

    #[test]
    fn overdue_requires_past_due_and_not_completed() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let past = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert!(task_with_status(Status::InProgress, past).is_overdue(today));
        assert!(!task_with_status(Status::Completed, past).is_overdue(today));
        assert!(!task_with_status(Status::InProgress, today).is_overdue(today));
    }

    #[test]
    fn subtasks_get_distinct_ids() {
        let a = SubTask::new("one");
        let b = SubTask::new("one");
        assert_ne!(a.id, b.id);
        assert!(!a.is_completed);
    }
}
