//! Filtered, sorted task views.
//!
//! `filter_tasks` is a pure function of the task collection and the filter
//! criteria: it never mutates the store and carries no hidden state, so the
//! presentation layer can re-derive the view after every change.

use crate::fields::{Category, Priority, Status};
use crate::task::Task;

/// Criteria for the displayed task view. All filters combine with AND.
/// `None` on an enum field means "no restriction".
#[derive(Debug, Clone)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against title and description.
    pub search: String,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub status: Option<Status>,
    pub show_completed: bool,
    /// Restrict to tasks assigned to this member id.
    pub assigned_member: Option<String>,
}

impl Default for TaskFilter {
    fn default() -> Self {
        TaskFilter {
            search: String::new(),
            priority: None,
            category: None,
            status: None,
            show_completed: true,
            assigned_member: None,
        }
    }
}

/// Compute the filtered view, ordered by priority severity descending and
/// due date ascending. The sort is stable, so equal tasks keep their
/// insertion order.
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    let needle = filter.search.trim().to_lowercase();

    let mut view: Vec<&Task> = tasks
        .iter()
        .filter(|t| {
            if !filter.show_completed && t.status == Status::Completed {
                return false;
            }
            if !needle.is_empty()
                && !t.title.to_lowercase().contains(&needle)
                && !t.description.to_lowercase().contains(&needle)
            {
                return false;
            }
            if let Some(p) = filter.priority {
                if t.priority != p {
                    return false;
                }
            }
            if let Some(c) = filter.category {
                if t.category != c {
                    return false;
                }
            }
            if let Some(s) = filter.status {
                if t.status != s {
                    return false;
                }
            }
            if let Some(ref member) = filter.assigned_member {
                if !t.assigned_members.iter().any(|id| id == member) {
                    return false;
                }
            }
            true
        })
        .collect();

    view.sort_by(|a, b| {
        b.priority
            .rank()
            .cmp(&a.priority.rank())
            .then(a.due.cmp(&b.due))
    });
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(title: &str, priority: Priority, category: Category, due: NaiveDate) -> Task {
        Task {
            id: title.to_string(),
            title: title.to_string(),
            description: String::new(),
            due,
            created: date(2024, 1, 1),
            priority,
            category,
            status: Status::NotStarted,
            estimated_hours: 0,
            actual_hours: 0,
            sub_tasks: Vec::new(),
            assigned_members: Vec::new(),
            asset_guids: Vec::new(),
        }
    }

    fn titles(view: &[&Task]) -> Vec<String> {
        view.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn orders_by_priority_before_due_date() {
        let tasks = vec![
            task("Fix bug", Priority::High, Category::Programming, date(2024, 1, 10)),
            task("Write docs", Priority::Low, Category::Documentation, date(2024, 1, 5)),
        ];
        let view = filter_tasks(&tasks, &TaskFilter::default());
        assert_eq!(titles(&view), ["Fix bug", "Write docs"]);
    }

    #[test]
    fn equal_priority_orders_by_earliest_due() {
        let tasks = vec![
            task("later", Priority::Medium, Category::General, date(2024, 2, 1)),
            task("sooner", Priority::Medium, Category::General, date(2024, 1, 15)),
        ];
        let view = filter_tasks(&tasks, &TaskFilter::default());
        assert_eq!(titles(&view), ["sooner", "later"]);
    }

    #[test]
    fn full_ties_keep_insertion_order() {
        let tasks = vec![
            task("first", Priority::Medium, Category::General, date(2024, 1, 15)),
            task("second", Priority::Medium, Category::General, date(2024, 1, 15)),
        ];
        let view = filter_tasks(&tasks, &TaskFilter::default());
        assert_eq!(titles(&view), ["first", "second"]);
    }

    #[test]
    fn search_matches_title_or_description_case_insensitive() {
        let mut with_desc = task("opaque", Priority::Low, Category::General, date(2024, 1, 1));
        with_desc.description = "Fix the LOGIN screen".into();
        let tasks = vec![
            task("Login page", Priority::Low, Category::General, date(2024, 1, 1)),
            with_desc,
            task("unrelated", Priority::Low, Category::General, date(2024, 1, 1)),
        ];
        let filter = TaskFilter {
            search: "login".into(),
            ..TaskFilter::default()
        };
        assert_eq!(titles(&filter_tasks(&tasks, &filter)), ["Login page", "opaque"]);
    }

    #[test]
    fn filters_are_conjunctive() {
        let tasks = vec![
            task("a", Priority::High, Category::Programming, date(2024, 1, 1)),
            task("b", Priority::High, Category::Art, date(2024, 1, 1)),
            task("c", Priority::Low, Category::Programming, date(2024, 1, 1)),
        ];
        let filter = TaskFilter {
            priority: Some(Priority::High),
            category: Some(Category::Programming),
            ..TaskFilter::default()
        };
        assert_eq!(titles(&filter_tasks(&tasks, &filter)), ["a"]);
    }

    #[test]
    fn hide_completed_drops_done_tasks() {
        let mut done = task("done", Priority::High, Category::General, date(2024, 1, 1));
        done.status = Status::Completed;
        let tasks = vec![
            done,
            task("open", Priority::Low, Category::General, date(2024, 1, 1)),
        ];
        let filter = TaskFilter {
            show_completed: false,
            ..TaskFilter::default()
        };
        assert_eq!(titles(&filter_tasks(&tasks, &filter)), ["open"]);
    }

    #[test]
    fn member_filter_matches_assignment() {
        let mut assigned = task("mine", Priority::Low, Category::General, date(2024, 1, 1));
        assigned.assigned_members.push("m-1".into());
        let tasks = vec![
            assigned,
            task("theirs", Priority::Low, Category::General, date(2024, 1, 1)),
        ];
        let filter = TaskFilter {
            assigned_member: Some("m-1".into()),
            ..TaskFilter::default()
        };
        assert_eq!(titles(&filter_tasks(&tasks, &filter)), ["mine"]);
    }

    #[test]
    fn filtering_is_pure_and_repeatable() {
        let tasks = vec![
            task("a", Priority::High, Category::General, date(2024, 1, 2)),
            task("b", Priority::Critical, Category::General, date(2024, 1, 9)),
            task("c", Priority::High, Category::General, date(2024, 1, 1)),
        ];
        let filter = TaskFilter::default();
        let first = titles(&filter_tasks(&tasks, &filter));
        let second = titles(&filter_tasks(&tasks, &filter));
        assert_eq!(first, second);
        assert_eq!(first, ["b", "c", "a"]);
    }
}
