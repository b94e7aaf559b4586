//! Enumerations and field types for task classification.
//!
//! This module defines the structured data types used to categorise tasks:
//! priority, work category, and completion status. Filter wildcards are
//! expressed as `Option<T>` on the query side, never stored on a task.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Priority classification for task importance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Severity rank used for ordering. Critical ranks highest.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
            Priority::Critical => 3,
        }
    }
}

/// Work category a task belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    General,
    Programming,
    Art,
    Design,
    Testing,
    Documentation,
    Audio,
    Animation,
    Ui,
}

/// Task completion status. Any status may be set from any other; there is
/// no enforced transition graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    NotStarted,
    InProgress,
    Completed,
    OnHold,
    Blocked,
}

/// Format a priority for display and CSV output.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
        Priority::Critical => "Critical",
    }
}

/// Format a category for display and CSV output.
pub fn format_category(c: Category) -> &'static str {
    match c {
        Category::General => "General",
        Category::Programming => "Programming",
        Category::Art => "Art",
        Category::Design => "Design",
        Category::Testing => "Testing",
        Category::Documentation => "Documentation",
        Category::Audio => "Audio",
        Category::Animation => "Animation",
        Category::Ui => "UI",
    }
}

/// Format a status for display and CSV output.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::NotStarted => "NotStarted",
        Status::InProgress => "InProgress",
        Status::Completed => "Completed",
        Status::OnHold => "OnHold",
        Status::Blocked => "Blocked",
    }
}

/// Single-character status marker for list rows.
pub fn status_symbol(s: Status) -> &'static str {
    match s {
        Status::NotStarted => "○",
        Status::InProgress => "▶",
        Status::Completed => "✓",
        Status::OnHold => "⏸",
        Status::Blocked => "⛔",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_rank_orders_by_severity() {
        assert!(Priority::Critical.rank() > Priority::High.rank());
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }
}
