//! Configuration snapshot: new-task defaults and display colors.
//!
//! Loaded once at startup from an optional `config.json` in the data
//! directory and passed read-only into the operations that need defaults.
//! Mutation operations never write back into configuration. Missing or
//! malformed files fall back to the hardcoded defaults below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::fields::{Category, Priority, Status};

pub const CONFIG_FILE: &str = "config.json";

/// Defaults applied to new tasks plus per-value display colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    pub default_priority: Priority,
    pub default_category: Category,
    pub default_status: Status,
    pub default_estimate_hours: u32,
    /// New tasks without an explicit due date fall due this many days out.
    pub default_due_days: i64,
    pub priority_colors: PriorityColors,
    pub status_colors: StatusColors,
    pub category_colors: CategoryColors,
}

impl Default for TodoConfig {
    fn default() -> Self {
        TodoConfig {
            default_priority: Priority::Medium,
            default_category: Category::General,
            default_status: Status::NotStarted,
            default_estimate_hours: 2,
            default_due_days: 7,
            priority_colors: PriorityColors::default(),
            status_colors: StatusColors::default(),
            category_colors: CategoryColors::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityColors {
    pub low: String,
    pub medium: String,
    pub high: String,
    pub critical: String,
}

impl Default for PriorityColors {
    fn default() -> Self {
        PriorityColors {
            low: "#00FF00".into(),
            medium: "#FF8000".into(),
            high: "#FF0000".into(),
            critical: "#800080".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusColors {
    pub not_started: String,
    pub in_progress: String,
    pub completed: String,
    pub on_hold: String,
    pub blocked: String,
}

impl Default for StatusColors {
    fn default() -> Self {
        StatusColors {
            not_started: "#808080".into(),
            in_progress: "#3399FF".into(),
            completed: "#33CC33".into(),
            on_hold: "#FFCC33".into(),
            blocked: "#FF4D4D".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryColors {
    pub general: String,
    pub programming: String,
    pub art: String,
    pub design: String,
    pub testing: String,
    pub documentation: String,
    pub audio: String,
    pub animation: String,
    pub ui: String,
}

impl Default for CategoryColors {
    fn default() -> Self {
        CategoryColors {
            general: "#808080".into(),
            programming: "#3399FF".into(),
            art: "#CC33CC".into(),
            design: "#00CCCC".into(),
            testing: "#33CC33".into(),
            documentation: "#FFFFFF".into(),
            audio: "#CC66FF".into(),
            animation: "#FF8000".into(),
            ui: "#E6E633".into(),
        }
    }
}

impl TodoConfig {
    /// Load from `config.json` under `dir`, falling back to defaults when
    /// the file is absent or unreadable.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return TodoConfig::default();
        }
        match fs::read_to_string(&path) {
            Ok(buf) => match serde_json::from_str(&buf) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "malformed config, using defaults");
                    TodoConfig::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                TodoConfig::default()
            }
        }
    }

    pub fn priority_color(&self, p: Priority) -> &str {
        match p {
            Priority::Low => &self.priority_colors.low,
            Priority::Medium => &self.priority_colors.medium,
            Priority::High => &self.priority_colors.high,
            Priority::Critical => &self.priority_colors.critical,
        }
    }

    pub fn status_color(&self, s: Status) -> &str {
        match s {
            Status::NotStarted => &self.status_colors.not_started,
            Status::InProgress => &self.status_colors.in_progress,
            Status::Completed => &self.status_colors.completed,
            Status::OnHold => &self.status_colors.on_hold,
            Status::Blocked => &self.status_colors.blocked,
        }
    }

    pub fn category_color(&self, c: Category) -> &str {
        match c {
            Category::General => &self.category_colors.general,
            Category::Programming => &self.category_colors.programming,
            Category::Art => &self.category_colors.art,
            Category::Design => &self.category_colors.design,
            Category::Testing => &self.category_colors.testing,
            Category::Documentation => &self.category_colors.documentation,
            Category::Audio => &self.category_colors.audio,
            Category::Animation => &self.category_colors.animation,
            Category::Ui => &self.category_colors.ui,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let config = TodoConfig::default();
        assert_eq!(config.default_priority, Priority::Medium);
        assert_eq!(config.default_category, Category::General);
        assert_eq!(config.default_status, Status::NotStarted);
        assert_eq!(config.default_estimate_hours, 2);
        assert_eq!(config.default_due_days, 7);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: TodoConfig =
            serde_json::from_str(r#"{"default_priority": "high", "default_due_days": 3}"#).unwrap();
        assert_eq!(config.default_priority, Priority::High);
        assert_eq!(config.default_due_days, 3);
        assert_eq!(config.default_category, Category::General);
        assert_eq!(config.priority_color(Priority::Critical), "#800080");
    }
}
