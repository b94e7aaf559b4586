//! Store operations and utility functions for task and team data.
//!
//! The `Store` owns the in-memory task and member collections and is the
//! single source of truth. It loads once at startup and is persisted by the
//! caller after every mutation. Persistence is two JSON blobs under fixed
//! names in the data directory, written atomically (temp file + rename).
//! A load that hits missing or malformed data resets that collection to
//! empty and logs a warning instead of failing.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{Duration, Local, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::TodoConfig;
use crate::fields::{Category, Priority, Status};
use crate::member::TeamMember;
use crate::task::{SubTask, Task};

pub const TASKS_FILE: &str = "tasks.json";
pub const TEAM_FILE: &str = "team.json";

const BLOB_VERSION: u32 = 1;

/// Persistence failure surfaced by `Store::save`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize store state: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct BlobOut<'a, T: Serialize> {
    version: u32,
    items: &'a [T],
}

#[derive(Deserialize)]
struct BlobIn<T> {
    #[serde(default)]
    version: u32,
    items: Vec<T>,
}

/// In-memory store for tasks and team members.
#[derive(Debug, Default)]
pub struct Store {
    pub tasks: Vec<Task>,
    pub members: Vec<TeamMember>,
}

/// Fields supplied when creating a task. Anything left `None` falls back
/// to the configured defaults.
#[derive(Debug, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub due: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub status: Option<Status>,
    pub estimated_hours: Option<u32>,
    pub assigned_members: Vec<String>,
    pub asset_guids: Vec<String>,
}

/// Partial update for a task. `None` fields are left untouched; `id` and
/// `created` are never editable.
#[derive(Debug, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub status: Option<Status>,
    pub estimated_hours: Option<u32>,
    pub actual_hours: Option<u32>,
}

impl Store {
    /// Load both blobs from the data directory. Never fails: each blob that
    /// is missing or malformed yields an empty collection.
    pub fn load(dir: &Path) -> Self {
        Store {
            tasks: read_blob(&dir.join(TASKS_FILE)),
            members: read_blob(&dir.join(TEAM_FILE)),
        }
    }

    /// Persist the full state as two blobs using atomic writes.
    pub fn save(&self, dir: &Path) -> Result<(), StoreError> {
        fs::create_dir_all(dir).map_err(|e| StoreError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        write_blob(&dir.join(TASKS_FILE), &self.tasks)?;
        write_blob(&dir.join(TEAM_FILE), &self.members)?;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn member(&self, id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Create a task and append it. Returns the generated id.
    pub fn add_task(&mut self, draft: NewTask, config: &TodoConfig) -> String {
        let today = Local::now().date_naive();
        let id = Uuid::new_v4().to_string();

        let mut assigned = Vec::new();
        for member in draft.assigned_members {
            if !assigned.contains(&member) {
                assigned.push(member);
            }
        }
        let mut assets = Vec::new();
        for guid in draft.asset_guids {
            if !assets.contains(&guid) {
                assets.push(guid);
            }
        }

        self.tasks.push(Task {
            id: id.clone(),
            title: draft.title,
            description: draft.description.unwrap_or_default(),
            due: draft
                .due
                .unwrap_or(today + Duration::days(config.default_due_days)),
            created: today,
            priority: draft.priority.unwrap_or(config.default_priority),
            category: draft.category.unwrap_or(config.default_category),
            status: draft.status.unwrap_or(config.default_status),
            estimated_hours: draft
                .estimated_hours
                .unwrap_or(config.default_estimate_hours),
            actual_hours: 0,
            sub_tasks: Vec::new(),
            assigned_members: assigned,
            asset_guids: assets,
        });
        id
    }

    /// Apply a patch to the task. Returns false when the id is unknown.
    pub fn edit_task(&mut self, id: &str, patch: TaskPatch) -> bool {
        let Some(task) = self.get_mut(id) else {
            return false;
        };
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(due) = patch.due {
            task.due = due;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(category) = patch.category {
            task.category = category;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(estimated) = patch.estimated_hours {
            task.estimated_hours = estimated;
        }
        if let Some(actual) = patch.actual_hours {
            task.actual_hours = actual;
        }
        true
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Clone a task under a fresh id: "(Copy)" title suffix, due pushed out
    /// a week, status back to NotStarted, subtasks re-opened under fresh
    /// ids. Everything else is carried over. Returns the new id.
    pub fn duplicate_task(&mut self, id: &str) -> Option<String> {
        let original = self.get(id)?.clone();
        let today = Local::now().date_naive();
        let new_id = Uuid::new_v4().to_string();

        let sub_tasks = original
            .sub_tasks
            .iter()
            .map(|st| SubTask {
                id: Uuid::new_v4().to_string(),
                title: st.title.clone(),
                is_completed: false,
                assigned_to: st.assigned_to.clone(),
                asset_guids: st.asset_guids.clone(),
            })
            .collect();

        self.tasks.push(Task {
            id: new_id.clone(),
            title: format!("{} (Copy)", original.title),
            due: original.due + Duration::days(7),
            created: today,
            status: Status::NotStarted,
            sub_tasks,
            ..original
        });
        Some(new_id)
    }

    /// Append a subtask, returning its generated id.
    pub fn add_subtask(&mut self, task_id: &str, title: &str) -> Option<String> {
        let task = self.get_mut(task_id)?;
        let sub = SubTask::new(title);
        let id = sub.id.clone();
        task.sub_tasks.push(sub);
        Some(id)
    }

    /// Remove a subtask by its stable id, never by position.
    pub fn remove_subtask(&mut self, task_id: &str, subtask_id: &str) -> bool {
        let Some(task) = self.get_mut(task_id) else {
            return false;
        };
        let before = task.sub_tasks.len();
        task.sub_tasks.retain(|st| st.id != subtask_id);
        task.sub_tasks.len() != before
    }

    pub fn set_subtask_completed(&mut self, task_id: &str, subtask_id: &str, done: bool) -> bool {
        let Some(task) = self.get_mut(task_id) else {
            return false;
        };
        match task.sub_tasks.iter_mut().find(|st| st.id == subtask_id) {
            Some(sub) => {
                sub.is_completed = done;
                true
            }
            None => false,
        }
    }

    /// Assign a member to a task. Already-assigned members are left alone.
    pub fn assign_member(&mut self, task_id: &str, member_id: &str) -> bool {
        let Some(task) = self.get_mut(task_id) else {
            return false;
        };
        if !task.assigned_members.iter().any(|m| m == member_id) {
            task.assigned_members.push(member_id.to_string());
        }
        true
    }

    pub fn unassign_member(&mut self, task_id: &str, member_id: &str) -> bool {
        let Some(task) = self.get_mut(task_id) else {
            return false;
        };
        task.assigned_members.retain(|m| m != member_id);
        true
    }

    /// Link an asset to a task. Adding a guid that is already present is a
    /// no-op and preserves the order of existing entries.
    pub fn add_asset_ref(&mut self, task_id: &str, guid: &str) -> bool {
        let Some(task) = self.get_mut(task_id) else {
            return false;
        };
        if !task.asset_guids.iter().any(|g| g == guid) {
            task.asset_guids.push(guid.to_string());
        }
        true
    }

    pub fn remove_asset_ref(&mut self, task_id: &str, guid: &str) -> bool {
        let Some(task) = self.get_mut(task_id) else {
            return false;
        };
        task.asset_guids.retain(|g| g != guid);
        true
    }

    /// Create a member with generated id, color and initials.
    pub fn add_member(&mut self, name: &str, role: &str) -> String {
        let member = TeamMember::new(name, role);
        let id = member.id.clone();
        self.members.push(member);
        id
    }

    /// Hide a member from assignment without touching historical
    /// assignments on tasks.
    pub fn deactivate_member(&mut self, id: &str) -> bool {
        match self.members.iter_mut().find(|m| m.id == id) {
            Some(member) => {
                member.is_active = false;
                true
            }
            None => false,
        }
    }

    /// Delete a member and sweep their id out of every task's assignments
    /// and every subtask's. The full-collection scan is intentional:
    /// deletion is rare and the collections stay small.
    pub fn delete_member(&mut self, id: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.id != id);
        if self.members.len() == before {
            return false;
        }
        for task in self.tasks.iter_mut() {
            task.assigned_members.retain(|m| m != id);
            for sub in task.sub_tasks.iter_mut() {
                sub.assigned_to.retain(|m| m != id);
            }
        }
        true
    }

    /// Delete every completed task, returning how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.status != Status::Completed);
        before - self.tasks.len()
    }

    /// Resolve a task reference that is either an id or an exact title
    /// (case-insensitive). Ambiguous titles are an error naming the ids.
    pub fn resolve_task(&self, reference: &str) -> Result<String, String> {
        if self.get(reference).is_some() {
            return Ok(reference.to_string());
        }
        let lowered = reference.to_lowercase();
        let matches: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.title.to_lowercase() == lowered)
            .collect();
        match matches.as_slice() {
            [] => Err(format!("No task found for '{reference}'")),
            [only] => Ok(only.id.clone()),
            several => {
                let mut msg = format!("Multiple tasks titled '{reference}':\n");
                for t in several {
                    msg.push_str(&format!("  {}  {}\n", t.id, t.title));
                }
                msg.push_str("Use the id instead.");
                Err(msg)
            }
        }
    }

    /// Resolve a member reference that is either an id or an exact name
    /// (case-insensitive).
    pub fn resolve_member(&self, reference: &str) -> Result<String, String> {
        if self.member(reference).is_some() {
            return Ok(reference.to_string());
        }
        let lowered = reference.to_lowercase();
        let matches: Vec<&TeamMember> = self
            .members
            .iter()
            .filter(|m| m.name.to_lowercase() == lowered)
            .collect();
        match matches.as_slice() {
            [] => Err(format!("No team member found for '{reference}'")),
            [only] => Ok(only.id.clone()),
            several => {
                let mut msg = format!("Multiple members named '{reference}':\n");
                for m in several {
                    msg.push_str(&format!("  {}  {} ({})\n", m.id, m.name, m.role));
                }
                msg.push_str("Use the id instead.");
                Err(msg)
            }
        }
    }
}

fn read_blob<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    if !path.exists() {
        return Vec::new();
    }
    let mut buf = String::new();
    match File::open(path).and_then(|mut f| f.read_to_string(&mut buf)) {
        Ok(_) => match serde_json::from_str::<BlobIn<T>>(&buf) {
            Ok(blob) if blob.version <= BLOB_VERSION => blob.items,
            Ok(blob) => {
                tracing::warn!(
                    path = %path.display(),
                    version = blob.version,
                    "unsupported data version, starting empty"
                );
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed data, starting empty");
                Vec::new()
            }
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable data, starting empty");
            Vec::new()
        }
    }
}

fn write_blob<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    let blob = BlobOut {
        version: BLOB_VERSION,
        items,
    };
    let data = serde_json::to_string_pretty(&blob)?;
    let tmp = path.with_extension("json.tmp");
    let io_err = |p: &Path| {
        let path = p.to_path_buf();
        move |e| StoreError::Io { path, source: e }
    };
    let mut f = File::create(&tmp).map_err(io_err(&tmp))?;
    f.write_all(data.as_bytes()).map_err(io_err(&tmp))?;
    f.flush().map_err(io_err(&tmp))?;
    fs::rename(&tmp, path).map_err(io_err(path))?;
    Ok(())
}

/// Parse human-readable due date input.
///
/// Supports "today", "tomorrow", weekday names ("friday" is this week's
/// Friday), "in 3d" / "in 2w", and plain "YYYY-MM-DD".
pub fn parse_due_input(s: &str) -> Option<NaiveDate> {
    let s = s.trim().to_lowercase();
    let today = Local::now().date_naive();

    match s.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("in ") {
        if let Some(days) = rest.strip_suffix('d') {
            if let Ok(n) = days.trim().parse::<i64>() {
                return Some(today + Duration::days(n));
            }
        }
        if let Some(weeks) = rest.strip_suffix('w') {
            if let Ok(n) = weeks.trim().parse::<i64>() {
                return Some(today + Duration::weeks(n));
            }
        }
    }

    let weekdays = [
        ("monday", 0),
        ("tuesday", 1),
        ("wednesday", 2),
        ("thursday", 3),
        ("friday", 4),
        ("saturday", 5),
        ("sunday", 6),
    ];
    for (name, target) in weekdays {
        if s == name {
            let current = chrono::Datelike::weekday(&today).num_days_from_monday() as i64;
            let ahead = (target - current).rem_euclid(7);
            return Some(today + Duration::days(ahead));
        }
    }

    NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()
}

/// Format a due date relative to today ("today", "tomorrow", "in 3d",
/// "2d late").
pub fn format_due_relative(due: NaiveDate, today: NaiveDate) -> String {
    let days = (due - today).num_days();
    match days {
        0 => "today".into(),
        1 => "tomorrow".into(),
        d if d > 1 => format!("in {d}d"),
        d => format!("{}d late", -d),
    }
}
