//! Command implementations for the CLI interface.
//!
//! This module contains the command handlers for every subcommand, from
//! task CRUD through team management to CSV export. Handlers mutate the
//! store, persist immediately, and print a short confirmation; lookups
//! accept either an id or an exact title/name.

use std::io;
use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::{Args, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::config::TodoConfig;
use crate::fields::*;
use crate::member::TeamMember;
use crate::query::{filter_tasks, TaskFilter};
use crate::store::{format_due_relative, parse_due_input, NewTask, Store, TaskPatch};
use crate::task::Task;

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Short title for the task.
        title: String,
        /// Optional longer description.
        #[arg(long)]
        desc: Option<String>,
        /// Due date: YYYY-MM-DD, "today", "tomorrow", or "in Nd".
        #[arg(long)]
        due: Option<String>,
        /// Priority: low | medium | high | critical.
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        /// Category: general | programming | art | design | testing | documentation | audio | animation | ui.
        #[arg(long, value_enum)]
        category: Option<Category>,
        /// Status: not-started | in-progress | completed | on-hold | blocked.
        #[arg(long, value_enum)]
        status: Option<Status>,
        /// Estimated hours.
        #[arg(long)]
        estimate: Option<u32>,
        /// Assign a member by id or name. May be repeated.
        #[arg(long = "assign")]
        assign: Vec<String>,
        /// Link an asset guid. May be repeated.
        #[arg(long = "asset")]
        assets: Vec<String>,
    },

    /// List tasks with optional filters.
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// View a single task by id or title.
    View {
        /// Task id or title.
        task: String,
    },

    /// Update fields on a task.
    Edit {
        /// Task id or title.
        task: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        desc: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        #[arg(long, value_enum)]
        category: Option<Category>,
        #[arg(long, value_enum)]
        status: Option<Status>,
        /// Estimated hours.
        #[arg(long)]
        estimate: Option<u32>,
        /// Actual hours spent.
        #[arg(long)]
        actual: Option<u32>,
    },

    /// Mark a task in progress.
    Start {
        /// Task id or title.
        task: String,
    },

    /// Mark a task completed.
    Complete {
        /// Task id or title.
        task: String,
    },

    /// Clone a task: "(Copy)" suffix, due date pushed out a week,
    /// subtasks re-opened.
    Duplicate {
        /// Task id or title.
        task: String,
    },

    /// Delete a task.
    Delete {
        /// Task id or title.
        task: String,
    },

    /// Manage subtasks on a task.
    Subtask {
        #[command(subcommand)]
        action: SubtaskAction,
    },

    /// Assign a member to a task.
    Assign {
        /// Task id or title.
        task: String,
        /// Member id or name.
        member: String,
    },

    /// Remove a member from a task.
    Unassign {
        /// Task id or title.
        task: String,
        /// Member id or name.
        member: String,
    },

    /// Manage asset links on a task.
    Asset {
        #[command(subcommand)]
        action: AssetAction,
    },

    /// Manage team members.
    Member {
        #[command(subcommand)]
        action: MemberAction,
    },

    /// Export tasks to CSV format.
    Export {
        /// Output file path (default: todo_export.csv).
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Show task counts: total, completed, in progress, overdue.
    Stats,

    /// Delete all completed tasks.
    ClearCompleted,

    /// Delete all task data.
    Reset {
        /// Confirm wiping every task.
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration.
    Config,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct FilterArgs {
    /// Case-insensitive text to match in title or description.
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, value_enum)]
    pub priority: Option<Priority>,
    #[arg(long, value_enum)]
    pub category: Option<Category>,
    #[arg(long, value_enum)]
    pub status: Option<Status>,
    /// Only tasks assigned to this member (id or name).
    #[arg(long)]
    pub member: Option<String>,
    /// Include completed tasks.
    #[arg(long)]
    pub all: bool,
}

#[derive(Subcommand)]
pub enum SubtaskAction {
    /// Append a subtask to a task.
    Add {
        /// Parent task id or title.
        task: String,
        /// Subtask title.
        title: String,
    },
    /// Mark a subtask completed.
    Done {
        /// Parent task id or title.
        task: String,
        /// Subtask id.
        subtask: String,
    },
    /// Mark a subtask not completed.
    Undo {
        /// Parent task id or title.
        task: String,
        /// Subtask id.
        subtask: String,
    },
    /// Remove a subtask.
    Rm {
        /// Parent task id or title.
        task: String,
        /// Subtask id.
        subtask: String,
    },
}

#[derive(Subcommand)]
pub enum AssetAction {
    /// Link an asset guid to a task.
    Add {
        /// Task id or title.
        task: String,
        /// Opaque asset guid.
        guid: String,
    },
    /// Unlink an asset guid from a task.
    Rm {
        /// Task id or title.
        task: String,
        /// Opaque asset guid.
        guid: String,
    },
}

#[derive(Subcommand)]
pub enum MemberAction {
    /// Add a team member.
    Add {
        /// Member name, e.g. "Ada Lovelace".
        name: String,
        /// Member role.
        #[arg(long, default_value = "Developer")]
        role: String,
    },
    /// List team members.
    List {
        /// Include inactive members.
        #[arg(long)]
        all: bool,
    },
    /// Deactivate a member without touching their assignments.
    Deactivate {
        /// Member id or name.
        member: String,
    },
    /// Delete a member and remove them from every task and subtask.
    Rm {
        /// Member id or name.
        member: String,
    },
}

/// Persist the store, exiting with an error message on failure.
fn persist(store: &Store, dir: &Path) {
    if let Err(e) = store.save(dir) {
        eprintln!("Failed to save data: {e}");
        std::process::exit(1);
    }
}

fn resolve_task_or_exit(store: &Store, reference: &str) -> String {
    match store.resolve_task(reference) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn resolve_member_or_exit(store: &Store, reference: &str) -> String {
    match store.resolve_member(reference) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn parse_due_or_exit(input: &str) -> NaiveDate {
    match parse_due_input(input) {
        Some(date) => date,
        None => {
            eprintln!("Unrecognised due date '{input}'. Try YYYY-MM-DD, today, tomorrow, or in Nd.");
            std::process::exit(1);
        }
    }
}

/// Add a new task to the store.
#[allow(clippy::too_many_arguments)]
pub fn cmd_add(
    store: &mut Store,
    dir: &Path,
    config: &TodoConfig,
    title: String,
    desc: Option<String>,
    due: Option<String>,
    priority: Option<Priority>,
    category: Option<Category>,
    status: Option<Status>,
    estimate: Option<u32>,
    assign: Vec<String>,
    assets: Vec<String>,
) {
    if title.trim().is_empty() {
        eprintln!("Task title cannot be empty.");
        std::process::exit(1);
    }
    let due = due.as_deref().map(parse_due_or_exit);
    let assigned_members = assign
        .iter()
        .map(|reference| {
            let id = resolve_member_or_exit(store, reference);
            if let Some(member) = store.member(&id) {
                if !member.is_active {
                    eprintln!("Member '{}' is inactive and cannot be assigned.", member.name);
                    std::process::exit(1);
                }
            }
            id
        })
        .collect();

    let id = store.add_task(
        NewTask {
            title,
            description: desc,
            due,
            priority,
            category,
            status,
            estimated_hours: estimate,
            assigned_members,
            asset_guids: assets,
        },
        config,
    );
    persist(store, dir);
    println!("Added task {id}");
}

fn build_filter(store: &Store, args: FilterArgs) -> TaskFilter {
    let assigned_member = args
        .member
        .as_deref()
        .map(|reference| resolve_member_or_exit(store, reference));
    TaskFilter {
        search: args.search.unwrap_or_default(),
        priority: args.priority,
        category: args.category,
        status: args.status,
        show_completed: args.all,
        assigned_member,
    }
}

/// Wrap pre-padded text in a 24-bit ANSI color taken from a "#RRGGBB"
/// string. Unparseable colors leave the text plain.
fn paint(hex: &str, text: &str) -> String {
    match parse_hex_color(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m"),
        None => text.to_string(),
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

const OVERDUE_COLOR: &str = "#FF0000";

/// List tasks matching the filter, ordered by priority then due date.
pub fn cmd_list(store: &Store, config: &TodoConfig, args: FilterArgs) {
    let filter = build_filter(store, args);
    let view = filter_tasks(&store.tasks, &filter);
    if view.is_empty() {
        println!("No tasks found. Create a new task to get started!");
        return;
    }

    let today = Local::now().date_naive();
    println!(
        "{:<10} {:<13} {:<10} {:<6} {:<8} {}",
        "Priority", "Status", "Due", "Subs", "Owners", "Title"
    );
    for task in view {
        let (done, total) = task.subtask_progress();
        let subs = if total == 0 {
            "-".to_string()
        } else {
            format!("{done}/{total}")
        };
        let owners = owner_initials(store, task);
        let due = format!("{:<10}", format_due_relative(task.due, today));
        let due = if task.is_overdue(today) {
            paint(OVERDUE_COLOR, &due)
        } else {
            due
        };
        println!(
            "{} {} {} {} {:<6} {:<8} {}",
            paint(
                config.priority_color(task.priority),
                &format!("{:<10}", format_priority(task.priority)),
            ),
            status_symbol(task.status),
            paint(
                config.status_color(task.status),
                &format!("{:<11}", format_status(task.status)),
            ),
            due,
            subs,
            owners,
            task.title
        );
    }
}

fn owner_initials(store: &Store, task: &Task) -> String {
    if task.assigned_members.is_empty() {
        return "-".to_string();
    }
    task.assigned_members
        .iter()
        .map(|id| match store.member(id) {
            Some(member) => member.initials.clone(),
            None => "?".to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Print full details for one task.
pub fn cmd_view(store: &Store, config: &TodoConfig, reference: String) {
    let id = resolve_task_or_exit(store, &reference);
    let Some(task) = store.get(&id) else {
        return;
    };
    let today = Local::now().date_naive();

    println!("{}", task.title);
    println!("  id:        {}", task.id);
    if !task.description.is_empty() {
        println!("  desc:      {}", task.description);
    }
    println!(
        "  priority:  {}   category: {}   status: {}",
        paint(
            config.priority_color(task.priority),
            format_priority(task.priority),
        ),
        paint(
            config.category_color(task.category),
            format_category(task.category),
        ),
        paint(config.status_color(task.status), format_status(task.status))
    );
    let overdue = if task.is_overdue(today) { "  OVERDUE" } else { "" };
    println!(
        "  due:       {} ({}){overdue}",
        task.due,
        format_due_relative(task.due, today)
    );
    println!("  created:   {}", task.created);
    println!(
        "  hours:     {} estimated, {} actual",
        task.estimated_hours, task.actual_hours
    );
    if !task.sub_tasks.is_empty() {
        println!("  subtasks:");
        for sub in &task.sub_tasks {
            let mark = if sub.is_completed { "x" } else { " " };
            println!("    [{mark}] {}  ({})", sub.title, sub.id);
        }
    }
    if !task.assigned_members.is_empty() {
        println!("  assigned:");
        for member_id in &task.assigned_members {
            match store.member(member_id) {
                Some(m) => println!("    {} ({})", m.name, m.role),
                None => println!("    {member_id}"),
            }
        }
    }
    if !task.asset_guids.is_empty() {
        println!("  assets:");
        for guid in &task.asset_guids {
            println!("    {guid}");
        }
    }
}

/// Update fields on a task.
#[allow(clippy::too_many_arguments)]
pub fn cmd_edit(
    store: &mut Store,
    dir: &Path,
    reference: String,
    title: Option<String>,
    desc: Option<String>,
    due: Option<String>,
    priority: Option<Priority>,
    category: Option<Category>,
    status: Option<Status>,
    estimate: Option<u32>,
    actual: Option<u32>,
) {
    let id = resolve_task_or_exit(store, &reference);
    if let Some(ref t) = title {
        if t.trim().is_empty() {
            eprintln!("Task title cannot be empty.");
            std::process::exit(1);
        }
    }
    let patch = TaskPatch {
        title,
        description: desc,
        due: due.as_deref().map(parse_due_or_exit),
        priority,
        category,
        status,
        estimated_hours: estimate,
        actual_hours: actual,
    };
    store.edit_task(&id, patch);
    persist(store, dir);
    println!("Updated task {id}");
}

/// Shortcut: set a task's status.
pub fn cmd_set_status(store: &mut Store, dir: &Path, reference: String, status: Status) {
    let id = resolve_task_or_exit(store, &reference);
    store.edit_task(
        &id,
        TaskPatch {
            status: Some(status),
            ..TaskPatch::default()
        },
    );
    persist(store, dir);
    println!("Task {id} is now {}", format_status(status));
}

pub fn cmd_duplicate(store: &mut Store, dir: &Path, reference: String) {
    let id = resolve_task_or_exit(store, &reference);
    match store.duplicate_task(&id) {
        Some(copy_id) => {
            persist(store, dir);
            println!("Added task {copy_id} (copy of {id})");
        }
        None => eprintln!("No task found for '{reference}'"),
    }
}

pub fn cmd_delete(store: &mut Store, dir: &Path, reference: String) {
    let id = resolve_task_or_exit(store, &reference);
    if store.delete_task(&id) {
        persist(store, dir);
        println!("Deleted task {id}");
    }
}

pub fn cmd_subtask(store: &mut Store, dir: &Path, action: SubtaskAction) {
    match action {
        SubtaskAction::Add { task, title } => {
            if title.trim().is_empty() {
                eprintln!("Subtask title cannot be empty.");
                std::process::exit(1);
            }
            let id = resolve_task_or_exit(store, &task);
            match store.add_subtask(&id, &title) {
                Some(sub_id) => {
                    persist(store, dir);
                    println!("Added subtask {sub_id}");
                }
                None => eprintln!("No task found for '{task}'"),
            }
        }
        SubtaskAction::Done { task, subtask } => {
            let id = resolve_task_or_exit(store, &task);
            if store.set_subtask_completed(&id, &subtask, true) {
                persist(store, dir);
                println!("Subtask {subtask} completed");
            } else {
                eprintln!("No subtask {subtask} on task {id}");
            }
        }
        SubtaskAction::Undo { task, subtask } => {
            let id = resolve_task_or_exit(store, &task);
            if store.set_subtask_completed(&id, &subtask, false) {
                persist(store, dir);
                println!("Subtask {subtask} reopened");
            } else {
                eprintln!("No subtask {subtask} on task {id}");
            }
        }
        SubtaskAction::Rm { task, subtask } => {
            let id = resolve_task_or_exit(store, &task);
            if store.remove_subtask(&id, &subtask) {
                persist(store, dir);
                println!("Removed subtask {subtask}");
            } else {
                eprintln!("No subtask {subtask} on task {id}");
            }
        }
    }
}

pub fn cmd_assign(store: &mut Store, dir: &Path, task: String, member: String) {
    let task_id = resolve_task_or_exit(store, &task);
    let member_id = resolve_member_or_exit(store, &member);
    if let Some(m) = store.member(&member_id) {
        if !m.is_active {
            eprintln!("Member '{}' is inactive and cannot be assigned.", m.name);
            std::process::exit(1);
        }
    }
    store.assign_member(&task_id, &member_id);
    persist(store, dir);
    println!("Assigned {member_id} to task {task_id}");
}

pub fn cmd_unassign(store: &mut Store, dir: &Path, task: String, member: String) {
    let task_id = resolve_task_or_exit(store, &task);
    let member_id = resolve_member_or_exit(store, &member);
    store.unassign_member(&task_id, &member_id);
    persist(store, dir);
    println!("Unassigned {member_id} from task {task_id}");
}

pub fn cmd_asset(store: &mut Store, dir: &Path, action: AssetAction) {
    match action {
        AssetAction::Add { task, guid } => {
            let id = resolve_task_or_exit(store, &task);
            store.add_asset_ref(&id, &guid);
            persist(store, dir);
            println!("Linked {guid} to task {id}");
        }
        AssetAction::Rm { task, guid } => {
            let id = resolve_task_or_exit(store, &task);
            store.remove_asset_ref(&id, &guid);
            persist(store, dir);
            println!("Unlinked {guid} from task {id}");
        }
    }
}

pub fn cmd_member(store: &mut Store, dir: &Path, action: MemberAction) {
    match action {
        MemberAction::Add { name, role } => {
            if name.trim().is_empty() {
                eprintln!("Member name cannot be empty.");
                std::process::exit(1);
            }
            let id = store.add_member(&name, &role);
            persist(store, dir);
            println!("Added member {id}");
        }
        MemberAction::List { all } => {
            let members: Vec<&TeamMember> = store
                .members
                .iter()
                .filter(|m| all || m.is_active)
                .collect();
            if members.is_empty() {
                println!("No team members.");
                return;
            }
            println!("{:<4} {:<20} {:<14} {:<9} {}", "Init", "Name", "Role", "Color", "Id");
            for m in members {
                let name = if m.is_active {
                    m.name.clone()
                } else {
                    format!("{} (inactive)", m.name)
                };
                println!("{:<4} {:<20} {:<14} {:<9} {}", m.initials, name, m.role, m.color, m.id);
            }
        }
        MemberAction::Deactivate { member } => {
            let id = resolve_member_or_exit(store, &member);
            store.deactivate_member(&id);
            persist(store, dir);
            println!("Deactivated member {id}");
        }
        MemberAction::Rm { member } => {
            let id = resolve_member_or_exit(store, &member);
            if store.delete_member(&id) {
                persist(store, dir);
                println!("Deleted member {id} and cleared their assignments");
            }
        }
    }
}

/// Render tasks as CSV: one row per task, dates as YYYY-MM-DD, free-text
/// fields quoted when they contain commas, quotes or newlines.
pub fn tasks_to_csv(tasks: &[Task]) -> String {
    let mut csv = String::new();
    csv.push_str(
        "Title,Description,Priority,Category,Status,Due Date,Created Date,Estimated Hours,Actual Hours\n",
    );
    for task in tasks {
        let escape_csv = |s: &str| {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                format!("\"{}\"", s.replace('"', "\\\""))
            } else {
                s.to_string()
            }
        };
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            escape_csv(&task.title),
            escape_csv(&task.description),
            format_priority(task.priority),
            format_category(task.category),
            format_status(task.status),
            task.due.format("%Y-%m-%d"),
            task.created.format("%Y-%m-%d"),
            task.estimated_hours,
            task.actual_hours
        ));
    }
    csv
}

pub fn cmd_export(store: &Store, output: Option<String>) {
    let output_path = output.unwrap_or_else(|| "todo_export.csv".to_string());
    let csv = tasks_to_csv(&store.tasks);
    match std::fs::write(&output_path, csv) {
        Ok(_) => println!("Exported {} task(s) to {}", store.tasks.len(), output_path),
        Err(e) => {
            eprintln!("Failed to write CSV file: {e}");
            std::process::exit(1);
        }
    }
}

/// Counts for the stats line: (total, completed, in progress, overdue).
pub fn count_stats(tasks: &[Task], today: NaiveDate) -> (usize, usize, usize, usize) {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.status == Status::Completed).count();
    let in_progress = tasks.iter().filter(|t| t.status == Status::InProgress).count();
    let overdue = tasks.iter().filter(|t| t.is_overdue(today)).count();
    (total, completed, in_progress, overdue)
}

pub fn cmd_stats(store: &Store) {
    let today = Local::now().date_naive();
    let (total, completed, in_progress, overdue) = count_stats(&store.tasks, today);
    println!("Total: {total}  Completed: {completed}  In Progress: {in_progress}  Overdue: {overdue}");
}

pub fn cmd_clear_completed(store: &mut Store, dir: &Path) {
    let removed = store.clear_completed();
    if removed == 0 {
        println!("There are no completed tasks to clear.");
        return;
    }
    persist(store, dir);
    println!("Deleted {removed} completed task(s)");
}

pub fn cmd_reset(store: &mut Store, dir: &Path, force: bool) {
    if !force {
        eprintln!("This permanently deletes ALL tasks. Re-run with --force to confirm.");
        std::process::exit(1);
    }
    let removed = store.tasks.len();
    store.tasks.clear();
    persist(store, dir);
    println!("Deleted {removed} task(s)");
}

pub fn cmd_config(config: &TodoConfig) {
    println!("{}", serde_json::to_string_pretty(config).unwrap());
}

pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "todo", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(title: &str, description: &str) -> Task {
        Task {
            id: "t".into(),
            title: title.into(),
            description: description.into(),
            due: date(2024, 1, 10),
            created: date(2024, 1, 3),
            priority: Priority::High,
            category: Category::Programming,
            status: Status::NotStarted,
            estimated_hours: 8,
            actual_hours: 2,
            sub_tasks: Vec::new(),
            assigned_members: Vec::new(),
            asset_guids: Vec::new(),
        }
    }

    #[test]
    fn csv_header_and_row_format() {
        let csv = tasks_to_csv(&[task("Fix bug", "simple")]);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Title,Description,Priority,Category,Status,Due Date,Created Date,Estimated Hours,Actual Hours")
        );
        assert_eq!(
            lines.next(),
            Some("Fix bug,simple,High,Programming,NotStarted,2024-01-10,2024-01-03,8,2")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn csv_quotes_fields_with_commas_and_quotes() {
        let csv = tasks_to_csv(&[task("Fix, then ship", "say \"done\"")]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "\"Fix, then ship\",\"say \\\"done\\\"\",High,Programming,NotStarted,2024-01-10,2024-01-03,8,2"
        );
    }

    #[test]
    fn hex_colors_parse_or_fall_back_to_plain() {
        assert_eq!(parse_hex_color("#3399FF"), Some((0x33, 0x99, 0xFF)));
        assert_eq!(parse_hex_color("3399FF"), None);
        assert_eq!(parse_hex_color("#33F"), None);
        assert_eq!(paint("bogus", "text"), "text");
    }

    #[test]
    fn stats_counts_overdue_excluding_completed() {
        let today = date(2024, 2, 1);
        let mut done = task("done", "");
        done.status = Status::Completed;
        let mut late = task("late", "");
        late.status = Status::InProgress;
        let mut future = task("future", "");
        future.due = date(2024, 3, 1);

        let tasks = vec![done, late, future];
        let (total, completed, in_progress, overdue) = count_stats(&tasks, today);
        assert_eq!(total, 3);
        assert_eq!(completed, 1);
        assert_eq!(in_progress, 1);
        assert_eq!(overdue, 1);
    }
}
