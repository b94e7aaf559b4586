//! # todo - Team Task Tracker CLI
//!
//! A command-line task tracker for small teams: tasks with priorities,
//! categories, statuses and due dates, subtask checklists, member
//! assignments, and opaque links to external project assets.
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a task
//! todo add "Fix collision bug" --priority high --category programming --due "in 3d"
//!
//! # List the current view (priority first, then earliest due date)
//! todo list
//!
//! # Work through it
//! todo start "Fix collision bug"
//! todo subtask add "Fix collision bug" "Write regression test"
//! todo complete "Fix collision bug"
//!
//! # Team
//! todo member add "Ada Lovelace" --role "Engineer"
//! todo assign "Fix collision bug" "Ada Lovelace"
//!
//! # Reporting
//! todo stats
//! todo export --output sprint.csv
//! ```
//!
//! Data is stored locally in `~/.todo/` as two JSON blobs (tasks and team)
//! plus an optional `config.json` with new-task defaults and display
//! colors. Every mutating command persists before it returns, so a crash
//! never loses an acknowledged change. Unreadable data never aborts a
//! session: the affected collection starts empty and a warning is logged.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod config;
pub mod fields;
pub mod member;
pub mod query;
pub mod store;
pub mod task;

use cli::Cli;
use cmd::*;
use config::TodoConfig;
use store::Store;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Completions need no storage at all.
    if let Commands::Completions { shell } = cli.command {
        cmd_completions(shell);
        return;
    }

    let dir = cli.dir.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".todo")
    });
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Failed to create data directory {}: {}", dir.display(), e);
        std::process::exit(1);
    }

    let config = TodoConfig::load(&dir);
    let mut store = Store::load(&dir);

    match cli.command {
        Commands::Completions { .. } => unreachable!("completions handled above"),

        Commands::Add {
            title, desc, due, priority, category, status, estimate, assign, assets,
        } => cmd_add(
            &mut store, &dir, &config, title, desc, due, priority, category, status,
            estimate, assign, assets,
        ),

        Commands::List { filter } => cmd_list(&store, &config, filter),

        Commands::View { task } => cmd_view(&store, &config, task),

        Commands::Edit {
            task, title, desc, due, priority, category, status, estimate, actual,
        } => cmd_edit(
            &mut store, &dir, task, title, desc, due, priority, category, status,
            estimate, actual,
        ),

        Commands::Start { task } => {
            cmd_set_status(&mut store, &dir, task, fields::Status::InProgress)
        }

        Commands::Complete { task } => {
            cmd_set_status(&mut store, &dir, task, fields::Status::Completed)
        }

        Commands::Duplicate { task } => cmd_duplicate(&mut store, &dir, task),

        Commands::Delete { task } => cmd_delete(&mut store, &dir, task),

        Commands::Subtask { action } => cmd_subtask(&mut store, &dir, action),

        Commands::Assign { task, member } => cmd_assign(&mut store, &dir, task, member),

        Commands::Unassign { task, member } => cmd_unassign(&mut store, &dir, task, member),

        Commands::Asset { action } => cmd_asset(&mut store, &dir, action),

        Commands::Member { action } => cmd_member(&mut store, &dir, action),

        Commands::Export { output } => cmd_export(&store, output),

        Commands::Stats => cmd_stats(&store),

        Commands::ClearCompleted => cmd_clear_completed(&mut store, &dir),

        Commands::Reset { force } => cmd_reset(&mut store, &dir, force),

        Commands::Config => cmd_config(&config),
    }
}
