use std::time::Duration;

use clap::{Parser, Subcommand};
use tasklist_db::DbConfig;
use tasklist_service::DEFAULT_REMOTE_URL;

#[derive(Debug, Parser)]
#[command(name = "tasklist", about = "Local to-do list seeded from a remote feed")]
pub struct CliConfig {
    /// Path to the SQLite task store
    #[arg(long, env = "TASKLIST_DB")]
    pub db: Option<String>,

    /// URL of the seed feed, fetched only while the store is empty
    #[arg(long, env = "TASKLIST_REMOTE_URL", default_value = DEFAULT_REMOTE_URL)]
    pub remote_url: String,

    /// HTTP timeout for the seed fetch (seconds)
    #[arg(long, env = "TASKLIST_TIMEOUT", default_value = "30")]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show every task
    List,
    /// Show tasks whose title or note contains the query
    Search { query: String },
    /// Create a task
    Add {
        title: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// Change a task's title and/or note
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Flip a task between done and not done
    Toggle { id: i64 },
    /// Remove a task
    Delete { id: i64 },
}

impl CliConfig {
    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            sqlite_path: self.db.clone(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The requested command, `list` when none was given.
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::List)
    }
}
