use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tasklist_cli::config::{CliConfig, Command};
use tasklist_cli::render;
use tasklist_core::task::{NewTask, TaskEdit};
use tasklist_service::{BlockingTaskList, RemoteClient, TaskList};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::parse();

    let db = tasklist_db::open_database(&config.db_config()).context("open task store")?;
    let remote = RemoteClient::with_timeout(&config.remote_url, config.timeout())
        .context("build HTTP client")?;
    info!("seed source: {}", remote.url());

    let list = BlockingTaskList::new(TaskList::new(Arc::new(db), Arc::new(remote)))
        .context("create tokio runtime")?;

    // First run seeds the store; later runs just read it.
    let tasks = list.load_initial().context("load tasks")?;

    let shown = match config.command() {
        Command::List => tasks,
        Command::Search { query } => list.search(query)?,
        Command::Add { title, note } => list.add(NewTask {
            title: title.clone(),
            note: note.clone(),
        })?,
        Command::Edit { id, title, note } => list.edit(
            *id,
            TaskEdit {
                title: title.clone(),
                note: note.clone(),
            },
        )?,
        Command::Toggle { id } => list.toggle_completed(*id)?,
        Command::Delete { id } => list.delete(*id)?,
    };

    println!("{}", render::task_lines(&shown));
    Ok(())
}
