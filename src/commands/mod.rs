pub mod add;
pub mod clear;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod prompt;
pub mod search;
pub mod session;
pub mod sort;

use crate::libs::config::Config;
use crate::libs::error::{Severity, TaskError};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Start an interactive session (default)")]
    Session,
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Mark a task as completed")]
    Complete(complete::CompleteArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Search tasks by text", arg_required_else_help = true)]
    Search(search::SearchArgs),
    #[command(about = "Sort tasks by due date or priority", arg_required_else_help = true)]
    Sort(sort::SortArgs),
    #[command(about = "Delete all tasks")]
    Clear(clear::ClearArgs),
    #[command(about = "Append tasks from another file", arg_required_else_help = true)]
    Import(import::ImportArgs),
    #[command(about = "Write tasks to another file", arg_required_else_help = true)]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tasks file (overrides TASKDESK_FILE and the configured path)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        // `init` must stay usable when the config file is broken.
        if let Some(Commands::Init) = cli.command {
            return init::cmd();
        }
        cli.execute(Config::read_or_default())
    }

    /// Runs the parsed command against `config`.
    pub fn execute(self, config: Config) -> Result<()> {
        let ctx = Context::new(config, self.file);
        msg_debug!(Message::UsingTasksFile(ctx.tasks_file.display().to_string()));

        match self.command {
            None | Some(Commands::Session) => session::cmd(&ctx),
            Some(Commands::Init) => init::cmd(),
            Some(Commands::Add(args)) => add::cmd(args, &ctx),
            Some(Commands::List(args)) => list::cmd(args, &ctx),
            Some(Commands::Delete(args)) => delete::cmd(args, &ctx),
            Some(Commands::Complete(args)) => complete::cmd(args, &ctx),
            Some(Commands::Edit(args)) => edit::cmd(args, &ctx),
            Some(Commands::Search(args)) => search::cmd(args, &ctx),
            Some(Commands::Sort(args)) => sort::cmd(args, &ctx),
            Some(Commands::Clear(args)) => clear::cmd(args, &ctx),
            Some(Commands::Import(args)) => import::cmd(args, &ctx),
            Some(Commands::Export(args)) => export::cmd(args, &ctx),
        }
    }
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub tasks_file: PathBuf,
}

impl Context {
    pub fn new(config: Config, file: Option<PathBuf>) -> Self {
        let tasks_file = config.tasks_file(file);
        Self { config, tasks_file }
    }

    /// Store holding the tasks file contents; empty when the file is missing.
    pub fn open_store(&self) -> Result<TaskStore> {
        Ok(TaskStore::open(&self.tasks_file)?)
    }

    pub fn persist(&self, store: &TaskStore) -> Result<()> {
        store.save(&self.tasks_file)?;
        Ok(())
    }
}

/// Shows validation and not-found errors as warnings. Anything else is
/// returned to the caller.
pub fn handle_error(error: TaskError) -> Result<()> {
    match error.severity() {
        Severity::Validation | Severity::NotFound => {
            msg_warning!(Message::TaskRejected(error.to_string()));
            Ok(())
        }
        Severity::Fatal => Err(error.into()),
    }
}

/// Converts a 1-based task number into a store index.
pub fn to_index(number: Option<usize>) -> Option<usize> {
    number.and_then(|n| n.checked_sub(1))
}

/// Description of the task at `index`, for messages.
pub(crate) fn describe(store: &TaskStore, index: Option<usize>) -> String {
    index.and_then(|i| store.get(i)).map(|task| task.description.clone()).unwrap_or_default()
}
