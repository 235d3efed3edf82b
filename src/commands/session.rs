//! Interactive session.
//!
//! The terminal counterpart of the task manager window: one menu entry per
//! button, an in-memory list that lives as long as the session, and explicit
//! save/load against the configured tasks file. Nothing is written unless the
//! user picks "Save tasks".

use super::{add, clear, complete, delete, edit, list, prompt, search, sort, Context};
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_error, msg_print, msg_success, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Delete,
    Complete,
    Edit,
    Search,
    SortByDueDate,
    SortByPriority,
    ClearAll,
    Save,
    Load,
    Show,
    Quit,
}

impl Action {
    const ALL: [Action; 12] = [
        Action::Add,
        Action::Delete,
        Action::Complete,
        Action::Edit,
        Action::Search,
        Action::SortByDueDate,
        Action::SortByPriority,
        Action::ClearAll,
        Action::Save,
        Action::Load,
        Action::Show,
        Action::Quit,
    ];
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Action::Add => "Add task",
            Action::Delete => "Delete task",
            Action::Complete => "Complete task",
            Action::Edit => "Edit task",
            Action::Search => "Search tasks",
            Action::SortByDueDate => "Sort by due date",
            Action::SortByPriority => "Sort by priority",
            Action::ClearAll => "Clear all tasks",
            Action::Save => "Save tasks",
            Action::Load => "Load tasks",
            Action::Show => "Show tasks",
            Action::Quit => "Quit",
        };
        write!(f, "{}", label)
    }
}

pub fn cmd(ctx: &Context) -> Result<()> {
    let mut store = TaskStore::new();
    msg_print!(Message::SessionHeader(ctx.tasks_file.display().to_string()), true);

    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectAction.to_string())
            .items(&Action::ALL)
            .default(0)
            .interact_opt()?;

        let action = match selection {
            Some(i) => Action::ALL[i],
            None => Action::Quit,
        };
        if action == Action::Quit {
            break;
        }

        match perform(action, &mut store, ctx) {
            Ok(true) => list::run(&store, false),
            Ok(false) => {}
            // A failed action never ends the session.
            Err(e) => msg_error!(e),
        }
    }

    msg_print!(Message::SessionEnded);
    Ok(())
}

/// Runs one menu action. Returns whether the listing should be refreshed.
fn perform(action: Action, store: &mut TaskStore, ctx: &Context) -> Result<bool> {
    match action {
        Action::Add => add::run(store, prompt::new_task()?),
        Action::Delete => {
            let index = prompt::select_task(store)?;
            delete::run(store, index)
        }
        Action::Complete => {
            let index = prompt::select_task(store)?;
            complete::run(store, index)
        }
        Action::Edit => {
            let index = prompt::select_task(store)?;
            let request = match index.and_then(|i| store.get(i)) {
                Some(task) => prompt::edit_request(task)?,
                None => Default::default(),
            };
            edit::run(store, index, request)
        }
        Action::Search => {
            search::run(store, &prompt::keyword()?)?;
            Ok(false)
        }
        Action::SortByDueDate => sort::run(store, sort::SortKey::DueDate),
        Action::SortByPriority => sort::run(store, sort::SortKey::Priority),
        Action::ClearAll => clear::run(store, ctx.config.confirm_clear),
        Action::Save => save(store, ctx),
        Action::Load => load(store, ctx),
        Action::Show => {
            list::run(store, false);
            Ok(false)
        }
        Action::Quit => Ok(false),
    }
}

fn save(store: &TaskStore, ctx: &Context) -> Result<bool> {
    let path = ctx.tasks_file.display().to_string();
    match store.save(&ctx.tasks_file) {
        Ok(()) => msg_success!(Message::TasksSaved(path)),
        Err(e) => msg_error!(Message::SaveFailed(e.to_string())),
    }
    Ok(false)
}

fn load(store: &mut TaskStore, ctx: &Context) -> Result<bool> {
    let path = ctx.tasks_file.display().to_string();
    match store.load(&ctx.tasks_file) {
        Ok(count) => {
            msg_success!(Message::TasksLoaded(count, path));
            Ok(true)
        }
        Err(TaskError::NotFound(_)) => {
            msg_warning!(Message::NoSavedTasks(path));
            Ok(false)
        }
        Err(e) => {
            msg_error!(Message::LoadFailed(e.to_string()));
            Ok(false)
        }
    }
}
