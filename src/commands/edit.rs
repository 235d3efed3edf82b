use super::{describe, handle_error, prompt, to_index, Context};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::task::EditRequest;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task number as shown by `list`; asks when omitted
    index: Option<usize>,
    /// New task text
    #[arg(long)]
    text: Option<String>,
    /// New due date (YYYY-MM-DD); empty resets it
    #[arg(short, long)]
    due: Option<String>,
    /// New priority; empty resets it
    #[arg(short, long)]
    priority: Option<String>,
    /// New category; empty resets it
    #[arg(short, long)]
    category: Option<String>,
    /// New time required (timed tasks only)
    #[arg(short, long)]
    time: Option<String>,
}

impl EditArgs {
    fn request(&self) -> EditRequest {
        EditRequest {
            description: self.text.clone(),
            due_date: self.due.clone(),
            priority: self.priority.clone(),
            category: self.category.clone(),
            time_required: self.time.clone(),
        }
    }
}

/// Without any field flags the current values are offered for editing one
/// prompt at a time.
pub fn cmd(args: EditArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let index = match args.index {
        Some(number) => to_index(Some(number)),
        None => prompt::select_task(&store)?,
    };

    let mut request = args.request();
    match index.and_then(|i| store.get(i)) {
        Some(task) if request.is_empty() => request = prompt::edit_request(task)?,
        Some(task) if request.time_required.is_some() && !task.is_timed() => {
            msg_warning!(Message::TaskNotTimed(task.description.clone()));
        }
        _ => {}
    }

    if run(&mut store, index, request)? {
        ctx.persist(&store)?;
    }
    Ok(())
}

pub fn run(store: &mut TaskStore, index: Option<usize>, request: EditRequest) -> Result<bool> {
    let before = index.and_then(|i| store.get(i)).cloned();

    match store.edit(index, request) {
        Ok(()) if before.as_ref() == index.and_then(|i| store.get(i)) => {
            msg_info!(Message::NoChangesDetected);
            Ok(false)
        }
        Ok(()) => {
            msg_success!(Message::TaskUpdated(describe(store, index)));
            Ok(true)
        }
        Err(e) => handle_error(e).map(|_| false),
    }
}
