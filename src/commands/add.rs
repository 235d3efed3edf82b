use super::{handle_error, Context};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::task::NewTask;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task text
    #[arg(required = true)]
    text: String,
    /// Due date (YYYY-MM-DD)
    #[arg(short, long)]
    due: Option<String>,
    /// Priority: High, Medium or Low
    #[arg(short, long)]
    priority: Option<String>,
    /// Category
    #[arg(short, long)]
    category: Option<String>,
    /// Time required; makes this a timed task
    #[arg(short, long)]
    time: Option<String>,
}

impl From<AddArgs> for NewTask {
    fn from(args: AddArgs) -> Self {
        NewTask {
            description: args.text,
            due_date: args.due,
            priority: args.priority,
            category: args.category,
            time_required: args.time,
        }
    }
}

pub fn cmd(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    if run(&mut store, args.into())? {
        ctx.persist(&store)?;
    }
    Ok(())
}

/// Returns whether the store changed.
pub fn run(store: &mut TaskStore, new: NewTask) -> Result<bool> {
    match store.add(new) {
        Ok(task) => {
            msg_success!(Message::TaskAdded(task.description.clone()));
            Ok(true)
        }
        Err(e) => handle_error(e).map(|_| false),
    }
}
