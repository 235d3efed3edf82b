use super::{describe, handle_error, prompt, to_index, Context};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task number as shown by `list`; asks when omitted
    index: Option<usize>,
}

pub fn cmd(args: CompleteArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let index = match args.index {
        Some(number) => to_index(Some(number)),
        None => prompt::select_task(&store)?,
    };

    if run(&mut store, index)? {
        ctx.persist(&store)?;
    }
    Ok(())
}

pub fn run(store: &mut TaskStore, index: Option<usize>) -> Result<bool> {
    let was_completed = index.and_then(|i| store.get(i)).is_some_and(|task| task.completed);

    match store.complete(index) {
        Ok(()) if was_completed => {
            msg_info!(Message::TaskAlreadyCompleted(describe(store, index)));
            Ok(false)
        }
        Ok(()) => {
            msg_success!(Message::TaskCompleted(describe(store, index)));
            Ok(true)
        }
        Err(e) => handle_error(e).map(|_| false),
    }
}
