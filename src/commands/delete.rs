use super::{handle_error, prompt, to_index, Context};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task number as shown by `list`; asks when omitted
    index: Option<usize>,
}

pub fn cmd(args: DeleteArgs, ctx: &Context) -> Result<()> {
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
    match store.delete(index) {
        Ok(task) => {
            msg_success!(Message::TaskDeleted(task.description));
            Ok(true)
        }
        Err(e) => handle_error(e).map(|_| false),
    }
}
