use super::{prompt, Context};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ClearArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    if run(&mut store, ctx.config.confirm_clear && !args.yes)? {
        ctx.persist(&store)?;
    }
    Ok(())
}

pub fn run(store: &mut TaskStore, confirm: bool) -> Result<bool> {
    if store.is_empty() {
        msg_info!(Message::NoTasks);
        return Ok(false);
    }

    let count = store.len();
    if confirm && !prompt::confirm(Message::ConfirmClearAll(count))? {
        msg_info!(Message::OperationCancelled);
        return Ok(false);
    }

    store.clear();
    msg_success!(Message::TasksCleared(count));
    Ok(true)
}
