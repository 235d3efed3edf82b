use super::Context;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// One line per task, without the table
    #[arg(short, long)]
    plain: bool,
}

pub fn cmd(args: ListArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    run(&store, args.plain);
    Ok(())
}

pub fn run(store: &TaskStore, plain: bool) {
    if store.is_empty() {
        msg_info!(Message::NoTasks);
    } else if plain {
        View::plain(store.tasks());
    } else {
        msg_print!(Message::TasksHeader(store.len()));
        View::tasks(store.tasks());
    }
}
