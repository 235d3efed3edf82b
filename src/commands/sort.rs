use super::{handle_error, list, Context};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::msg_success;
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Undated tasks first, then by date
    DueDate,
    /// High, Medium, Low, No priority
    Priority,
}

#[derive(Debug, Args)]
pub struct SortArgs {
    #[arg(value_enum)]
    key: SortKey,
}

pub fn cmd(args: SortArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    if run(&mut store, args.key)? {
        ctx.persist(&store)?;
        list::run(&store, false);
    }
    Ok(())
}

pub fn run(store: &mut TaskStore, key: SortKey) -> Result<bool> {
    match key {
        SortKey::DueDate => {
            store.sort_by_due_date();
            msg_success!(Message::TasksSortedByDueDate);
            Ok(true)
        }
        SortKey::Priority => match store.sort_by_priority() {
            Ok(()) => {
                msg_success!(Message::TasksSortedByPriority);
                Ok(true)
            }
            Err(e) => handle_error(e).map(|_| false),
        },
    }
}
