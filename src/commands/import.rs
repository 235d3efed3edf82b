use super::{handle_error, Context};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file in the taskdesk format
    path: PathBuf,
}

/// Appends the tasks of another file to the tasks file. Importing the same
/// file twice adds its tasks twice.
pub fn cmd(args: ImportArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    match store.load(&args.path) {
        Ok(count) => {
            ctx.persist(&store)?;
            msg_success!(Message::TasksImported(count, args.path.display().to_string()));
            Ok(())
        }
        Err(e) => handle_error(e),
    }
}
