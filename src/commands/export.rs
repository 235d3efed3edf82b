use super::Context;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Destination file; overwritten if it exists
    path: PathBuf,
}

pub fn cmd(args: ExportArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    store.save(&args.path)?;
    msg_success!(Message::TasksExported(store.len(), args.path.display().to_string()));
    Ok(())
}
