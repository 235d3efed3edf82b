use super::{handle_error, Context};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in task descriptions (case-insensitive)
    keyword: String,
}

pub fn cmd(args: SearchArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    run(&store, &args.keyword)
}

/// Prints the matching tasks. The store is left as it is.
pub fn run(store: &TaskStore, keyword: &str) -> Result<()> {
    match store.search(keyword) {
        Ok(matches) if matches.is_empty() => {
            msg_info!(Message::NoSearchResults(keyword.to_string()));
            Ok(())
        }
        Ok(matches) => {
            msg_print!(Message::SearchResultsHeader(keyword.to_string(), matches.len()));
            View::matches(&matches);
            Ok(())
        }
        Err(e) => handle_error(e),
    }
}
