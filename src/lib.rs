//! # Taskdesk
//!
//! A to-do list manager for the terminal: add, edit, delete, complete,
//! search, sort and persist tasks.
//!
//! ## Features
//!
//! - **Task Store**: ordered in-memory list with stable sorts by due date and priority
//! - **Timed Tasks**: tasks that also carry a time requirement
//! - **JSON Persistence**: save/load to a flat JSON file, load appends
//! - **Interactive Session**: a menu-driven session mirroring the desktop form
//! - **One-shot Commands**: `add`, `list`, `edit`, `sort`, ... for scripting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
