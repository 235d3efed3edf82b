//! Core library modules for taskdesk.
//!
//! - **Task Model**: records, sentinels, edit requests and rendering ([`task`])
//! - **Task Store**: ordered collection and JSON persistence ([`store`])
//! - **Errors**: the [`error::TaskError`] taxonomy
//! - **Infrastructure**: configuration, data directory, messages, console view
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::libs::store::TaskStore;
//! use taskdesk::libs::task::NewTask;
//!
//! let mut store = TaskStore::open("tasks.json")?;
//! store.add(NewTask::new("Buy milk").priority("High"))?;
//! store.sort_by_priority()?;
//! store.save("tasks.json")?;
//! # Ok::<(), taskdesk::libs::error::TaskError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod store;
pub mod task;
pub mod view;
