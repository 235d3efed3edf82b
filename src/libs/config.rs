//! Configuration management for taskdesk.
//!
//! Settings live in `config.json` inside the platform data directory resolved
//! by [`DataStorage`]:
//!
//! - **Windows**: `%LOCALAPPDATA%\taskdesk\taskdesk\config.json`
//! - **macOS**: `~/Library/Application Support/taskdesk/taskdesk/config.json`
//! - **Linux**: `~/.local/share/taskdesk/taskdesk/config.json`
//!
//! A missing file is not an error; defaults apply. The tasks file itself
//! defaults to `tasks.json` in the working directory and can be overridden per
//! invocation with `--file` or the `TASKDESK_FILE` environment variable (which
//! may also come from a `.env` file).
//!
//! ```rust,no_run
//! use taskdesk::libs::config::Config;
//!
//! let config = Config::read()?;
//! let path = config.tasks_file(None);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";
pub const TASKS_FILE_ENV: &str = "TASKDESK_FILE";

/// A group of settings offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// File used by save/load and by every one-shot command.
    pub tasks_file: PathBuf,

    /// Ask before `clear` wipes the list.
    pub confirm_clear: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            confirm_clear: true,
        }
    }
}

impl Config {
    /// Reads the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Like [`Config::read`], but an unreadable or malformed file is reported
    /// as a warning and the defaults are used.
    pub fn read_or_default() -> Config {
        Self::read().unwrap_or_else(|e| {
            msg_warning!(Message::ConfigInvalid(e.to_string()));
            Config::default()
        })
    }

    /// Writes the configuration as pretty-printed JSON, replacing any previous file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the tasks file: explicit flag, then `TASKDESK_FILE`, then the
    /// configured value.
    pub fn tasks_file(&self, flag: Option<PathBuf>) -> PathBuf {
        if let Some(path) = flag {
            return path;
        }
        match env::var(TASKS_FILE_ENV) {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => self.tasks_file.clone(),
        }
    }

    /// Runs the interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read_or_default();

        let modules = vec![
            ConfigModule {
                key: "storage".to_string(),
                name: Message::ConfigModuleStorage.to_string(),
            },
            ConfigModule {
                key: "behaviour".to_string(),
                name: Message::ConfigModuleBehaviour.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "storage" => {
                    msg_print!(Message::ConfigModuleStorage);
                    let tasks_file: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptTasksFile.to_string())
                        .default(config.tasks_file.display().to_string())
                        .interact_text()?;
                    config.tasks_file = PathBuf::from(tasks_file);
                }
                "behaviour" => {
                    msg_print!(Message::ConfigModuleBehaviour);
                    config.confirm_clear = Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptConfirmClear.to_string())
                        .default(config.confirm_clear)
                        .interact()?;
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
