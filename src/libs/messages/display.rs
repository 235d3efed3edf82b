//! Display implementation for taskdesk messages.
//!
//! All user-facing text lives here so the wording of warnings, prompts and
//! confirmations stays consistent between the one-shot commands and the
//! interactive session. Warning texts follow the wording users of the desktop
//! form already know ("Task cannot be empty!", "No task selected!").

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(description) => format!("Task '{}' added.", description),
            Message::TaskDeleted(description) => format!("Task '{}' deleted.", description),
            Message::TaskCompleted(description) => format!("Task '{}' marked as completed.", description),
            Message::TaskUpdated(description) => format!("Task '{}' updated.", description),
            Message::TaskAlreadyCompleted(description) => format!("Task '{}' was already completed.", description),
            Message::TaskNotTimed(description) => format!("Task '{}' has no time requirement; --time ignored.", description),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::TaskRejected(reason) => reason.clone(),

            // === LISTING MESSAGES ===
            Message::TasksHeader(count) => format!("Tasks ({}):", count),
            Message::SearchResultsHeader(keyword, count) => format!("Tasks matching '{}' ({}):", keyword, count),
            Message::NoSearchResults(keyword) => format!("No tasks match '{}'.", keyword),
            Message::NoTasks => "No tasks yet. Add one with `taskdesk add <TEXT>`.".to_string(),

            // === SORT MESSAGES ===
            Message::TasksSortedByDueDate => "Tasks sorted by due date.".to_string(),
            Message::TasksSortedByPriority => "Tasks sorted by priority.".to_string(),

            // === CLEAR MESSAGES ===
            Message::ConfirmClearAll(count) => format!("Delete ALL {} tasks? This cannot be undone.", count),
            Message::TasksCleared(count) => format!("Cleared {} task(s).", count),

            // === PERSISTENCE MESSAGES ===
            Message::TasksSaved(path) => format!("Tasks saved successfully to {}!", path),
            Message::TasksLoaded(count, path) => format!("Tasks loaded successfully: {} task(s) from {}!", count, path),
            Message::TasksImported(count, path) => format!("Imported {} task(s) from {}.", count, path),
            Message::TasksExported(count, path) => format!("Exported {} task(s) to {}.", count, path),
            Message::NoSavedTasks(path) => format!("No saved tasks found! ({})", path),
            Message::SaveFailed(error) => format!("Failed to save tasks: {}", error),
            Message::LoadFailed(error) => format!("Failed to load tasks: {}", error),
            Message::UsingTasksFile(path) => format!("Using tasks file {}", path),

            // === SESSION MESSAGES ===
            Message::SessionHeader(path) => format!("Task Manager (save/load: {})", path),
            Message::SessionEnded => "Bye!".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully.".to_string(),
            Message::ConfigInvalid(error) => format!("Ignoring unreadable configuration ({}); using defaults. Run `taskdesk init` to fix it.", error),
            Message::ConfigModuleStorage => "Storage".to_string(),
            Message::ConfigModuleBehaviour => "Behaviour".to_string(),

            // === PROMPTS ===
            Message::PromptTaskText => "Enter a task".to_string(),
            Message::PromptEditTaskText => "Edit task".to_string(),
            Message::PromptDueDate => "Enter due date (YYYY-MM-DD) or leave blank".to_string(),
            Message::PromptPriority => "Enter priority (High/Medium/Low) or leave blank".to_string(),
            Message::PromptCategory => "Enter category or leave blank".to_string(),
            Message::PromptTimeRequired => "Enter time required or leave blank".to_string(),
            Message::PromptSearchKeyword => "Search tasks".to_string(),
            Message::PromptSelectTask => "Select a task (Esc to cancel)".to_string(),
            Message::PromptSelectAction => "What would you like to do?".to_string(),
            Message::PromptTasksFile => "Tasks file used by save/load".to_string(),
            Message::PromptConfirmClear => "Ask for confirmation before clearing all tasks?".to_string(),
            Message::PromptSelectModules => "Select settings to configure".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled.".to_string(),
        };
        write!(f, "{}", text)
    }
}
