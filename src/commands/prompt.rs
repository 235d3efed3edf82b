//! Dialoguer prompts shared by the one-shot commands and the session.
//!
//! A blank answer to an optional prompt means "leave it": for a new task the
//! field falls back to its sentinel, for an edit the current value is kept.

use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::task::{EditRequest, NewTask, Task};
use crate::libs::view::View;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

fn ask(prompt: Message, initial: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt.to_string()).allow_empty(true);
    if let Some(initial) = initial {
        input = input.with_initial_text(initial);
    }
    Ok(input.interact_text()?)
}

fn optional(answer: String) -> Option<String> {
    (!answer.is_empty()).then_some(answer)
}

/// Asks for the task text and, unless it is blank, the optional fields.
pub fn new_task() -> Result<NewTask> {
    let description = ask(Message::PromptTaskText, None)?;
    if description.is_empty() {
        return Ok(NewTask::default());
    }

    Ok(NewTask {
        description,
        due_date: optional(ask(Message::PromptDueDate, None)?),
        priority: optional(ask(Message::PromptPriority, None)?),
        category: optional(ask(Message::PromptCategory, None)?),
        time_required: optional(ask(Message::PromptTimeRequired, None)?),
    })
}

/// Prompts pre-filled with the current values. A cleared task text is passed
/// through so the store rejects the whole edit.
pub fn edit_request(task: &Task) -> Result<EditRequest> {
    let description = ask(Message::PromptEditTaskText, Some(&task.description))?;
    if description.is_empty() {
        return Ok(EditRequest {
            description: Some(description),
            ..Default::default()
        });
    }

    let mut request = EditRequest {
        description: Some(description),
        due_date: optional(ask(Message::PromptDueDate, Some(&task.due_date))?),
        priority: optional(ask(Message::PromptPriority, Some(&task.priority))?),
        category: optional(ask(Message::PromptCategory, Some(&task.category))?),
        time_required: None,
    };
    if let Some(time_required) = task.time_required() {
        request.time_required = optional(ask(Message::PromptTimeRequired, Some(time_required))?);
    }

    Ok(request)
}

pub fn keyword() -> Result<String> {
    ask(Message::PromptSearchKeyword, None)
}

/// Lets the user pick one task. `None` when the list is empty or the prompt
/// was cancelled.
pub fn select_task(store: &TaskStore) -> Result<Option<usize>> {
    if store.is_empty() {
        return Ok(None);
    }

    let items = View::lines(store.iter());
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&items)
        .default(0)
        .interact_opt()?;
    Ok(selection)
}

pub fn confirm(prompt: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}
