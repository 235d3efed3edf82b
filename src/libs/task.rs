//! Task record model.
//!
//! A [`Task`] carries the fields every record shares plus a [`TaskKind`] tag
//! that tells a plain task from a timed one. Absent fields never stay empty:
//! blank input resolves to the matching sentinel (`"No due date"`,
//! `"No priority"`, `"No category"`, `"No time required"`).
//!
//! [`TaskRecord`] is the flat field map used by the JSON file. The presence of
//! the `time_required` key is what marks a timed task on load.

use super::error::TaskError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

pub const NO_DUE_DATE: &str = "No due date";
pub const NO_PRIORITY: &str = "No priority";
pub const NO_CATEGORY: &str = "No category";
pub const NO_TIME_REQUIRED: &str = "No time required";

/// Priorities in rank order.
pub const PRIORITIES: [&str; 4] = ["High", "Medium", "Low", NO_PRIORITY];

/// Rank used by the priority sort: High=1, Medium=2, Low=3, No priority=4.
pub fn priority_rank(priority: &str) -> Option<u8> {
    PRIORITIES.iter().position(|p| *p == priority).map(|i| i as u8 + 1)
}

fn or_sentinel(value: Option<String>, sentinel: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => sentinel.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Plain,
    Timed { time_required: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub completed: bool,
    pub due_date: String,
    pub priority: String,
    pub category: String,
    pub kind: TaskKind,
}

impl Task {
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn is_timed(&self) -> bool {
        matches!(self.kind, TaskKind::Timed { .. })
    }

    pub fn time_required(&self) -> Option<&str> {
        match &self.kind {
            TaskKind::Plain => None,
            TaskKind::Timed { time_required } => Some(time_required),
        }
    }

    pub fn status(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }

    /// Key used by the due date sort. The sentinel maps to the empty string so
    /// undated tasks come first.
    pub fn due_date_key(&self) -> &str {
        if self.due_date == NO_DUE_DATE {
            ""
        } else {
            &self.due_date
        }
    }

    /// Applies an edit in place. Aborts without touching any field when the
    /// new description is blank.
    pub fn apply(&mut self, edit: EditRequest) -> Result<(), TaskError> {
        if matches!(&edit.description, Some(description) if description.is_empty()) {
            return Err(TaskError::EmptyDescription);
        }

        if let Some(description) = edit.description {
            self.description = description;
        }
        if let Some(due_date) = edit.due_date {
            self.due_date = or_sentinel(Some(due_date), NO_DUE_DATE);
        }
        if let Some(priority) = edit.priority {
            self.priority = or_sentinel(Some(priority), NO_PRIORITY);
        }
        if let Some(category) = edit.category {
            self.category = or_sentinel(Some(category), NO_CATEGORY);
        }
        if let (TaskKind::Timed { time_required }, Some(new_value)) = (&mut self.kind, edit.time_required) {
            *time_required = or_sentinel(Some(new_value), NO_TIME_REQUIRED);
        }

        Ok(())
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] - Due: {} - Priority: {} - Category: {}",
            self.description,
            self.status(),
            self.due_date,
            self.priority,
            self.category
        )?;
        match &self.kind {
            TaskKind::Plain => Ok(()),
            TaskKind::Timed { time_required } => write!(f, " - Time Required: {}", time_required),
        }
    }
}

/// Input for creating a task. Blank or missing optional fields become
/// sentinels; a non-blank `time_required` makes the task timed.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub description: String,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub time_required: Option<String>,
}

impl NewTask {
    pub fn new(description: &str) -> Self {
        NewTask {
            description: description.to_string(),
            ..Default::default()
        }
    }

    pub fn due_date(mut self, due_date: &str) -> Self {
        self.due_date = Some(due_date.to_string());
        self
    }

    pub fn priority(mut self, priority: &str) -> Self {
        self.priority = Some(priority.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn time_required(mut self, time_required: &str) -> Self {
        self.time_required = Some(time_required.to_string());
        self
    }
}

impl TryFrom<NewTask> for Task {
    type Error = TaskError;

    fn try_from(new: NewTask) -> Result<Self, Self::Error> {
        if new.description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let kind = match new.time_required {
            Some(time_required) if !time_required.is_empty() => TaskKind::Timed { time_required },
            _ => TaskKind::Plain,
        };

        Ok(Task {
            description: new.description,
            completed: false,
            due_date: or_sentinel(new.due_date, NO_DUE_DATE),
            priority: or_sentinel(new.priority, NO_PRIORITY),
            category: or_sentinel(new.category, NO_CATEGORY),
            kind,
        })
    }
}

/// Structured edit. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRequest {
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub time_required: Option<String>,
}

impl EditRequest {
    pub fn is_empty(&self) -> bool {
        *self == EditRequest::default()
    }
}

/// Flat JSON representation of a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub task: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Outer `Some` means the key was present, even with a null value.
    #[serde(default, deserialize_with = "key_present", skip_serializing_if = "Option::is_none")]
    pub time_required: Option<Option<String>>,
}

fn key_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        TaskRecord {
            task: task.description.clone(),
            completed: task.completed,
            due_date: Some(task.due_date.clone()),
            priority: Some(task.priority.clone()),
            category: Some(task.category.clone()),
            time_required: task.time_required().map(|t| Some(t.to_string())),
        }
    }
}

impl TaskRecord {
    /// Rebuilds a task from its saved form. `position` is used for error reporting.
    pub fn into_task(self, position: usize) -> Result<Task, TaskError> {
        if self.task.is_empty() {
            return Err(TaskError::InvalidRecord { position });
        }

        let kind = match self.time_required {
            Some(time_required) => TaskKind::Timed {
                time_required: or_sentinel(time_required, NO_TIME_REQUIRED),
            },
            None => TaskKind::Plain,
        };

        Ok(Task {
            description: self.task,
            completed: self.completed,
            due_date: or_sentinel(self.due_date, NO_DUE_DATE),
            priority: or_sentinel(self.priority, NO_PRIORITY),
            category: or_sentinel(self.category, NO_CATEGORY),
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank() {
        assert_eq!(priority_rank("High"), Some(1));
        assert_eq!(priority_rank("Medium"), Some(2));
        assert_eq!(priority_rank("Low"), Some(3));
        assert_eq!(priority_rank("No priority"), Some(4));
        assert_eq!(priority_rank("high"), None);
        assert_eq!(priority_rank("Urgent"), None);
    }

    #[test]
    fn test_blank_fields_become_sentinels() {
        let task = Task::try_from(NewTask::new("Buy milk").due_date("").category("")).unwrap();
        assert_eq!(task.due_date, NO_DUE_DATE);
        assert_eq!(task.priority, NO_PRIORITY);
        assert_eq!(task.category, NO_CATEGORY);
        assert_eq!(task.kind, TaskKind::Plain);
        assert!(!task.completed);
    }

    #[test]
    fn test_blank_time_required_gives_plain_task() {
        let task = Task::try_from(NewTask::new("Read").time_required("")).unwrap();
        assert!(!task.is_timed());
    }

    #[test]
    fn test_render_plain_and_timed() {
        let plain = Task::try_from(NewTask::new("Buy milk").due_date("2024-01-01").priority("High")).unwrap();
        assert_eq!(
            plain.to_string(),
            "Buy milk [Pending] - Due: 2024-01-01 - Priority: High - Category: No category"
        );

        let mut timed = Task::try_from(NewTask::new("Write report").time_required("2h")).unwrap();
        timed.mark_completed();
        assert_eq!(
            timed.to_string(),
            "Write report [Completed] - Due: No due date - Priority: No priority - Category: No category - Time Required: 2h"
        );
    }

    #[test]
    fn test_apply_ignores_time_on_plain_task() {
        let mut task = Task::try_from(NewTask::new("Plain")).unwrap();
        let edit = EditRequest {
            time_required: Some("3h".to_string()),
            ..Default::default()
        };
        task.apply(edit).unwrap();
        assert_eq!(task.kind, TaskKind::Plain);
    }

    #[test]
    fn test_record_with_null_time_required_is_timed() {
        let record: TaskRecord = serde_json::from_str(r#"{"task": "Nap", "time_required": null}"#).unwrap();
        let task = record.into_task(0).unwrap();
        assert_eq!(task.time_required(), Some(NO_TIME_REQUIRED));
    }
}
