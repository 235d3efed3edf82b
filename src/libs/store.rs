//! In-memory task store with JSON file persistence.
//!
//! [`TaskStore`] owns an ordered list of [`Task`] records. Order is insertion
//! order until one of the sort operations runs; sorts are stable and rewrite
//! the stored order in place.
//!
//! Every operation either succeeds completely or returns a [`TaskError`] with
//! the store left untouched.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::libs::store::TaskStore;
//! use taskdesk::libs::task::NewTask;
//!
//! let mut store = TaskStore::new();
//! store.add(NewTask::new("Buy milk").due_date("2024-01-01").priority("High"))?;
//! store.add(NewTask::new("Write report").time_required("2h"))?;
//! store.save("tasks.json")?;
//! # Ok::<(), taskdesk::libs::error::TaskError>(())
//! ```

use super::error::{Result, TaskError};
use super::task::{priority_rank, EditRequest, NewTask, Task, TaskRecord};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh store with the contents of `path`. A missing file gives an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut store = Self::new();
        match store.load(path) {
            Ok(_) | Err(TaskError::NotFound(_)) => Ok(store),
            Err(e) => Err(e),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn checked_index(&self, index: Option<usize>) -> Result<usize> {
        match index {
            Some(index) if index < self.tasks.len() => Ok(index),
            _ => Err(TaskError::InvalidSelection),
        }
    }

    /// Appends a new task. Fails without changes when the description is empty.
    pub fn add(&mut self, new: NewTask) -> Result<&Task> {
        let task = Task::try_from(new)?;
        debug!(description = %task.description, timed = task.is_timed(), "adding task");
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    pub fn delete(&mut self, index: Option<usize>) -> Result<Task> {
        let index = self.checked_index(index)?;
        debug!(index, "deleting task");
        Ok(self.tasks.remove(index))
    }

    /// Marks the task completed. Completing an already completed task is a no-op.
    pub fn complete(&mut self, index: Option<usize>) -> Result<()> {
        let index = self.checked_index(index)?;
        debug!(index, "completing task");
        self.tasks[index].mark_completed();
        Ok(())
    }

    pub fn edit(&mut self, index: Option<usize>, edit: EditRequest) -> Result<()> {
        let index = self.checked_index(index)?;
        debug!(index, ?edit, "editing task");
        self.tasks[index].apply(edit)
    }

    /// Case-insensitive substring search over descriptions.
    ///
    /// Returns `(position, task)` pairs in store order. The store itself is
    /// never reordered or filtered.
    pub fn search(&self, keyword: &str) -> Result<Vec<(usize, &Task)>> {
        if keyword.is_empty() {
            return Err(TaskError::EmptyKeyword);
        }

        let needle = keyword.to_lowercase();
        Ok(self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.description.to_lowercase().contains(&needle))
            .collect())
    }

    pub fn sort_by_due_date(&mut self) {
        debug!(count = self.tasks.len(), "sorting by due date");
        self.tasks.sort_by(|a, b| a.due_date_key().cmp(b.due_date_key()));
    }

    /// Stable sort by priority rank. Any priority outside the known set fails
    /// the whole sort before anything moves.
    pub fn sort_by_priority(&mut self) -> Result<()> {
        if let Some((position, task)) = self.tasks.iter().enumerate().find(|(_, task)| priority_rank(&task.priority).is_none()) {
            return Err(TaskError::UnknownPriority {
                position,
                value: task.priority.clone(),
            });
        }

        debug!(count = self.tasks.len(), "sorting by priority");
        self.tasks.sort_by_key(|task| priority_rank(&task.priority).unwrap_or(u8::MAX));
        Ok(())
    }

    pub fn clear(&mut self) {
        debug!(count = self.tasks.len(), "clearing all tasks");
        self.tasks.clear();
    }

    /// Writes all tasks as a JSON array, replacing the file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let records: Vec<TaskRecord> = self.tasks.iter().map(TaskRecord::from).collect();

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &records)?;
        writer.flush()?;

        debug!(path = %path.display(), count = records.len(), "tasks saved");
        Ok(())
    }

    /// Appends the tasks stored in `path` to the current list and returns how
    /// many were read. Nothing is appended unless the whole file decodes.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(TaskError::NotFound(path.to_path_buf())),
            Err(e) => return Err(e.into()),
        };

        let records: Vec<TaskRecord> = serde_json::from_reader(BufReader::new(file))?;
        let loaded = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| record.into_task(position))
            .collect::<Result<Vec<_>>>()?;

        let count = loaded.len();
        self.tasks.extend(loaded);
        debug!(path = %path.display(), count, "tasks loaded");
        Ok(count)
    }
}

