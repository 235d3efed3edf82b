use super::task::Task;
use prettytable::{format, row, Table};

/// Console rendering of task listings. Positions are shown 1-based.
pub struct View {}

impl View {
    /// One rendered line per task, in the given order.
    pub fn lines<'a, I>(tasks: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        tasks.into_iter().map(Task::to_string).collect()
    }

    pub fn table<'a, I>(tasks: I) -> Table
    where
        I: IntoIterator<Item = (usize, &'a Task)>,
    {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.set_titles(row!["#", "TASK"]);
        for (position, task) in tasks {
            table.add_row(row![position + 1, task]);
        }
        table
    }

    pub fn tasks(tasks: &[Task]) {
        Self::table(tasks.iter().enumerate()).printstd();
    }

    /// Search results keep their store positions so the numbers can be fed
    /// back into delete, complete and edit.
    pub fn matches(matches: &[(usize, &Task)]) {
        Self::table(matches.iter().copied()).printstd();
    }

    pub fn plain(tasks: &[Task]) {
        for line in Self::lines(tasks) {
            println!("{}", line);
        }
    }
}
