#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use taskdesk::commands::{add, clear, complete, edit, Cli};
    use taskdesk::libs::config::Config;
    use taskdesk::libs::store::TaskStore;
    use taskdesk::libs::task::{EditRequest, NewTask};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Tasks written by hand in compact JSON. Any save by a command rewrites
    /// the file pretty-printed, so an unchanged text means nothing was saved.
    const COMPACT_TASKS: &str = r#"[{"task":"Buy milk","completed":true,"priority":"High"},{"task":"Write report","time_required":"2h"}]"#;

    struct CommandTestContext {
        _temp_dir: TempDir,
        tasks_file: PathBuf,
        other_file: PathBuf,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let tasks_file = temp_dir.path().join("tasks.json");
            let other_file = temp_dir.path().join("other.json");
            CommandTestContext {
                _temp_dir: temp_dir,
                tasks_file,
                other_file,
            }
        }
    }

    impl CommandTestContext {
        /// Runs `taskdesk --file <tasks_file> <args>` without confirmation prompts.
        fn run(&self, args: &[&str]) -> anyhow::Result<()> {
            let file = self.tasks_file.display().to_string();
            let argv = ["taskdesk", "--file", file.as_str()].into_iter().chain(args.iter().copied());
            let config = Config {
                confirm_clear: false,
                ..Config::default()
            };
            Cli::try_parse_from(argv)?.execute(config)
        }

        fn stored(&self) -> TaskStore {
            TaskStore::open(&self.tasks_file).unwrap()
        }

        fn write_compact(&self) {
            fs::write(&self.tasks_file, COMPACT_TASKS).unwrap();
        }

        fn file_text(&self) -> String {
            fs::read_to_string(&self.tasks_file).unwrap()
        }
    }

    fn sample_store() -> TaskStore {
        let mut store = TaskStore::new();
        store.add(NewTask::new("Buy milk").priority("High")).unwrap();
        store.add(NewTask::new("Write report").time_required("2h")).unwrap();
        store
    }

    #[test]
    fn test_add_run_reports_change() {
        let mut store = TaskStore::new();

        assert!(add::run(&mut store, NewTask::new("Buy milk")).unwrap());
        assert!(!add::run(&mut store, NewTask::new("").priority("High")).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_complete_run_twice() {
        let mut store = sample_store();

        assert!(complete::run(&mut store, Some(1)).unwrap());
        assert!(!complete::run(&mut store, Some(1)).unwrap());
        assert!(store.get(1).unwrap().completed);

        // Out of range and missing selections are rejected without failing.
        assert!(!complete::run(&mut store, Some(5)).unwrap());
        assert!(!complete::run(&mut store, None).unwrap());
    }

    #[test]
    fn test_edit_run_detects_no_change() {
        let mut store = sample_store();
        let same = EditRequest {
            description: Some("Buy milk".to_string()),
            ..EditRequest::default()
        };
        assert!(!edit::run(&mut store, Some(0), same).unwrap());

        let changed = EditRequest {
            category: Some("Errands".to_string()),
            ..EditRequest::default()
        };
        assert!(edit::run(&mut store, Some(0), changed).unwrap());
        assert_eq!(store.get(0).unwrap().category, "Errands");

        let empty = EditRequest {
            description: Some(String::new()),
            ..EditRequest::default()
        };
        assert!(!edit::run(&mut store, Some(0), empty).unwrap());
        assert_eq!(store.get(0).unwrap().description, "Buy milk");
    }

    #[test]
    fn test_clear_run_without_confirmation() {
        let mut store = sample_store();

        assert!(clear::run(&mut store, false).unwrap());
        assert!(store.is_empty());
        assert!(!clear::run(&mut store, false).unwrap());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_command_creates_tasks_file(ctx: &mut CommandTestContext) {
        ctx.run(&["add", "Buy milk", "-p", "High"]).unwrap();
        ctx.run(&["add", "Write report", "--time", "2h"]).unwrap();

        let store = ctx.stored();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().priority, "High");
        assert_eq!(store.get(1).unwrap().time_required(), Some("2h"));
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_rejected_add_does_not_write(ctx: &mut CommandTestContext) {
        ctx.run(&["add", ""]).unwrap();
        assert!(!ctx.tasks_file.exists());

        ctx.write_compact();
        ctx.run(&["add", ""]).unwrap();
        assert_eq!(ctx.file_text(), COMPACT_TASKS);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_unchanged_commands_do_not_write(ctx: &mut CommandTestContext) {
        ctx.write_compact();

        // Task 1 is already completed.
        ctx.run(&["complete", "1"]).unwrap();
        ctx.run(&["edit", "1", "--text", "Buy milk"]).unwrap();
        ctx.run(&["delete", "9"]).unwrap();

        assert_eq!(ctx.file_text(), COMPACT_TASKS);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_changing_commands_write(ctx: &mut CommandTestContext) {
        ctx.write_compact();

        ctx.run(&["complete", "2"]).unwrap();
        assert_ne!(ctx.file_text(), COMPACT_TASKS);
        assert!(ctx.stored().get(1).unwrap().completed);

        ctx.run(&["edit", "2", "--category", "Work"]).unwrap();
        assert_eq!(ctx.stored().get(1).unwrap().category, "Work");

        ctx.run(&["delete", "1"]).unwrap();
        let store = ctx.stored();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().description, "Write report");
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_clear_command_with_confirmation_off(ctx: &mut CommandTestContext) {
        ctx.write_compact();

        ctx.run(&["clear"]).unwrap();

        assert!(ctx.stored().is_empty());
        assert!(ctx.tasks_file.exists());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_import_appends_and_saves(ctx: &mut CommandTestContext) {
        sample_store().save(&ctx.other_file).unwrap();
        ctx.run(&["add", "Call mom"]).unwrap();

        let other = ctx.other_file.display().to_string();
        ctx.run(&["import", other.as_str()]).unwrap();
        ctx.run(&["import", other.as_str()]).unwrap();

        let store = ctx.stored();
        let descriptions: Vec<&str> = store.iter().map(|task| task.description.as_str()).collect();
        assert_eq!(descriptions, ["Call mom", "Buy milk", "Write report", "Buy milk", "Write report"]);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_import_missing_file_is_a_warning(ctx: &mut CommandTestContext) {
        let other = ctx.other_file.display().to_string();

        assert!(ctx.run(&["import", other.as_str()]).is_ok());
        assert!(!ctx.tasks_file.exists());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_export_copies_tasks(ctx: &mut CommandTestContext) {
        ctx.write_compact();
        let other = ctx.other_file.display().to_string();

        ctx.run(&["export", other.as_str()]).unwrap();

        assert_eq!(TaskStore::open(&ctx.other_file).unwrap(), ctx.stored());
        assert_eq!(ctx.file_text(), COMPACT_TASKS);
    }
}
