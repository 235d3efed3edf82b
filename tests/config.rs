#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use taskdesk::libs::config::{Config, CONFIG_FILE_NAME, DEFAULT_TASKS_FILE, TASKS_FILE_ENV};
    use taskdesk::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the platform data directory at a temporary directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tasks_file, PathBuf::from(DEFAULT_TASKS_FILE));
        assert!(config.confirm_clear);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_file_lifecycle(_ctx: &mut ConfigTestContext) {
        // No file yet: defaults.
        assert_eq!(Config::read().unwrap(), Config::default());

        let config = Config {
            tasks_file: PathBuf::from("/tmp/my-tasks.json"),
            confirm_clear: false,
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);

        // A broken file is an error for `read`, defaults for `read_or_default`.
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, "{not json").unwrap();
        assert!(Config::read().is_err());
        assert_eq!(Config::read_or_default(), Config::default());

        // Saving replaces the broken file.
        config.save().unwrap();
        assert_eq!(Config::read().unwrap(), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"confirm_clear": false}"#).unwrap();
        assert_eq!(config.tasks_file, PathBuf::from(DEFAULT_TASKS_FILE));
        assert!(!config.confirm_clear);
    }

    #[test]
    fn test_tasks_file_resolution() {
        let config = Config {
            tasks_file: PathBuf::from("configured.json"),
            confirm_clear: true,
        };

        std::env::remove_var(TASKS_FILE_ENV);
        assert_eq!(config.tasks_file(None), PathBuf::from("configured.json"));

        std::env::set_var(TASKS_FILE_ENV, "from-env.json");
        assert_eq!(config.tasks_file(None), PathBuf::from("from-env.json"));
        assert_eq!(config.tasks_file(Some(PathBuf::from("flag.json"))), PathBuf::from("flag.json"));
        std::env::remove_var(TASKS_FILE_ENV);
    }
}
