#[cfg(test)]
mod tests {
    use spendlog::libs::config::{Config, StorageConfig, DB_FILE_NAME, LEGACY_FILE_NAME};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_storage_paths_follow_data_dir(ctx: &mut ConfigTestContext) {
        let config = StorageConfig::in_dir(ctx.temp_dir.path());
        assert_eq!(config.data_dir(), ctx.temp_dir.path().to_path_buf());
        assert_eq!(config.db_path(), ctx.temp_dir.path().join(DB_FILE_NAME));
        assert_eq!(config.legacy_path(), ctx.temp_dir.path().join(LEGACY_FILE_NAME));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage.data_dir, None);
        assert_eq!(config.storage.db_file, "app.db");
        assert_eq!(config.storage.legacy_file, "expenses.json");
        assert_eq!(config.display.recent_limit, 5);
        assert_eq!(config.display.summary_days, 30);
        assert_eq!(config.display.courses_per_page, 10);
    }

    #[test]
    fn test_partial_config_is_filled_with_defaults() {
        let config: Config = serde_json::from_str(r#"{ "storage": { "data_dir": "/srv/spendlog" }, "display": { "recent_limit": 20 } }"#).unwrap();
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/srv/spendlog")));
        assert_eq!(config.storage.db_file, DB_FILE_NAME);
        assert_eq!(config.display.recent_limit, 20);
        assert_eq!(config.display.summary_days, 30);
    }

    #[test]
    fn test_unset_data_dir_is_not_serialized() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert!(json["storage"].get("data_dir").is_none());
        assert_eq!(json["storage"]["db_file"], "app.db");
    }
}
