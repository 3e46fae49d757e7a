#[cfg(test)]
mod tests {
    use spendlog::db::import::ImportOutcome;
    use spendlog::db::storage::Storage;
    use spendlog::libs::config::StorageConfig;
    use spendlog::libs::error::ErrorKind;
    use spendlog::libs::expense::ExpenseDraft;
    use std::sync::Arc;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct InitTestContext {
        temp_dir: TempDir,
    }

    impl AsyncTestContext for InitTestContext {
        async fn setup() -> Self {
            InitTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl InitTestContext {
        fn config(&self) -> StorageConfig {
            StorageConfig::in_dir(self.temp_dir.path().join("data"))
        }
    }

    #[test_context(InitTestContext)]
    #[tokio::test]
    async fn test_initialize_twice_returns_same_handle(ctx: &mut InitTestContext) {
        let storage = Storage::new(ctx.config());

        let first = storage.initialize().await.unwrap();
        let second = storage.initialize().await.unwrap();
        assert!(first.ptr_eq(&second));

        let courses = storage.courses().await.unwrap();
        assert_eq!(courses.count().await.unwrap(), 50);
        assert_eq!(storage.init_report().unwrap().seeded_courses, 50);
    }

    #[test_context(InitTestContext)]
    #[tokio::test]
    async fn test_concurrent_initialize_runs_once(ctx: &mut InitTestContext) {
        let storage = Arc::new(Storage::new(ctx.config()));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let storage = Arc::clone(&storage);
                tokio::spawn(async move { storage.initialize().await.unwrap() })
            })
            .collect();

        let mut dbs = Vec::new();
        for handle in handles {
            dbs.push(handle.await.unwrap());
        }
        assert!(dbs.windows(2).all(|pair| pair[0].ptr_eq(&pair[1])));
        assert_eq!(storage.courses().await.unwrap().count().await.unwrap(), 50);
    }

    #[test_context(InitTestContext)]
    #[tokio::test]
    async fn test_restart_keeps_data_and_does_not_reseed(ctx: &mut InitTestContext) {
        {
            let storage = Storage::new(ctx.config());
            let expenses = storage.expenses().await.unwrap();
            expenses.add(ExpenseDraft::new("Groceries", "42", "expense")).await.unwrap();
        }

        // A second process start over the same file.
        let storage = Storage::new(ctx.config());
        storage.initialize().await.unwrap();

        let report = storage.init_report().unwrap();
        assert_eq!(report.seeded_courses, 0);
        assert_eq!(report.import, ImportOutcome::NoSource);
        assert_eq!(storage.courses().await.unwrap().count().await.unwrap(), 50);
        assert_eq!(storage.expenses().await.unwrap().count().await.unwrap(), 1);
    }

    #[test_context(InitTestContext)]
    #[tokio::test]
    async fn test_missing_data_directory_is_created(ctx: &mut InitTestContext) {
        let config = StorageConfig::in_dir(ctx.temp_dir.path().join("nested").join("deeper"));
        let storage = Storage::new(config.clone());

        let db = storage.initialize().await.unwrap();
        assert!(config.db_path().exists());
        assert_eq!(db.path(), config.db_path().as_path());
    }

    #[test_context(InitTestContext)]
    #[tokio::test]
    async fn test_unusable_data_directory_is_an_init_error(ctx: &mut InitTestContext) {
        let blocker = ctx.temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let storage = Storage::new(StorageConfig::in_dir(blocker.join("data")));
        let err = storage.initialize().await.err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Init);
        assert!(storage.init_report().is_none());
    }
}
