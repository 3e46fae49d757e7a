#[cfg(test)]
mod tests {
    use spendlog::db::storage::Storage;
    use spendlog::libs::config::StorageConfig;
    use spendlog::libs::expense::ExpenseDraft;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct ResetTestContext {
        _temp_dir: TempDir,
        storage: Storage,
    }

    impl AsyncTestContext for ResetTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = Storage::new(StorageConfig::in_dir(temp_dir.path()));
            ResetTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    #[test_context(ResetTestContext)]
    #[tokio::test]
    async fn test_reset_clears_expenses_and_restores_catalog(ctx: &mut ResetTestContext) {
        let expenses = ctx.storage.expenses().await.unwrap();
        expenses.add(ExpenseDraft::new("Rent", "900", "expense")).await.unwrap();
        expenses.add(ExpenseDraft::new("Salary", "2000", "income")).await.unwrap();

        let reseeded = ctx.storage.reset().await.unwrap().reset_all().await.unwrap();
        assert_eq!(reseeded, 50);

        assert_eq!(expenses.count().await.unwrap(), 0);
        assert_eq!(expenses.total().await.unwrap(), 0.0);

        let courses = ctx.storage.courses().await.unwrap().list(100).await.unwrap();
        assert_eq!(courses.len(), 50);
        assert_eq!(courses[0].title, "Course 1");
        assert_eq!(courses[49].title, "Course 50");
    }

    #[test_context(ResetTestContext)]
    #[tokio::test]
    async fn test_reset_is_repeatable(ctx: &mut ResetTestContext) {
        let reset = ctx.storage.reset().await.unwrap();
        reset.reset_all().await.unwrap();
        reset.reset_all().await.unwrap();

        assert_eq!(ctx.storage.courses().await.unwrap().count().await.unwrap(), 50);
        assert_eq!(ctx.storage.expenses().await.unwrap().count().await.unwrap(), 0);
    }

    #[test_context(ResetTestContext)]
    #[tokio::test]
    async fn test_store_accepts_writes_after_reset(ctx: &mut ResetTestContext) {
        ctx.storage.reset().await.unwrap().reset_all().await.unwrap();

        let expenses = ctx.storage.expenses().await.unwrap();
        expenses.add(ExpenseDraft::new("Lunch", "12", "expense")).await.unwrap();
        assert_eq!(expenses.total().await.unwrap(), -12.0);
    }
}
