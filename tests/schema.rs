#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use spendlog::db::schema::{ensure_optional_column, ensure_schema, has_column};
    use spendlog::db::storage::Storage;
    use spendlog::libs::config::StorageConfig;
    use spendlog::libs::error::StorageError;
    use spendlog::libs::expense::ExpenseDraft;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct SchemaTestContext {
        temp_dir: TempDir,
    }

    impl AsyncTestContext for SchemaTestContext {
        async fn setup() -> Self {
            SchemaTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(SchemaTestContext)]
    #[tokio::test]
    async fn test_old_database_gains_category_column(ctx: &mut SchemaTestContext) {
        let config = StorageConfig::in_dir(ctx.temp_dir.path());
        {
            let conn = Connection::open(config.db_path()).unwrap();
            conn.execute_batch(
                "CREATE TABLE expenses (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    amount REAL NOT NULL,
                    type TEXT NOT NULL,
                    note TEXT,
                    date TEXT NOT NULL
                );
                INSERT INTO expenses (title, amount, type, note, date)
                VALUES ('Rent', -900, 'expense', NULL, '2023-12-01T00:00:00.000Z');",
            )
            .unwrap();
        }

        let storage = Storage::new(config.clone());
        let expenses = storage.expenses().await.unwrap();

        let stored = expenses.list_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "Rent");
        assert_eq!(stored[0].category, None);
        assert_eq!(stored[0].note, "");

        expenses
            .add(ExpenseDraft::new("Bus", "2", "expense").with_category("travel"))
            .await
            .unwrap();
        assert_eq!(storage.courses().await.unwrap().count().await.unwrap(), 50);

        let conn = Connection::open(config.db_path()).unwrap();
        assert!(has_column(&conn, "expenses", "category").unwrap());
    }

    #[test]
    fn test_ensure_schema_is_repeatable() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_schema(&mut conn).unwrap();
        ensure_schema(&mut conn).unwrap();

        assert!(has_column(&conn, "expenses", "category").unwrap());
        assert!(has_column(&conn, "courses", "description").unwrap());
        assert!(!ensure_optional_column(&conn, "expenses", "category", "TEXT").unwrap());
    }

    #[test]
    fn test_new_optional_column_is_added_once() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_schema(&mut conn).unwrap();

        assert!(ensure_optional_column(&conn, "expenses", "receipt", "TEXT").unwrap());
        assert!(!ensure_optional_column(&conn, "expenses", "receipt", "TEXT").unwrap());
        assert!(has_column(&conn, "expenses", "receipt").unwrap());
    }

    #[test]
    fn test_unsafe_identifiers_are_rejected() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_schema(&mut conn).unwrap();

        let err = ensure_optional_column(&conn, "expenses", "x; DROP TABLE courses", "TEXT").unwrap_err();
        assert!(matches!(err, StorageError::InvalidIdentifier(_)));
        assert!(err.is_init());
        assert!(has_column(&conn, "courses", "title").unwrap());
    }
}
