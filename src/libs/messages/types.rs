/// Every user-facing and logged message of the application.
///
/// Text lives in the `Display` impl in `display.rs`; call sites only pick a
/// variant and its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === STORAGE MESSAGES ===
    StorageOpening(String), // db path
    StorageReady(String),   // db path
    SchemaEnsured,
    ColumnAdded(String, String), // table, column
    ColumnPresent(String, String),
    StorageInitFailed(String),

    // === LEGACY IMPORT MESSAGES ===
    LegacyFileAbsent(String), // path
    LegacyImportStarted(String),
    LegacyReadFailed(String, String),  // path, error
    LegacyParseFailed(String, String), // path, error
    LegacyNotAnArray(String),
    LegacyRecordNotObject(usize),         // index
    LegacyRecordWithoutDate(usize),       // index
    LegacyRecordDuplicate(String, String), // date, title
    LegacyRecordFailed(usize, String),    // index, error
    LegacyArchiveFailed(String, String),  // path, error
    LegacyImportAborted(String, String),  // path, error
    LegacyImportCompleted {
        imported: usize,
        duplicates: usize,
        skipped: usize,
        failed: usize,
    },

    // === REFERENCE DATA MESSAGES ===
    CoursesSeeded(usize),
    CoursesAlreadySeeded(usize),

    // === EXPENSE MESSAGES ===
    ExpenseAdded(i64, String, f64), // id, title, amount
    ExpensesNotFound,
    ExpensesHeader(usize),
    TotalBalance(f64),
    DailySummaryHeader(usize),
    TypeSummaryHeader,
    SummaryNet(f64),

    // === RESET MESSAGES ===
    ConfirmReset,
    ResetCancelled,
    ResetCompleted(usize), // seeded course count

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String),
    ConfigLoadFailed(String),
}
