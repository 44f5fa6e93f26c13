/// All database primary keys are SQLite INTEGER (64-bit) rowids.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
