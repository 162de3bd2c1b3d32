/// Structured record store and fast-cache errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("schema bootstrap failed for table {table}: {reason}")]
    SchemaFailed { table: String, reason: String },

    #[error("table {table} is unreachable: {reason}")]
    TableUnreachable { table: String, reason: String },

    #[error("malformed record in {table}: {reason}")]
    MalformedRecord { table: String, reason: String },
}
