//! Table bootstrap. Every statement is idempotent.

use rusqlite::Connection;

use atelier_core::errors::{AtelierResult, StoreError};

/// Logical table names.
pub mod tables {
    pub const CATALOG_ITEMS: &str = "catalog_items";
    pub const QUIZ_RESULTS: &str = "quiz_results";
    pub const USER_FEEDBACK: &str = "user_feedback";
    pub const OUTFIT_LOGS: &str = "outfit_logs";
    pub const LEARNING_DATA: &str = "learning_data";
    pub const LEARNING_INSIGHTS: &str = "learning_insights";
    pub const ACTIVE_RULE_SETS: &str = "active_rule_sets";
    pub const VALIDATION_RESULTS: &str = "validation_results";
    pub const MANUAL_RATINGS: &str = "manual_ratings";
}

const STATEMENTS: &[(&str, &str)] = &[
    (
        tables::CATALOG_ITEMS,
        "CREATE TABLE IF NOT EXISTS catalog_items (
            id              TEXT PRIMARY KEY,
            display_name    TEXT NOT NULL,
            description     TEXT NOT NULL DEFAULT '',
            family          TEXT,
            subfamily       TEXT,
            color           TEXT,
            price           REAL,
            images          TEXT NOT NULL DEFAULT '[]',
            occasion        TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_catalog_occasion ON catalog_items(occasion);",
    ),
    (
        tables::QUIZ_RESULTS,
        "CREATE TABLE IF NOT EXISTS quiz_results (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     TEXT NOT NULL,
            analysis    TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_quiz_user ON quiz_results(user_id, created_at);",
    ),
    (
        tables::USER_FEEDBACK,
        "CREATE TABLE IF NOT EXISTS user_feedback (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     TEXT NOT NULL,
            look_id     TEXT NOT NULL,
            item_ids    TEXT NOT NULL,
            liked       INTEGER NOT NULL,
            colors      TEXT NOT NULL DEFAULT '[]',
            created_at  TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_feedback_user ON user_feedback(user_id, created_at);",
    ),
    (
        tables::OUTFIT_LOGS,
        "CREATE TABLE IF NOT EXISTS outfit_logs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     TEXT NOT NULL,
            top_id      TEXT,
            bottom_id   TEXT,
            shoes_id    TEXT,
            user_liked  INTEGER,
            colors      TEXT NOT NULL DEFAULT '[]',
            created_at  TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_outfit_logs_user ON outfit_logs(user_id, created_at);",
    ),
    (
        tables::LEARNING_DATA,
        "CREATE TABLE IF NOT EXISTS learning_data (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     TEXT NOT NULL,
            payload     TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_learning_data_user ON learning_data(user_id, created_at);",
    ),
    (
        tables::LEARNING_INSIGHTS,
        "CREATE TABLE IF NOT EXISTS learning_insights (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     TEXT NOT NULL,
            payload     TEXT NOT NULL,
            score       REAL NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_insights_user ON learning_insights(user_id, created_at);",
    ),
    (
        tables::ACTIVE_RULE_SETS,
        "CREATE TABLE IF NOT EXISTS active_rule_sets (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     TEXT NOT NULL,
            payload     TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_rule_sets_user ON active_rule_sets(user_id, created_at);",
    ),
    (
        tables::VALIDATION_RESULTS,
        "CREATE TABLE IF NOT EXISTS validation_results (
            id              TEXT PRIMARY KEY,
            test_case_name  TEXT NOT NULL,
            run_timestamp   TEXT NOT NULL,
            overall_quality INTEGER NOT NULL,
            success         INTEGER NOT NULL,
            payload         TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_validation_run ON validation_results(run_timestamp);",
    ),
    (
        tables::MANUAL_RATINGS,
        "CREATE TABLE IF NOT EXISTS manual_ratings (
            id              TEXT PRIMARY KEY,
            test_case_name  TEXT NOT NULL,
            outfit_index    INTEGER NOT NULL,
            run_timestamp   TEXT NOT NULL,
            payload         TEXT NOT NULL,
            created_at      TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_ratings_case ON manual_ratings(test_case_name, outfit_index);",
    ),
];

/// Create every table and index that does not exist yet.
pub fn bootstrap(conn: &Connection) -> AtelierResult<()> {
    for (table, sql) in STATEMENTS {
        conn.execute_batch(sql).map_err(|e| StoreError::SchemaFailed {
            table: table.to_string(),
            reason: e.to_string(),
        })?;
    }
    tracing::debug!(tables = STATEMENTS.len(), "schema bootstrapped");
    Ok(())
}
