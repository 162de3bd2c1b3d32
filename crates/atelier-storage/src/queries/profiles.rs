//! quiz_results: one row per completed style quiz.

use rusqlite::{params, Connection, OptionalExtension};

use atelier_core::errors::AtelierResult;
use atelier_core::models::{QuizResult, StyleAnalysis};

use super::{from_json, to_json};
use crate::schema::tables;
use crate::{to_store_err, ts};

pub fn insert(conn: &Connection, result: &QuizResult) -> AtelierResult<()> {
    conn.execute(
        "INSERT INTO quiz_results (user_id, analysis, created_at) VALUES (?1, ?2, ?3)",
        params![result.user_id, to_json(&result.analysis)?, ts(&result.created_at)],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

pub fn latest(conn: &Connection, user_id: &str) -> AtelierResult<Option<QuizResult>> {
    let row = conn
        .query_row(
            "SELECT analysis, created_at FROM quiz_results
             WHERE user_id = ?1 ORDER BY created_at DESC, id DESC LIMIT 1",
            params![user_id],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
        )
        .optional()
        .map_err(|e| to_store_err(e.to_string()))?;

    let Some((analysis, created_at)) = row else {
        return Ok(None);
    };
    let analysis: StyleAnalysis = from_json(tables::QUIZ_RESULTS, &analysis)?;
    let created_at = chrono::DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| to_store_err(format!("quiz_results.created_at: {e}")))?
        .with_timezone(&chrono::Utc);
    Ok(Some(QuizResult {
        user_id: user_id.to_string(),
        analysis,
        created_at,
    }))
}
