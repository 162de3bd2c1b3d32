//! validation_results and manual_ratings.

use rusqlite::{params, Connection};

use atelier_core::errors::AtelierResult;
use atelier_core::models::{HarnessRecord, ManualRating};

use super::{collect_payloads, to_json};
use crate::schema::tables;
use crate::{to_store_err, ts};

pub fn insert_record(conn: &Connection, record: &HarnessRecord) -> AtelierResult<()> {
    conn.execute(
        "INSERT INTO validation_results
            (id, test_case_name, run_timestamp, overall_quality, success, payload)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            record.id,
            record.test_case_name,
            ts(&record.run_timestamp),
            record.metrics.overall_quality,
            record.success as i32,
            to_json(record)?,
        ],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

/// All rows of the most recent run, in insertion order.
pub fn latest_run(conn: &Connection) -> AtelierResult<Vec<HarnessRecord>> {
    collect_payloads(
        conn,
        tables::VALIDATION_RESULTS,
        "SELECT payload FROM validation_results
         WHERE run_timestamp = (SELECT MAX(run_timestamp) FROM validation_results)
         ORDER BY rowid",
        [],
    )
}

pub fn clear(conn: &Connection) -> AtelierResult<usize> {
    conn.execute("DELETE FROM validation_results", [])
        .map_err(|e| to_store_err(e.to_string()))
}

pub fn insert_rating(conn: &Connection, rating: &ManualRating) -> AtelierResult<()> {
    conn.execute(
        "INSERT INTO manual_ratings
            (id, test_case_name, outfit_index, run_timestamp, payload, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            rating.id,
            rating.test_case_name,
            rating.outfit_index,
            ts(&rating.run_timestamp),
            to_json(rating)?,
            ts(&rating.created_at),
        ],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

pub fn ratings_for(conn: &Connection, test_case_name: &str) -> AtelierResult<Vec<ManualRating>> {
    collect_payloads(
        conn,
        tables::MANUAL_RATINGS,
        "SELECT payload FROM manual_ratings
         WHERE test_case_name = ?1 ORDER BY outfit_index, created_at",
        params![test_case_name],
    )
}
