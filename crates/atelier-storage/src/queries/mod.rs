//! Per-table query functions. Each takes a borrowed connection.

pub mod catalog;
pub mod feedback;
pub mod harness;
pub mod learning;
pub mod profiles;

use serde::{de::DeserializeOwned, Serialize};

use atelier_core::errors::{AtelierResult, StoreError};

use crate::to_store_err;

pub(crate) fn to_json<T: Serialize>(value: &T) -> AtelierResult<String> {
    serde_json::to_string(value).map_err(|e| to_store_err(e.to_string()))
}

pub(crate) fn from_json<T: DeserializeOwned>(table: &str, raw: &str) -> AtelierResult<T> {
    serde_json::from_str(raw).map_err(|e| {
        StoreError::MalformedRecord {
            table: table.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Collect the JSON `payload` column of every row a statement yields.
pub(crate) fn collect_payloads<T, P>(
    conn: &rusqlite::Connection,
    table: &str,
    sql: &str,
    params: P,
) -> AtelierResult<Vec<T>>
where
    T: DeserializeOwned,
    P: rusqlite::Params,
{
    let mut stmt = conn.prepare(sql).map_err(|e| to_store_err(e.to_string()))?;
    let rows = stmt
        .query_map(params, |row| row.get::<_, String>(0))
        .map_err(|e| to_store_err(e.to_string()))?;
    let mut out = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_store_err(e.to_string()))?;
        out.push(from_json(table, &raw)?);
    }
    Ok(out)
}
