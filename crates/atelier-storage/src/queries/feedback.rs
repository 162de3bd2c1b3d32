//! user_feedback, outfit_logs, learning_data: feedback history, newest first.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use atelier_core::errors::AtelierResult;
use atelier_core::models::{LearningData, OutfitLog, UserFeedback};

use super::{collect_payloads, from_json, to_json};
use crate::schema::tables;
use crate::{to_store_err, ts};

fn parse_ts(column: &str, raw: &str) -> AtelierResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| to_store_err(format!("{column}: {e}")))
}

pub fn insert_feedback(conn: &Connection, feedback: &UserFeedback) -> AtelierResult<()> {
    conn.execute(
        "INSERT INTO user_feedback (user_id, look_id, item_ids, liked, colors, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            feedback.user_id,
            feedback.look_id,
            to_json(&feedback.item_ids)?,
            feedback.liked as i32,
            to_json(&feedback.colors)?,
            ts(&feedback.created_at),
        ],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

pub fn recent_feedback(conn: &Connection, user_id: &str, limit: usize) -> AtelierResult<Vec<UserFeedback>> {
    let mut stmt = conn
        .prepare(
            "SELECT look_id, item_ids, liked, colors, created_at FROM user_feedback
             WHERE user_id = ?1 ORDER BY created_at DESC, id DESC LIMIT ?2",
        )
        .map_err(|e| to_store_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![user_id, limit as i64], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i32>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })
        .map_err(|e| to_store_err(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        let (look_id, item_ids, liked, colors, created_at) =
            row.map_err(|e| to_store_err(e.to_string()))?;
        out.push(UserFeedback {
            user_id: user_id.to_string(),
            look_id,
            item_ids: from_json(tables::USER_FEEDBACK, &item_ids)?,
            liked: liked != 0,
            colors: from_json(tables::USER_FEEDBACK, &colors)?,
            created_at: parse_ts("user_feedback.created_at", &created_at)?,
        });
    }
    Ok(out)
}

pub fn insert_outfit_log(conn: &Connection, log: &OutfitLog) -> AtelierResult<()> {
    conn.execute(
        "INSERT INTO outfit_logs (user_id, top_id, bottom_id, shoes_id, user_liked, colors, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            log.user_id,
            log.top_id,
            log.bottom_id,
            log.shoes_id,
            log.user_liked.map(|l| l as i32),
            to_json(&log.colors)?,
            ts(&log.created_at),
        ],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

pub fn recent_outfit_logs(conn: &Connection, user_id: &str, limit: usize) -> AtelierResult<Vec<OutfitLog>> {
    let mut stmt = conn
        .prepare(
            "SELECT top_id, bottom_id, shoes_id, user_liked, colors, created_at FROM outfit_logs
             WHERE user_id = ?1 ORDER BY created_at DESC, id DESC LIMIT ?2",
        )
        .map_err(|e| to_store_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![user_id, limit as i64], |row| {
            Ok((
                row.get::<_, Option<String>>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<i32>>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })
        .map_err(|e| to_store_err(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        let (top_id, bottom_id, shoes_id, user_liked, colors, created_at) =
            row.map_err(|e| to_store_err(e.to_string()))?;
        out.push(OutfitLog {
            user_id: user_id.to_string(),
            top_id,
            bottom_id,
            shoes_id,
            user_liked: user_liked.map(|l| l != 0),
            colors: from_json(tables::OUTFIT_LOGS, &colors)?,
            created_at: parse_ts("outfit_logs.created_at", &created_at)?,
        });
    }
    Ok(out)
}

pub fn insert_learning_data(conn: &Connection, data: &LearningData) -> AtelierResult<()> {
    conn.execute(
        "INSERT INTO learning_data (user_id, payload, created_at) VALUES (?1, ?2, ?3)",
        params![data.user_id, to_json(data)?, ts(&data.created_at)],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

pub fn recent_learning_data(conn: &Connection, user_id: &str, limit: usize) -> AtelierResult<Vec<LearningData>> {
    collect_payloads(
        conn,
        tables::LEARNING_DATA,
        "SELECT payload FROM learning_data
         WHERE user_id = ?1 ORDER BY created_at DESC, id DESC LIMIT ?2",
        params![user_id, limit as i64],
    )
}
