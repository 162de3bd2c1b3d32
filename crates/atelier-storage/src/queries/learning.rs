//! learning_insights and active_rule_sets. Both are append-only.

use rusqlite::{params, Connection};

use atelier_core::errors::AtelierResult;
use atelier_core::models::{ActiveRuleSet, LearningInsights};

use super::{collect_payloads, to_json};
use crate::schema::tables;
use crate::{to_store_err, ts};

pub fn insert_insights(conn: &Connection, insights: &LearningInsights) -> AtelierResult<()> {
    let score = insights.personalized_weights.len() as f64 * 10.0;
    conn.execute(
        "INSERT INTO learning_insights (user_id, payload, score, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![insights.user_id, to_json(insights)?, score, ts(&insights.created_at)],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

pub fn latest_insights(conn: &Connection, user_id: &str) -> AtelierResult<Option<LearningInsights>> {
    Ok(collect_payloads(
        conn,
        tables::LEARNING_INSIGHTS,
        "SELECT payload FROM learning_insights
         WHERE user_id = ?1 ORDER BY created_at DESC, id DESC LIMIT 1",
        params![user_id],
    )?
    .into_iter()
    .next())
}

pub fn insert_rule_set(conn: &Connection, rules: &ActiveRuleSet) -> AtelierResult<()> {
    conn.execute(
        "INSERT INTO active_rule_sets (user_id, payload, created_at) VALUES (?1, ?2, ?3)",
        params![rules.user_id, to_json(rules)?, ts(&rules.created_at)],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

/// The active rule set is the newest row; ties go to the later insert.
pub fn latest_rule_set(conn: &Connection, user_id: &str) -> AtelierResult<Option<ActiveRuleSet>> {
    Ok(collect_payloads(
        conn,
        tables::ACTIVE_RULE_SETS,
        "SELECT payload FROM active_rule_sets
         WHERE user_id = ?1 ORDER BY created_at DESC, id DESC LIMIT 1",
        params![user_id],
    )?
    .into_iter()
    .next())
}
