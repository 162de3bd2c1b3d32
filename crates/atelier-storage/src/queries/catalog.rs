//! catalog_items: bounded samples, occasion buckets, upserts.

use rusqlite::{params, Connection, Row};

use atelier_core::errors::{AtelierResult, StoreError};
use atelier_core::models::{CatalogItem, ImageSet};

use crate::schema::tables;
use crate::to_store_err;

const COLUMNS: &str = "id, display_name, description, family, subfamily, color, price, images, occasion";

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<CatalogItem> {
    let images: String = row.get(7)?;
    Ok(CatalogItem {
        id: row.get(0)?,
        display_name: row.get(1)?,
        description: row.get(2)?,
        family: row.get(3)?,
        subfamily: row.get(4)?,
        color: row.get(5)?,
        price: row.get(6)?,
        images: ImageSet::from_value(&serde_json::Value::String(images)),
        occasion: row.get(8)?,
        category: None,
        display_image: None,
    })
}

fn query_items<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> AtelierResult<Vec<CatalogItem>> {
    let mut stmt = conn.prepare(sql).map_err(|e| StoreError::TableUnreachable {
        table: tables::CATALOG_ITEMS.to_string(),
        reason: e.to_string(),
    })?;
    let rows = stmt
        .query_map(params, row_to_item)
        .map_err(|e| to_store_err(e.to_string()))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_store_err(e.to_string()))
}

pub fn count(conn: &Connection) -> AtelierResult<u64> {
    conn.query_row("SELECT COUNT(*) FROM catalog_items", [], |row| row.get::<_, i64>(0))
        .map(|n| n.max(0) as u64)
        .map_err(|e| {
            StoreError::TableUnreachable {
                table: tables::CATALOG_ITEMS.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
}

pub fn sample(conn: &Connection, limit: usize) -> AtelierResult<Vec<CatalogItem>> {
    query_items(
        conn,
        &format!("SELECT {COLUMNS} FROM catalog_items ORDER BY rowid LIMIT ?1"),
        params![limit as i64],
    )
}

/// Rows tagged with `occasion` first, then untagged rows.
pub fn by_occasion(conn: &Connection, occasion: &str, limit: usize) -> AtelierResult<Vec<CatalogItem>> {
    query_items(
        conn,
        &format!(
            "SELECT {COLUMNS} FROM catalog_items
             WHERE lower(occasion) = lower(?1) OR occasion IS NULL
             ORDER BY occasion IS NULL, rowid
             LIMIT ?2"
        ),
        params![occasion, limit as i64],
    )
}

pub fn upsert(conn: &Connection, items: &[CatalogItem]) -> AtelierResult<usize> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_store_err(format!("upsert_catalog begin: {e}")))?;
    let mut written = 0;
    for item in items {
        let images = serde_json::to_string(&item.images).map_err(|e| to_store_err(e.to_string()))?;
        written += tx
            .execute(
                "INSERT INTO catalog_items
                    (id, display_name, description, family, subfamily, color, price, images, occasion)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                 ON CONFLICT(id) DO UPDATE SET
                    display_name = excluded.display_name,
                    description = excluded.description,
                    family = excluded.family,
                    subfamily = excluded.subfamily,
                    color = excluded.color,
                    price = excluded.price,
                    images = excluded.images,
                    occasion = excluded.occasion",
                params![
                    item.id,
                    item.display_name,
                    item.description,
                    item.family,
                    item.subfamily,
                    item.color,
                    item.price,
                    images,
                    item.occasion,
                ],
            )
            .map_err(|e| to_store_err(e.to_string()))?;
    }
    tx.commit()
        .map_err(|e| to_store_err(format!("upsert_catalog commit: {e}")))?;
    Ok(written)
}
