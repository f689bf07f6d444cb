//! Tag database operations

use artparty_common::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Tag record
#[derive(Debug, Clone)]
pub struct Tag {
    pub id: i64,
    pub label: String,
}

fn tag_from_row(row: &SqliteRow) -> Tag {
    Tag {
        id: row.get("id"),
        label: row.get("label"),
    }
}

/// Load all tags
pub async fn list_tags(pool: &SqlitePool) -> Result<Vec<Tag>> {
    let rows = sqlx::query("SELECT id, label FROM tags ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(tag_from_row).collect())
}

/// Load tag by id
pub async fn get_tag(pool: &SqlitePool, id: i64) -> Result<Option<Tag>> {
    let row = sqlx::query("SELECT id, label FROM tags WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(tag_from_row))
}

/// Insert a new tag and return the stored record
pub async fn create_tag(pool: &SqlitePool, label: &str) -> Result<Tag> {
    let result = sqlx::query("INSERT INTO tags (label) VALUES (?)")
        .bind(label)
        .execute(pool)
        .await?;

    Ok(Tag {
        id: result.last_insert_rowid(),
        label: label.to_string(),
    })
}
