//! ArtworkTag join-row operations and tag reconciliation

use artparty_common::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::collections::BTreeSet;

/// Join row linking an artwork to a tag, with the tag's label inlined for
/// serialization
#[derive(Debug, Clone)]
pub struct ArtworkTag {
    pub id: i64,
    pub artwork_id: i64,
    pub tag_id: i64,
    pub tag_label: String,
}

fn join_from_row(row: &SqliteRow) -> ArtworkTag {
    ArtworkTag {
        id: row.get("id"),
        artwork_id: row.get("artwork_id"),
        tag_id: row.get("tag_id"),
        tag_label: row.get("tag_label"),
    }
}

const JOIN_SELECT: &str = r#"
    SELECT at.id, at.artwork_id, at.tag_id, t.label AS tag_label
    FROM artwork_tags at
    JOIN tags t ON t.id = at.tag_id
"#;

/// Load all join rows
pub async fn list_artwork_tags(pool: &SqlitePool) -> Result<Vec<ArtworkTag>> {
    let rows = sqlx::query(&format!("{} ORDER BY at.id", JOIN_SELECT))
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(join_from_row).collect())
}

/// Load one join row by its own id
pub async fn get_artwork_tag(pool: &SqlitePool, id: i64) -> Result<Option<ArtworkTag>> {
    let row = sqlx::query(&format!("{} WHERE at.id = ?", JOIN_SELECT))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(join_from_row))
}

/// Load the join rows for one artwork
pub async fn tags_for_artwork(pool: &SqlitePool, artwork_id: i64) -> Result<Vec<ArtworkTag>> {
    let rows = sqlx::query(&format!(
        "{} WHERE at.artwork_id = ? ORDER BY at.id",
        JOIN_SELECT
    ))
    .bind(artwork_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(join_from_row).collect())
}

/// Insert one join row; callers resolve the artwork and tag first
pub async fn create_artwork_tag(
    pool: &SqlitePool,
    artwork_id: i64,
    tag_id: i64,
) -> Result<i64> {
    let result = sqlx::query("INSERT INTO artwork_tags (artwork_id, tag_id) VALUES (?, ?)")
        .bind(artwork_id)
        .bind(tag_id)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Delete one join row by its own id; returns false if no row matched
pub async fn delete_artwork_tag(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM artwork_tags WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Make the artwork's joined tag set equal to `target` with the minimal set
/// of join-row insertions and deletions.
///
/// Join rows whose tag is already in the target set are left untouched, so
/// their row ids survive. A target id with no tags row yet gets one lazily
/// created with an empty label; the create path rejects unknown tag ids
/// instead, and that asymmetry is intentional. Runs in one transaction, so
/// the read-modify-write is atomic per call. Idempotent: reapplying the same
/// target performs zero mutations.
///
/// The artwork id is assumed to be validated by the caller.
pub async fn reconcile_tags(pool: &SqlitePool, artwork_id: i64, target: &[i64]) -> Result<()> {
    let mut tx = pool.begin().await?;

    let current: BTreeSet<i64> =
        sqlx::query_scalar("SELECT tag_id FROM artwork_tags WHERE artwork_id = ?")
            .bind(artwork_id)
            .fetch_all(&mut *tx)
            .await?
            .into_iter()
            .collect();

    // Duplicates in the request collapse here
    let target: BTreeSet<i64> = target.iter().copied().collect();

    for &tag_id in target.difference(&current) {
        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags WHERE id = ?")
            .bind(tag_id)
            .fetch_one(&mut *tx)
            .await?;
        if exists == 0 {
            sqlx::query("INSERT INTO tags (id, label) VALUES (?, '')")
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("INSERT INTO artwork_tags (artwork_id, tag_id) VALUES (?, ?)")
            .bind(artwork_id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;
    }

    for &tag_id in current.difference(&target) {
        sqlx::query("DELETE FROM artwork_tags WHERE artwork_id = ? AND tag_id = ?")
            .bind(artwork_id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    Ok(())
}
