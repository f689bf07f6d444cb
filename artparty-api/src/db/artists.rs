//! Artist database operations

use artparty_common::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Artist record
#[derive(Debug, Clone)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub img: String,
    pub user_id: i64,
}

fn artist_from_row(row: &SqliteRow) -> Artist {
    Artist {
        id: row.get("id"),
        name: row.get("name"),
        img: row.get("img"),
        user_id: row.get("user_id"),
    }
}

/// Load artists, optionally restricted to one owning user.
///
/// Existence of the user is the caller's concern; an unknown id here simply
/// matches no rows.
pub async fn list_artists(pool: &SqlitePool, user_id: Option<i64>) -> Result<Vec<Artist>> {
    let rows = match user_id {
        Some(user_id) => {
            sqlx::query("SELECT id, name, img, user_id FROM artists WHERE user_id = ? ORDER BY id")
                .bind(user_id)
                .fetch_all(pool)
                .await?
        }
        None => {
            sqlx::query("SELECT id, name, img, user_id FROM artists ORDER BY id")
                .fetch_all(pool)
                .await?
        }
    };

    Ok(rows.iter().map(artist_from_row).collect())
}

/// Load artist by id
pub async fn get_artist(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let row = sqlx::query("SELECT id, name, img, user_id FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(artist_from_row))
}

/// Insert a new artist and return the stored record
pub async fn create_artist(
    pool: &SqlitePool,
    name: &str,
    img: &str,
    user_id: i64,
) -> Result<Artist> {
    let result = sqlx::query("INSERT INTO artists (name, img, user_id) VALUES (?, ?, ?)")
        .bind(name)
        .bind(img)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(Artist {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        img: img.to_string(),
        user_id,
    })
}

/// Write all fields of an existing artist back to the database
pub async fn save_artist(pool: &SqlitePool, artist: &Artist) -> Result<()> {
    sqlx::query("UPDATE artists SET name = ?, img = ?, user_id = ? WHERE id = ?")
        .bind(&artist.name)
        .bind(&artist.img)
        .bind(artist.user_id)
        .bind(artist.id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete artist by id; returns false if no row matched
pub async fn delete_artist(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::users::create_user;
    use artparty_common::db::init_memory_database;

    #[tokio::test]
    async fn list_filters_by_owning_user() {
        let pool = init_memory_database().await.unwrap();

        let alice = create_user(&pool, "Alice", "a@x", "", "uid-a").await.unwrap();
        let bob = create_user(&pool, "Bob", "b@x", "", "uid-b").await.unwrap();
        create_artist(&pool, "Kid One", "", alice.id).await.unwrap();
        create_artist(&pool, "Kid Two", "", alice.id).await.unwrap();
        create_artist(&pool, "Kid Three", "", bob.id).await.unwrap();

        let all = list_artists(&pool, None).await.unwrap();
        assert_eq!(all.len(), 3);

        let alices = list_artists(&pool, Some(alice.id)).await.unwrap();
        assert_eq!(alices.len(), 2);
        assert!(alices.iter().all(|a| a.user_id == alice.id));
    }

    #[tokio::test]
    async fn save_can_move_artist_to_another_user() {
        let pool = init_memory_database().await.unwrap();

        let alice = create_user(&pool, "Alice", "a@x", "", "uid-a").await.unwrap();
        let bob = create_user(&pool, "Bob", "b@x", "", "uid-b").await.unwrap();
        let mut artist = create_artist(&pool, "Kid", "", alice.id).await.unwrap();

        artist.user_id = bob.id;
        save_artist(&pool, &artist).await.unwrap();

        let reloaded = get_artist(&pool, artist.id).await.unwrap().unwrap();
        assert_eq!(reloaded.user_id, bob.id);
    }
}
