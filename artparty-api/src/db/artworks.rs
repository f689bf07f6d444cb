//! Artwork database operations

use artparty_common::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Artwork record
#[derive(Debug, Clone)]
pub struct Artwork {
    pub id: i64,
    pub title: String,
    pub img: String,
    pub medium: String,
    pub description: String,
    /// ISO date (YYYY-MM-DD), validated at the API boundary
    pub date: String,
    /// Age of the artist when the piece was made
    pub age: i64,
    pub featured: bool,
    pub user_id: i64,
    pub artist_id: i64,
}

/// Fields of a new artwork row
#[derive(Debug, Clone)]
pub struct NewArtwork {
    pub title: String,
    pub img: String,
    pub medium: String,
    pub description: String,
    pub date: String,
    pub age: i64,
    pub featured: bool,
    pub user_id: i64,
    pub artist_id: i64,
}

/// Optional list filters, combined with AND
#[derive(Debug, Clone, Default)]
pub struct ArtworkFilter {
    pub user_id: Option<i64>,
    pub artist_id: Option<i64>,
    pub featured: Option<bool>,
}

const COLUMNS: &str =
    "id, title, img, medium, description, date, age, featured, user_id, artist_id";

fn artwork_from_row(row: &SqliteRow) -> Artwork {
    Artwork {
        id: row.get("id"),
        title: row.get("title"),
        img: row.get("img"),
        medium: row.get("medium"),
        description: row.get("description"),
        date: row.get("date"),
        age: row.get("age"),
        featured: row.get::<i64, _>("featured") != 0,
        user_id: row.get("user_id"),
        artist_id: row.get("artist_id"),
    }
}

/// Load artworks matching the filter
pub async fn list_artworks(pool: &SqlitePool, filter: &ArtworkFilter) -> Result<Vec<Artwork>> {
    let mut sql = format!("SELECT {} FROM artworks", COLUMNS);
    let mut clauses = Vec::new();
    let mut binds = Vec::new();

    if let Some(user_id) = filter.user_id {
        clauses.push("user_id = ?");
        binds.push(user_id);
    }
    if let Some(artist_id) = filter.artist_id {
        clauses.push("artist_id = ?");
        binds.push(artist_id);
    }
    if let Some(featured) = filter.featured {
        clauses.push("featured = ?");
        binds.push(featured as i64);
    }

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY id");

    let mut query = sqlx::query(&sql);
    for value in binds {
        query = query.bind(value);
    }

    let rows = query.fetch_all(pool).await?;
    Ok(rows.iter().map(artwork_from_row).collect())
}

/// Load artwork by id
pub async fn get_artwork(pool: &SqlitePool, id: i64) -> Result<Option<Artwork>> {
    let row = sqlx::query(&format!("SELECT {} FROM artworks WHERE id = ?", COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(artwork_from_row))
}

/// Insert a new artwork and return the stored record
pub async fn create_artwork(pool: &SqlitePool, new: &NewArtwork) -> Result<Artwork> {
    let result = sqlx::query(
        r#"
        INSERT INTO artworks (title, img, medium, description, date, age, featured, user_id, artist_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new.title)
    .bind(&new.img)
    .bind(&new.medium)
    .bind(&new.description)
    .bind(&new.date)
    .bind(new.age)
    .bind(new.featured as i64)
    .bind(new.user_id)
    .bind(new.artist_id)
    .execute(pool)
    .await?;

    Ok(Artwork {
        id: result.last_insert_rowid(),
        title: new.title.clone(),
        img: new.img.clone(),
        medium: new.medium.clone(),
        description: new.description.clone(),
        date: new.date.clone(),
        age: new.age,
        featured: new.featured,
        user_id: new.user_id,
        artist_id: new.artist_id,
    })
}

/// Write all fields of an existing artwork back to the database
pub async fn save_artwork(pool: &SqlitePool, artwork: &Artwork) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE artworks
        SET title = ?, img = ?, medium = ?, description = ?, date = ?,
            age = ?, featured = ?, user_id = ?, artist_id = ?
        WHERE id = ?
        "#,
    )
    .bind(&artwork.title)
    .bind(&artwork.img)
    .bind(&artwork.medium)
    .bind(&artwork.description)
    .bind(&artwork.date)
    .bind(artwork.age)
    .bind(artwork.featured as i64)
    .bind(artwork.user_id)
    .bind(artwork.artist_id)
    .bind(artwork.id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete artwork by id; returns false if no row matched.
///
/// Join rows for the artwork go with it via ON DELETE CASCADE.
pub async fn delete_artwork(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM artworks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::artists::create_artist;
    use crate::db::users::create_user;
    use artparty_common::db::init_memory_database;

    async fn seed(pool: &SqlitePool) -> (i64, i64) {
        let user = create_user(pool, "Alice", "a@x", "", "uid-a").await.unwrap();
        let artist = create_artist(pool, "Kid", "", user.id).await.unwrap();
        (user.id, artist.id)
    }

    fn new_artwork(title: &str, featured: bool, user_id: i64, artist_id: i64) -> NewArtwork {
        NewArtwork {
            title: title.to_string(),
            img: String::new(),
            medium: "crayon".to_string(),
            description: String::new(),
            date: "2024-03-01".to_string(),
            age: 6,
            featured,
            user_id,
            artist_id,
        }
    }

    #[tokio::test]
    async fn filters_combine_with_and() {
        let pool = init_memory_database().await.unwrap();
        let (user_id, artist_id) = seed(&pool).await;
        let other_user = create_user(&pool, "Bob", "b@x", "", "uid-b").await.unwrap();
        let other_artist = create_artist(&pool, "Sib", "", other_user.id).await.unwrap();

        create_artwork(&pool, &new_artwork("one", true, user_id, artist_id))
            .await
            .unwrap();
        create_artwork(&pool, &new_artwork("two", false, user_id, artist_id))
            .await
            .unwrap();
        create_artwork(&pool, &new_artwork("three", true, other_user.id, other_artist.id))
            .await
            .unwrap();

        let all = list_artworks(&pool, &ArtworkFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let featured = list_artworks(
            &pool,
            &ArtworkFilter {
                featured: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(featured.len(), 2);

        let featured_for_user = list_artworks(
            &pool,
            &ArtworkFilter {
                user_id: Some(user_id),
                featured: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(featured_for_user.len(), 1);
        assert_eq!(featured_for_user[0].title, "one");
    }

    #[tokio::test]
    async fn save_round_trips_every_field() {
        let pool = init_memory_database().await.unwrap();
        let (user_id, artist_id) = seed(&pool).await;

        let mut artwork = create_artwork(&pool, &new_artwork("one", false, user_id, artist_id))
            .await
            .unwrap();
        artwork.title = "renamed".to_string();
        artwork.featured = true;
        artwork.age = 7;
        save_artwork(&pool, &artwork).await.unwrap();

        let reloaded = get_artwork(&pool, artwork.id).await.unwrap().unwrap();
        assert_eq!(reloaded.title, "renamed");
        assert!(reloaded.featured);
        assert_eq!(reloaded.age, 7);
        assert_eq!(reloaded.date, "2024-03-01");
    }
}
