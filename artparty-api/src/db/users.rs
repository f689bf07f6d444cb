//! User database operations

use artparty_common::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// User record
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub img: String,
    /// External-auth identifier assigned by the login provider
    pub uid: String,
}

fn user_from_row(row: &SqliteRow) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        img: row.get("img"),
        uid: row.get("uid"),
    }
}

/// Load all users
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, name, email, img, uid FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(user_from_row).collect())
}

/// Load user by id
pub async fn get_user(pool: &SqlitePool, id: i64) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, email, img, uid FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(user_from_row))
}

/// Load user by external-auth uid
pub async fn find_user_by_uid(pool: &SqlitePool, uid: &str) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, email, img, uid FROM users WHERE uid = ? LIMIT 1")
        .bind(uid)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(user_from_row))
}

/// Insert a new user and return the stored record
pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    img: &str,
    uid: &str,
) -> Result<User> {
    let result = sqlx::query("INSERT INTO users (name, email, img, uid) VALUES (?, ?, ?, ?)")
        .bind(name)
        .bind(email)
        .bind(img)
        .bind(uid)
        .execute(pool)
        .await?;

    Ok(User {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        email: email.to_string(),
        img: img.to_string(),
        uid: uid.to_string(),
    })
}

/// Write all fields of an existing user back to the database
pub async fn save_user(pool: &SqlitePool, user: &User) -> Result<()> {
    sqlx::query("UPDATE users SET name = ?, email = ?, img = ?, uid = ? WHERE id = ?")
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.img)
        .bind(&user.uid)
        .bind(user.id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete user by id; returns false if no row matched
pub async fn delete_user(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
