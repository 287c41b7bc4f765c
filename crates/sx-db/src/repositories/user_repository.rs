use crate::repositories::{parse_timestamp, parse_uuid};
use crate::Result as DbErrorResult;

use sx_core::{OfferedSkill, RatingSummary, User, WantedSkill};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, name, email, password_hash, location, bio, points, \
     skills_offered, skills_wanted, rating_average, rating_count, created_at, updated_at";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let skills_offered = serde_json::to_string(&user.skills_offered)?;
        let skills_wanted = serde_json::to_string(&user.skills_wanted)?;

        sqlx::query(
            r#"
              INSERT INTO users (
                  id, name, email, password_hash, location, bio, points,
                  skills_offered, skills_wanted, rating_average, rating_count,
                  created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.location)
        .bind(&user.bio)
        .bind(user.points)
        .bind(skills_offered)
        .bind(skills_wanted)
        .bind(user.rating.average)
        .bind(user.rating.count)
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE id = ?",
            USER_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE email = ?",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    pub async fn list_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM users ORDER BY created_at ASC, id ASC",
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_user).collect()
    }

    /// Persist name, location, bio and the two skill lists
    pub async fn update_profile(&self, user: &User) -> DbErrorResult<()> {
        let skills_offered = serde_json::to_string(&user.skills_offered)?;
        let skills_wanted = serde_json::to_string(&user.skills_wanted)?;

        sqlx::query(
            r#"
              UPDATE users
              SET name = ?, location = ?, bio = ?,
                  skills_offered = ?, skills_wanted = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&user.name)
        .bind(&user.location)
        .bind(&user.bio)
        .bind(skills_offered)
        .bind(skills_wanted)
        .bind(Utc::now().timestamp())
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Additive balance change; negative deltas are not floored
    pub async fn adjust_points(&self, id: Uuid, delta: i64) -> DbErrorResult<()> {
        sqlx::query("UPDATE users SET points = points + ?, updated_at = ? WHERE id = ?")
            .bind(delta)
            .bind(Utc::now().timestamp())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn set_rating(&self, id: Uuid, rating: RatingSummary) -> DbErrorResult<()> {
        sqlx::query(
            "UPDATE users SET rating_average = ?, rating_count = ?, updated_at = ? WHERE id = ?",
        )
        .bind(rating.average)
        .bind(rating.count)
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn row_to_user(row: &SqliteRow) -> DbErrorResult<User> {
    let skills_offered: Vec<OfferedSkill> =
        serde_json::from_str(&row.try_get::<String, _>("skills_offered")?)?;
    let skills_wanted: Vec<WantedSkill> =
        serde_json::from_str(&row.try_get::<String, _>("skills_wanted")?)?;

    Ok(User {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        location: row.try_get("location")?,
        bio: row.try_get("bio")?,
        points: row.try_get("points")?,
        skills_offered,
        skills_wanted,
        rating: RatingSummary {
            average: row.try_get("rating_average")?,
            count: row.try_get("rating_count")?,
        },
        created_at: parse_timestamp(row.try_get("created_at")?)?,
        updated_at: parse_timestamp(row.try_get("updated_at")?)?,
    })
}
