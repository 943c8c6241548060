//! User repository
//!
//! Lookups by email bind the normalized (lowercase) form, so callers get
//! case-insensitive matching without `lower()` in SQL.

use lightbnb_core::{Email, NewUser, User};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::error::{GatewayError, GatewayResult};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a single user by email.
    pub async fn find_by_email(&self, email: &Email) -> GatewayResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.as_ref().map(user_from_row).transpose()?)
    }

    /// Get a single user by id.
    pub async fn find_by_id(&self, id: i32) -> GatewayResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.as_ref().map(user_from_row).transpose()?)
    }

    /// Insert a user and return the stored row.
    ///
    /// No uniqueness pre-check: the `UNIQUE (email)` constraint decides, and
    /// a violation comes back as `GatewayError::Conflict`.
    pub async fn create(&self, user: &NewUser) -> GatewayResult<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(&user.password)
        .fetch_one(self.pool)
        .await
        .map_err(|e| GatewayError::from_insert("user", e))?;

        Ok(user_from_row(&row)?)
    }
}

fn user_from_row(row: &PgRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password: row.try_get("password")?,
    })
}
