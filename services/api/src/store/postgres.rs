//! PostgreSQL-backed user store

use async_trait::async_trait;
use common::error::DatabaseError;
use sqlx::PgPool;
use tracing::info;

use super::{StoreResult, UserStore};
use crate::models::{NewUser, User, UserPatch};

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL
    )
"#;

/// User store for database operations
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create a new user store
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `users` table when it does not exist yet
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_USERS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        info!("users table is ready");
        Ok(())
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }

    async fn create_user(&self, new_user: &NewUser) -> StoreResult<User> {
        info!("Creating new user: {}", new_user.email);

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }

    async fn update_user(&self, id: i32, patch: &UserPatch) -> StoreResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email)
            WHERE id = $1
            RETURNING id, name, email
            "#,
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.email)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }

    async fn delete_user(&self, id: i32) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        info!("Deleted {} row(s) for user {}", result.rows_affected(), id);
        Ok(())
    }
}
