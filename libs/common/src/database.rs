//! Database module for handling PostgreSQL connections and operations
//!
//! This module provides connection configuration, pooling and health checks
//! for the PostgreSQL database.

use crate::error::{DatabaseError, DatabaseResult};
use config::{Config, Environment};
use serde::Deserialize;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use tracing::info;

/// Database configuration struct
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Host name of the PostgreSQL server
    pub host: String,
    /// TCP port of the PostgreSQL server
    pub port: u16,
    /// Role used to connect
    pub user: String,
    /// Password of the role
    pub password: String,
    /// Database name
    pub name: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Create a new DatabaseConfig from environment variables
    ///
    /// # Environment Variables
    /// - `DB_HOST`: server host (default: "localhost")
    /// - `DB_PORT`: server port (default: 5432)
    /// - `DB_USER`: role name (default: "postgres")
    /// - `DB_PASSWORD`: role password (default: "postgres")
    /// - `DB_NAME`: database name (default: "users")
    /// - `DB_MAX_CONNECTIONS`: maximum number of connections (default: 5)
    pub fn from_env() -> DatabaseResult<Self> {
        let config = Config::builder()
            .set_default("host", "localhost")?
            .set_default("port", 5432)?
            .set_default("user", "postgres")?
            .set_default("password", "postgres")?
            .set_default("name", "users")?
            .set_default("max_connections", 5)?
            .add_source(Environment::with_prefix("DB"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Connection options derived from the configuration
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

/// Initialize a PostgreSQL connection pool
///
/// # Arguments
///
/// * `config` - Database configuration
///
/// # Returns
///
/// * `DatabaseResult<PgPool>` - PostgreSQL connection pool or error
pub async fn init_pool(config: &DatabaseConfig) -> DatabaseResult<PgPool> {
    info!(
        "Connecting to PostgreSQL at {}:{}/{}",
        config.host, config.port, config.name
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await
        .map_err(DatabaseError::Connection)
}

/// Check database connectivity by running `SELECT 1`; an unreachable
/// server surfaces as [`DatabaseError::Query`].
pub async fn health_check(pool: &PgPool) -> DatabaseResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(DatabaseError::Query)?;

    Ok(())
}
