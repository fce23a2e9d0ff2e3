//! Common library for the user management application
//!
//! This crate provides the database plumbing shared by the services:
//! connection configuration read from the environment, pool construction,
//! health checks and the shared error type.
//!
//! ```rust,no_run
//! use common::database::{DatabaseConfig, init_pool, health_check};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = init_pool(&config).await?;
//!     health_check(&pool).await?;
//!     println!("Connected to {}", config.name);
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
