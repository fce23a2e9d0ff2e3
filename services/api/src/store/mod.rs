//! User store facade
//!
//! Four operations over the `users(id, name, email)` relation. Implementations
//! report database failures as [`StoreError`]; a missing row is never an error.

use async_trait::async_trait;

use crate::models::{NewUser, User, UserPatch};

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

/// Error raised by a store operation
pub type StoreError = common::error::DatabaseError;

/// Type alias for store results
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage backend for users
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All rows, in whatever order the backend yields them
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Insert a row and return it with its generated id
    async fn create_user(&self, new_user: &NewUser) -> StoreResult<User>;

    /// Apply `patch` to the row matching `id`.
    ///
    /// Returns every row the update touched; an empty vector means no row matched.
    async fn update_user(&self, id: i32, patch: &UserPatch) -> StoreResult<Vec<User>>;

    /// Remove the row matching `id`. Deleting a missing row succeeds.
    async fn delete_user(&self, id: i32) -> StoreResult<()>;
}
