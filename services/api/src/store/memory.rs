//! In-process user store

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{StoreResult, UserStore};
use crate::models::{NewUser, User, UserPatch};

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: Vec<User>,
}

/// User store kept in memory, with ids handed out from a counter
#[derive(Default)]
pub struct MemoryUserStore {
    table: Mutex<Table>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `users`; the id counter continues after the largest id
    pub fn with_users(users: Vec<User>) -> Self {
        let last_id = users.iter().map(|u| u.id).max().unwrap_or(0);
        Self {
            table: Mutex::new(Table {
                last_id,
                rows: users,
            }),
        }
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        // No operation leaves the table half-written, so a poisoned lock is still usable.
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.table().rows.clone())
    }

    async fn create_user(&self, new_user: &NewUser) -> StoreResult<User> {
        let mut table = self.table();
        table.last_id += 1;
        let user = User {
            id: table.last_id,
            name: new_user.name.clone(),
            email: new_user.email.clone(),
        };
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: i32, patch: &UserPatch) -> StoreResult<Vec<User>> {
        let mut table = self.table();
        let updated = table
            .rows
            .iter_mut()
            .filter(|u| u.id == id)
            .map(|u| {
                patch.apply_to(u);
                u.clone()
            })
            .collect();
        Ok(updated)
    }

    async fn delete_user(&self, id: i32) -> StoreResult<()> {
        self.table().rows.retain(|u| u.id != id);
        Ok(())
    }
}
