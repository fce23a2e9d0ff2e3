//! Client-side data model
//!
//! Wire types mirror the JSON the user API speaks. The edit form is a separate
//! type: it carries a password the server never stores, and the only way to
//! turn it into a request body is through [`UserForm::to_new_user`] or
//! [`UserForm::to_patch`].

use serde::{Deserialize, Serialize};

/// User as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Body of an update request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// `{success, data | message | error}` body shared by every route
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Editable fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
}

/// Values held by the edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    /// Collected by the form but never sent: the server has no such column.
    pub password: String,
}

impl UserForm {
    /// Both persisted fields are filled in
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    pub fn to_patch(&self) -> UserPatch {
        UserPatch {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
        }
    }
}

/// Identity of a row in the local list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// Row known to the server under this id
    Persisted(i32),
    /// Local-only row that has never been saved
    Draft(i64),
}

impl RowKey {
    pub fn is_draft(&self) -> bool {
        matches!(self, RowKey::Draft(_))
    }

    /// Number shown in the id column
    pub fn display_id(&self) -> i64 {
        match *self {
            RowKey::Persisted(id) => i64::from(id),
            RowKey::Draft(n) => n,
        }
    }
}

/// One line of the user table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: RowKey,
    pub name: String,
    pub email: String,
}

impl Row {
    pub fn draft(n: i64) -> Self {
        Self {
            key: RowKey::Draft(n),
            name: String::new(),
            email: String::new(),
        }
    }

    pub fn form(&self) -> UserForm {
        UserForm {
            name: self.name.clone(),
            email: self.email.clone(),
            password: String::new(),
        }
    }
}

impl From<User> for Row {
    fn from(user: User) -> Self {
        Self {
            key: RowKey::Persisted(user.id),
            name: user.name,
            email: user.email,
        }
    }
}
