//! Async driver that turns user intents into API calls and state actions

use tracing::warn;

use crate::{
    api::{ClientError, UsersApi},
    models::{Field, RowKey},
    state::{Action, DashboardState, INCOMPLETE_FORM},
};

/// Owns the dashboard state and the API it is synchronized with
pub struct Controller<A> {
    api: A,
    state: DashboardState,
}

impl<A: UsersApi> Controller<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: DashboardState::new(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn dispatch(&mut self, action: Action) {
        self.state.apply(action);
    }

    /// Initial load
    pub async fn mount(&mut self) {
        self.fetch_all().await;
    }

    pub async fn fetch_all(&mut self) {
        self.dispatch(Action::FetchStarted);
        let result = self.api.list_users().await.map_err(|e| {
            warn!("Error fetching users: {}", e);
            e.to_string()
        });
        self.dispatch(Action::Loaded(result));
    }

    pub async fn refresh(&mut self) {
        self.fetch_all().await;
    }

    /// Append a blank draft row and start editing it. Nothing is sent yet.
    pub fn add(&mut self) {
        self.dispatch(Action::ErrorDismissed);
        self.dispatch(Action::Added);
    }

    pub fn edit(&mut self, key: RowKey) {
        self.dispatch(Action::Edited(key));
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(Action::FieldChanged(field, value.into()));
    }

    /// Persist the row being edited: drafts are created, persisted rows updated.
    ///
    /// An incomplete form is refused locally. A save the server accepts is
    /// followed by a full refresh. A save the server refuses ends editing; a
    /// request that never got an answer leaves the row in edit mode.
    pub async fn save(&mut self) {
        let key = match self.state.editing() {
            Some(key) if self.state.form().is_complete() => key,
            _ => {
                self.dispatch(Action::Failed(INCOMPLETE_FORM.to_string()));
                return;
            }
        };
        self.dispatch(Action::ErrorDismissed);

        let form = self.state.form();
        let result = match key {
            RowKey::Draft(_) => self.api.create_user(&form.to_new_user()).await,
            RowKey::Persisted(id) => self.api.update_user(id, &form.to_patch()).await,
        };

        match result {
            Ok(user) => {
                self.dispatch(Action::Saved { key, user });
                self.fetch_all().await;
            }
            Err(ClientError::Rejected(message)) => {
                warn!("Save rejected: {}", message);
                self.dispatch(Action::SaveRejected(message));
            }
            Err(e) => {
                warn!("Error saving user: {}", e);
                self.dispatch(Action::Failed(e.to_string()));
            }
        }
    }

    pub fn cancel(&mut self) {
        self.dispatch(Action::Cancelled);
    }

    /// Delete a row. Drafts were never sent, so they are only dropped locally.
    pub async fn delete(&mut self, key: RowKey) {
        self.dispatch(Action::ErrorDismissed);

        if let RowKey::Persisted(id) = key {
            if let Err(e) = self.api.delete_user(id).await {
                warn!("Error deleting user: {}", e);
                self.dispatch(Action::Failed(e.to_string()));
                return;
            }
        }
        self.dispatch(Action::Deleted(key));
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch(Action::ErrorDismissed);
    }
}
