//! Dashboard state and the transitions that change it
//!
//! Every change to the local user list goes through [`DashboardState::apply`].
//! Network completions arrive as actions too, so interleavings such as two
//! overlapping refreshes are plain sequences of `apply` calls: whichever
//! `Loaded` is applied last wins.

use crate::models::{Field, Row, RowKey, User, UserForm};

/// Message shown when saving with an incomplete form
pub const INCOMPLETE_FORM: &str = "Please fill all fields";

/// Something that happened to the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A fetch of the full list went out
    FetchStarted,
    /// A fetch of the full list completed
    Loaded(Result<Vec<User>, String>),
    /// A blank draft row was requested
    Added,
    /// The row was opened for editing
    Edited(RowKey),
    FieldChanged(Field, String),
    /// The server accepted the row being edited under `key`
    Saved { key: RowKey, user: User },
    /// The server answered the save with a refusal; editing ends, rows stay as they were
    SaveRejected(String),
    /// Editing was abandoned
    Cancelled,
    /// The row is gone, locally and (for persisted rows) on the server
    Deleted(RowKey),
    /// An operation failed with this message
    Failed(String),
    ErrorDismissed,
}

/// Everything the user table renders from
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    rows: Vec<Row>,
    editing: Option<RowKey>,
    form: UserForm,
    loading: bool,
    error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            editing: None,
            form: UserForm::default(),
            loading: true,
            error: None,
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, key: RowKey) -> Option<&Row> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn editing(&self) -> Option<RowKey> {
        self.editing
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number for the next draft: one past the largest id on screen.
    fn next_draft_number(&self) -> i64 {
        self.rows
            .iter()
            .map(|row| row.key.display_id())
            .max()
            .unwrap_or(0)
            + 1
    }

    fn stop_editing(&mut self) {
        self.editing = None;
        self.form = UserForm::default();
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::FetchStarted => {
                self.loading = true;
                self.error = None;
            }
            Action::Loaded(Ok(users)) => {
                self.loading = false;
                self.rows = users.into_iter().map(Row::from).collect();
                if let Some(key) = self.editing {
                    if self.row(key).is_none() {
                        self.stop_editing();
                    }
                }
            }
            Action::Loaded(Err(message)) => {
                self.loading = false;
                self.error = Some(message);
            }
            Action::Added => {
                let row = Row::draft(self.next_draft_number());
                self.editing = Some(row.key);
                self.form = row.form();
                self.rows.push(row);
            }
            Action::Edited(key) => {
                if let Some(form) = self.row(key).map(Row::form) {
                    self.editing = Some(key);
                    self.form = form;
                }
            }
            Action::FieldChanged(field, value) => self.form.set(field, value),
            Action::Saved { key, user } => {
                let saved = RowKey::Persisted(user.id);
                let slot = self
                    .rows
                    .iter()
                    .position(|row| row.key == key)
                    .or_else(|| self.rows.iter().position(|row| row.key == saved));
                match slot {
                    Some(index) => self.rows[index] = Row::from(user),
                    None => self.rows.push(Row::from(user)),
                }
                self.stop_editing();
            }
            Action::SaveRejected(message) => {
                self.error = Some(message);
                self.stop_editing();
            }
            Action::Cancelled => {
                if let Some(key) = self.editing.filter(RowKey::is_draft) {
                    self.rows.retain(|row| row.key != key);
                }
                self.stop_editing();
            }
            Action::Deleted(key) => {
                self.rows.retain(|row| row.key != key);
                if self.editing == Some(key) {
                    self.stop_editing();
                }
            }
            Action::Failed(message) => self.error = Some(message),
            Action::ErrorDismissed => self.error = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i32, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@test.com", name.to_lowercase()),
        }
    }

    fn loaded(users: Vec<User>) -> DashboardState {
        let mut state = DashboardState::new();
        state.apply(Action::FetchStarted);
        state.apply(Action::Loaded(Ok(users)));
        state
    }

    #[test]
    fn starts_loading() {
        let state = DashboardState::new();
        assert!(state.is_loading());
        assert!(state.rows().is_empty());
    }

    #[test]
    fn load_failure_keeps_rows_and_stops_loading() {
        let mut state = loaded(vec![user(1, "John")]);
        state.apply(Action::FetchStarted);
        state.apply(Action::Loaded(Err("Failed to fetch users".to_string())));

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("Failed to fetch users"));
        assert_eq!(state.rows().len(), 1);
    }

    #[test]
    fn overlapping_loads_last_applied_wins() {
        let mut state = DashboardState::new();
        state.apply(Action::FetchStarted);
        state.apply(Action::FetchStarted);
        state.apply(Action::Loaded(Ok(vec![user(1, "John"), user(2, "Jane")])));
        state.apply(Action::Loaded(Ok(vec![user(1, "John")])));

        assert_eq!(state.rows().len(), 1);
        assert!(!state.is_loading());
    }

    #[test]
    fn add_creates_draft_after_largest_id() {
        let mut state = loaded(vec![user(3, "John"), user(7, "Jane")]);
        state.apply(Action::Added);

        let draft = state.rows().last().unwrap();
        assert_eq!(draft.key, RowKey::Draft(8));
        assert_eq!(state.editing(), Some(RowKey::Draft(8)));
        assert_eq!(state.form(), &UserForm::default());

        state.apply(Action::Added);
        assert_eq!(state.editing(), Some(RowKey::Draft(9)));
    }

    #[test]
    fn add_on_empty_list_starts_at_one() {
        let mut state = loaded(vec![]);
        state.apply(Action::Added);
        assert_eq!(state.rows()[0].key, RowKey::Draft(1));
    }

    #[test]
    fn edit_seeds_form_from_row() {
        let mut state = loaded(vec![user(1, "John")]);
        state.apply(Action::Edited(RowKey::Persisted(1)));

        assert_eq!(state.editing(), Some(RowKey::Persisted(1)));
        assert_eq!(state.form().name, "John");
        assert_eq!(state.form().email, "john@test.com");
    }

    #[test]
    fn edit_of_unknown_row_is_ignored() {
        let mut state = loaded(vec![user(1, "John")]);
        state.apply(Action::Edited(RowKey::Persisted(5)));
        assert_eq!(state.editing(), None);
    }

    #[test]
    fn saved_draft_is_replaced_in_place() {
        let mut state = loaded(vec![user(1, "John"), user(2, "Jane")]);
        state.apply(Action::Added);
        state.apply(Action::Saved {
            key: RowKey::Draft(3),
            user: user(17, "Ann"),
        });

        let keys: Vec<RowKey> = state.rows().iter().map(|row| row.key).collect();
        assert_eq!(
            keys,
            vec![
                RowKey::Persisted(1),
                RowKey::Persisted(2),
                RowKey::Persisted(17)
            ]
        );
        assert_eq!(state.editing(), None);
        assert_eq!(state.form(), &UserForm::default());
    }

    #[test]
    fn saved_row_that_vanished_is_not_duplicated() {
        let mut state = loaded(vec![user(1, "John")]);
        state.apply(Action::Added);
        // A refresh lands after the create: the draft is gone, the new row is there.
        state.apply(Action::Loaded(Ok(vec![user(1, "John"), user(2, "Ann")])));
        state.apply(Action::Saved {
            key: RowKey::Draft(2),
            user: user(2, "Ann"),
        });

        assert_eq!(state.rows().len(), 2);
    }

    #[test]
    fn save_rejection_ends_editing_but_keeps_rows() {
        let mut state = loaded(vec![user(1, "John")]);
        state.apply(Action::Edited(RowKey::Persisted(1)));
        state.apply(Action::FieldChanged(Field::Name, "X".to_string()));
        state.apply(Action::SaveRejected("User not found".to_string()));

        assert_eq!(state.editing(), None);
        assert_eq!(state.form(), &UserForm::default());
        assert_eq!(state.error(), Some("User not found"));
        assert_eq!(state.rows()[0].name, "John");
    }

    #[test]
    fn reload_drops_edit_target_that_disappeared() {
        let mut state = loaded(vec![user(1, "John")]);
        state.apply(Action::Added);
        state.apply(Action::Loaded(Ok(vec![user(1, "John")])));

        assert_eq!(state.editing(), None);
        assert_eq!(state.rows().len(), 1);
    }

    #[test]
    fn cancel_discards_draft() {
        let mut state = loaded(vec![user(1, "John")]);
        state.apply(Action::Added);
        state.apply(Action::FieldChanged(Field::Name, "Half typed".to_string()));
        state.apply(Action::Cancelled);

        assert_eq!(state.rows().len(), 1);
        assert_eq!(state.editing(), None);
        assert_eq!(state.form(), &UserForm::default());
    }

    #[test]
    fn cancel_keeps_persisted_row_untouched() {
        let mut state = loaded(vec![user(1, "John")]);
        state.apply(Action::Edited(RowKey::Persisted(1)));
        state.apply(Action::FieldChanged(Field::Name, "Changed".to_string()));
        state.apply(Action::Cancelled);

        assert_eq!(state.rows()[0].name, "John");
        assert_eq!(state.editing(), None);
    }

    #[test]
    fn delete_of_edited_row_exits_edit_mode() {
        let mut state = loaded(vec![user(1, "John"), user(2, "Jane")]);
        state.apply(Action::Edited(RowKey::Persisted(2)));
        state.apply(Action::Deleted(RowKey::Persisted(2)));

        assert_eq!(state.rows().len(), 1);
        assert_eq!(state.editing(), None);
    }

    #[test]
    fn delete_of_other_row_keeps_edit_mode() {
        let mut state = loaded(vec![user(1, "John"), user(2, "Jane")]);
        state.apply(Action::Edited(RowKey::Persisted(2)));
        state.apply(Action::Deleted(RowKey::Persisted(1)));

        assert_eq!(state.editing(), Some(RowKey::Persisted(2)));
    }

    #[test]
    fn errors_are_dismissible() {
        let mut state = loaded(vec![]);
        state.apply(Action::Failed(INCOMPLETE_FORM.to_string()));
        assert_eq!(state.error(), Some(INCOMPLETE_FORM));
        state.apply(Action::ErrorDismissed);
        assert_eq!(state.error(), None);
    }
}
