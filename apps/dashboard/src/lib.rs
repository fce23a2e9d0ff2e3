//! Client state for the user management dashboard
//!
//! The dashboard keeps the full user list in memory together with at most one
//! row being edited. [`state::DashboardState`] holds that data and changes only
//! through [`state::Action`]s; [`controller::Controller`] performs the network
//! calls through an [`api::UsersApi`] and feeds their outcomes back as actions.
//! Rendering is left to whichever UI layer embeds this crate.

pub mod api;
pub mod controller;
pub mod models;
pub mod state;

pub use api::{API_BASE_URL, ClientError, HttpUsersApi, UsersApi};
pub use controller::Controller;
pub use models::{Field, Row, RowKey, User, UserForm};
pub use state::{Action, DashboardState};
