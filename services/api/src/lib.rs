//! User management HTTP service
//!
//! A [`store::UserStore`] facade over the `users` table and the axum routes
//! that expose it behind a uniform JSON [`envelope::Envelope`].

pub mod envelope;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use state::AppState;
