//! Custom error types for the API service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{envelope::respond, store::StoreError};

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// The targeted user does not exist
    #[error("User not found")]
    NotFound,

    /// The store failed; the message is passed through to the caller
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        respond::<()>(StatusCode::OK, Err(self))
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
