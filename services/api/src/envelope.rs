//! Uniform `{success, data | message | error}` response body

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiResult;

/// JSON envelope returned by every user route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Build the response for a route.
///
/// Failures keep the route's status code: the envelope's `success` flag is
/// what tells the caller whether the operation went through.
pub fn respond<T: Serialize>(status: StatusCode, result: ApiResult<Envelope<T>>) -> Response {
    match result {
        Ok(envelope) => (status, Json(envelope)).into_response(),
        Err(err) => {
            debug!("Replying with failure envelope: {}", err);
            (status, Json(Envelope::<T>::failure(err.to_string()))).into_response()
        }
    }
}
