//! User management routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderValue, Method, StatusCode, header},
    response::Response,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, error};

use crate::{
    AppState,
    envelope::{Envelope, respond},
    error::ApiError,
    models::{NewUser, UserPatch},
};

/// Origin of the browser frontend allowed to call the API
pub const ALLOWED_ORIGIN: &str = "http://localhost:4173";

/// Body of `GET /`
pub const GREETING: &str = "Hello World!";

/// Create the router for the user API
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/users", get(get_users))
        .route("/createUser", post(create_user))
        .route("/updateUser/:id", put(update_user))
        .route("/deleteUser/:id", delete(delete_user))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(HeaderValue::from_static(ALLOWED_ORIGIN))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Lenient id coercion: anything that is not an integer matches no row.
fn coerce_id(raw: &str) -> Option<i32> {
    let id = raw.trim().parse().ok();
    if id.is_none() {
        debug!("Path id {:?} is not numeric", raw);
    }
    id
}

pub async fn hello() -> &'static str {
    GREETING
}

/// Get all users
pub async fn get_users(State(state): State<AppState>) -> Response {
    let result = state.store.list_users().await.map(Envelope::data).map_err(|e| {
        error!("Failed to get users: {}", e);
        ApiError::from(e)
    });

    respond(StatusCode::OK, result)
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Response {
    let result = state
        .store
        .create_user(&payload)
        .await
        .map(Envelope::data)
        .map_err(|e| {
            error!("Failed to create user: {}", e);
            ApiError::from(e)
        });

    respond(StatusCode::CREATED, result)
}

/// Apply a partial update to a user
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Response {
    let result = match coerce_id(&id) {
        None => Err(ApiError::NotFound),
        Some(id) => match state.store.update_user(id, &patch).await {
            // A primary-key match touches at most one row; the first one is reported.
            Ok(rows) => rows
                .into_iter()
                .next()
                .map(Envelope::data)
                .ok_or(ApiError::NotFound),
            Err(e) => {
                error!("Failed to update user {}: {}", id, e);
                Err(e.into())
            }
        },
    };

    respond(StatusCode::OK, result)
}

/// Delete a user; deleting an unknown id succeeds
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let outcome = match coerce_id(&id) {
        None => Ok(()),
        Some(id) => state.store.delete_user(id).await.map_err(|e| {
            error!("Failed to delete user {}: {}", id, e);
            ApiError::from(e)
        }),
    };
    let result = outcome.map(|()| Envelope::<()>::message("User deleted successfully"));

    respond(StatusCode::OK, result)
}

#[cfg(test)]
mod tests {
    use super::coerce_id;

    #[test]
    fn coerce_id_accepts_integers() {
        assert_eq!(coerce_id("42"), Some(42));
        assert_eq!(coerce_id(" 7 "), Some(7));
        assert_eq!(coerce_id("-3"), Some(-3));
    }

    #[test]
    fn coerce_id_rejects_everything_else() {
        assert_eq!(coerce_id("abc"), None);
        assert_eq!(coerce_id(""), None);
        assert_eq!(coerce_id("1.5"), None);
        assert_eq!(coerce_id("99999999999"), None);
    }
}
