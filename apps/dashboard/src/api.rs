//! HTTP client for the user API

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Envelope, NewUser, User, UserPatch};

/// Where the user API is served
pub const API_BASE_URL: &str = "http://localhost:4000";

/// Failure of a call to the user API
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a readable response
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The server answered `success: false`
    #[error("{0}")]
    Rejected(String),
}

/// Operations the dashboard needs from the backend
#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, ClientError>;
    async fn create_user(&self, new_user: &NewUser) -> Result<User, ClientError>;
    async fn update_user(&self, id: i32, patch: &UserPatch) -> Result<User, ClientError>;
    async fn delete_user(&self, id: i32) -> Result<(), ClientError>;
}

impl<T> Envelope<T> {
    /// Payload of a successful envelope; `fallback` is reported when the
    /// server gives no reason of its own.
    fn into_data(self, fallback: &str) -> Result<T, ClientError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ClientError::Rejected(
                self.error.unwrap_or_else(|| fallback.to_string()),
            )),
        }
    }
}

/// [`UsersApi`] over HTTP with `reqwest`
#[derive(Clone)]
pub struct HttpUsersApi {
    client: Client,
    base_url: String,
}

impl Default for HttpUsersApi {
    fn default() -> Self {
        Self::with_base_url(API_BASE_URL)
    }
}

impl HttpUsersApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<Envelope<T>, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<Envelope<serde_json::Value>>()
                .await
                .ok()
                .and_then(|envelope| envelope.error)
                .unwrap_or_else(|| format!("{}: {}", fallback, status));
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        const FALLBACK: &str = "Failed to fetch users";
        self.send(self.client.get(self.url("/users")), FALLBACK)
            .await?
            .into_data(FALLBACK)
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<User, ClientError> {
        const FALLBACK: &str = "Failed to create user";
        let request = self.client.post(self.url("/createUser")).json(new_user);
        self.send(request, FALLBACK).await?.into_data(FALLBACK)
    }

    async fn update_user(&self, id: i32, patch: &UserPatch) -> Result<User, ClientError> {
        const FALLBACK: &str = "Failed to update user";
        let request = self
            .client
            .put(self.url(&format!("/updateUser/{}", id)))
            .json(patch);
        self.send(request, FALLBACK).await?.into_data(FALLBACK)
    }

    async fn delete_user(&self, id: i32) -> Result<(), ClientError> {
        const FALLBACK: &str = "Failed to delete user";
        let request = self.client.delete(self.url(&format!("/deleteUser/{}", id)));
        let envelope: Envelope<serde_json::Value> = self.send(request, FALLBACK).await?;

        if envelope.success {
            Ok(())
        } else {
            Err(ClientError::Rejected(
                envelope.error.unwrap_or_else(|| FALLBACK.to_string()),
            ))
        }
    }
}
