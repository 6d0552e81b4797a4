//! The [`UsersApi`] trait and its HTTP implementation.
//!
//! [`UsersApi`] is the seam between the UI and the service: the web app talks to a
//! [`UsersClient`], tests talk to [`crate::MemoryApi`]. Implementations are async but
//! not required to be `Send`, so the same trait works on wasm.

use crate::config::ServiceConfig;
use crate::models::{MessageEnvelope, NewUser, User, UsersEnvelope};

/// Errors surfaced by users service calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed or the body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The service answered with a `fail` envelope.
    #[error("{message}")]
    Rejected { message: String },
    /// The service answered 2xx but the body did not match the expected envelope.
    #[error("unexpected response: {0}")]
    Unexpected(String),
}

/// Async interface to the users service.
pub trait UsersApi {
    /// `GET /users` — fetch the full collection.
    fn list_users(&self) -> impl std::future::Future<Output = Result<Vec<User>, ApiError>>;

    /// `POST /users` — create a record. The success body is ignored; it only
    /// signals that a re-fetch is warranted.
    fn create_user(
        &self,
        new_user: &NewUser,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// `GET /users/ping` — reachability probe, answers `pong!`.
    fn ping(&self) -> impl std::future::Future<Output = Result<String, ApiError>>;
}

/// HTTP client for the users service.
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl UsersClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Client pointed at the URL configured in the environment.
    pub fn from_env() -> Self {
        Self::new(ServiceConfig::from_env())
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Decode a non-2xx response into the service's `fail` envelope.
    async fn rejection(response: reqwest::Response) -> ApiError {
        let status = response.status();
        match response.json::<MessageEnvelope>().await {
            Ok(envelope) => ApiError::Rejected {
                message: envelope.message,
            },
            Err(_) => ApiError::Unexpected(format!("service answered {status}")),
        }
    }
}

impl UsersApi for UsersClient {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.http.get(self.config.users_url()).send().await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        let envelope: UsersEnvelope = response.json().await?;
        Ok(envelope.data.users)
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.config.users_url())
            .json(new_user)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<String, ApiError> {
        let response = self.http.get(self.config.ping_url()).send().await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        let envelope: MessageEnvelope = response.json().await?;
        Ok(envelope.message)
    }
}
