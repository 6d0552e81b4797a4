use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::client::{ApiError, UsersApi};
use crate::models::{NewUser, User};

/// In-memory UsersApi for testing.
///
/// Reproduces the service's visible behavior: monotonically assigned ids, `active`
/// defaulting to true, and the service's exact rejection messages. Every call is
/// recorded so tests can assert request ordering.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    users: Arc<Mutex<Vec<User>>>,
    calls: Arc<Mutex<Vec<&'static str>>>,
    reject_creates: Arc<AtomicBool>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection; new ids continue after the largest seeded id.
    pub fn with_users(users: Vec<User>) -> Self {
        let api = Self::default();
        *api.users.lock().unwrap() = users;
        api
    }

    /// Make every subsequent create fail, for failure-path tests.
    pub fn set_reject_creates(&self, reject: bool) {
        self.reject_creates.store(reject, Ordering::SeqCst);
    }

    /// Names of the calls made so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

impl UsersApi for MemoryApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.record("list_users");
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<(), ApiError> {
        self.record("create_user");

        if self.reject_creates.load(Ordering::SeqCst) || new_user.username.is_empty() {
            return Err(ApiError::Rejected {
                message: "Invalid payload.".to_string(),
            });
        }

        let mut users = self.users.lock().unwrap();
        if users.iter().any(|user| user.email == new_user.email) {
            return Err(ApiError::Rejected {
                message: "Sorry, that email already exists.".to_string(),
            });
        }

        let id = users.iter().map(|user| user.id).max().unwrap_or(0) + 1;
        users.push(User {
            id,
            username: new_user.username.clone(),
            email: new_user.email.clone(),
            active: true,
        });
        Ok(())
    }

    async fn ping(&self) -> Result<String, ApiError> {
        self.record("ping");
        Ok("pong!".to_string())
    }
}
