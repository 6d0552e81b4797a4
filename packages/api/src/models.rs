//! # Data model for the users service
//!
//! Two record types cross the HTTP boundary:
//!
//! - [`User`] — a stored record as the service returns it. The service assigns `id`
//!   and defaults `active` to true; the client never writes either field.
//! - [`NewUser`] — the `POST /users` body, just the two editable fields.
//!
//! The service wraps every response in an envelope:
//!
//! | Envelope | Returned by |
//! |----------|-------------|
//! | [`UsersEnvelope`] | `GET /users` — `{ status, data: { users: [...] } }` |
//! | [`MessageEnvelope`] | `POST /users` success and every `fail` response |
//!
//! All types are `Clone + PartialEq` so they can flow into Dioxus component props.

use serde::{Deserialize, Serialize};

/// A user record as stored and returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub active: bool,
}

/// The editable fields submitted to create a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// Success shape of `GET /users`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UsersEnvelope {
    pub status: String,
    pub data: UsersData,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UsersData {
    pub users: Vec<User>,
}

/// Shape of `POST /users` responses and of all `fail` responses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageEnvelope {
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_users_envelope() {
        let body = r#"{
            "status": "success",
            "data": {
                "users": [
                    {"id": 1, "username": "michael", "email": "michael@mherman.org", "active": true},
                    {"id": 2, "username": "fletcher", "email": "fletcher@notreal.com", "active": false}
                ]
            }
        }"#;

        let envelope: UsersEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.status, "success");
        assert_eq!(envelope.data.users.len(), 2);
        assert_eq!(envelope.data.users[0].username, "michael");
        assert!(envelope.data.users[0].active);
        assert!(!envelope.data.users[1].active);
    }

    #[test]
    fn test_serialize_new_user() {
        let body = serde_json::to_value(NewUser {
            username: "michael".to_string(),
            email: "michael@mherman.org".to_string(),
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({"username": "michael", "email": "michael@mherman.org"})
        );
    }

    #[test]
    fn test_deserialize_fail_envelope() {
        let body = r#"{"status": "fail", "message": "Sorry, that email already exists."}"#;
        let envelope: MessageEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.status, "fail");
        assert_eq!(envelope.message, "Sorry, that email already exists.");
    }
}
