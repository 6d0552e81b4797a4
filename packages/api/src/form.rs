//! Controlled form state for the add-user form, and its submit flow.

use crate::client::{ApiError, UsersApi};
use crate::models::{NewUser, User};

/// The two uncommitted input values being typed.
///
/// Fields are keyed by the input's `name` attribute, mirroring the form markup, so
/// a single change handler can serve both inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
}

impl UserForm {
    /// Update the field named by the input that changed. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "username" => self.username = value,
            "email" => self.email = value,
            other => tracing::warn!("ignoring unknown form field: {other}"),
        }
    }

    /// Reset both fields, as happens after a successful submission.
    pub fn clear(&mut self) {
        self.username.clear();
        self.email.clear();
    }

    /// Snapshot the current values as a `POST /users` body.
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }

    /// Submit the form: one create with the current values, then one re-fetch of
    /// the full collection, in that order.
    ///
    /// On success the fields are cleared and the freshly fetched collection is
    /// returned, fully replacing whatever the caller held before. If the create
    /// fails the fields are left unchanged, no list request is issued, and the
    /// error propagates to the caller.
    pub async fn submit<A: UsersApi>(&mut self, api: &A) -> Result<Vec<User>, ApiError> {
        api.create_user(&self.to_new_user()).await?;
        let users = api.list_users().await?;
        self.clear();
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryApi;

    fn filled_form() -> UserForm {
        let mut form = UserForm::default();
        form.set_field("username", "michael".to_string());
        form.set_field("email", "michael@mherman.org".to_string());
        form
    }

    #[test]
    fn test_set_field_updates_only_named_field() {
        let mut form = UserForm::default();

        form.set_field("username", "michael".to_string());
        assert_eq!(form.username, "michael");
        assert_eq!(form.email, "");

        form.set_field("email", "michael@mherman.org".to_string());
        assert_eq!(form.username, "michael");
        assert_eq!(form.email, "michael@mherman.org");
    }

    #[test]
    fn test_unknown_field_ignored() {
        let mut form = filled_form();
        form.set_field("password", "hunter2".to_string());
        assert_eq!(form, filled_form());
    }

    #[tokio::test]
    async fn test_submit_creates_then_lists_in_order() {
        let api = MemoryApi::new();
        let mut form = filled_form();

        let users = form.submit(&api).await.unwrap();

        assert_eq!(api.calls(), vec!["create_user", "list_users"]);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "michael");
    }

    #[tokio::test]
    async fn test_submit_clears_fields_on_success() {
        let api = MemoryApi::new();
        let mut form = filled_form();

        form.submit(&api).await.unwrap();

        assert_eq!(form, UserForm::default());
    }

    #[tokio::test]
    async fn test_failed_create_leaves_fields_and_skips_list() {
        let api = MemoryApi::new();
        api.set_reject_creates(true);
        let mut form = filled_form();

        let err = form.submit(&api).await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid payload.");
        assert_eq!(form, filled_form());
        assert_eq!(api.calls(), vec!["create_user"]);
    }

    #[tokio::test]
    async fn test_submit_result_replaces_prior_collection() {
        let api = MemoryApi::with_users(vec![User {
            id: 1,
            username: "michael".to_string(),
            email: "michael@mherman.org".to_string(),
            active: true,
        }]);

        let mut form = UserForm::default();
        form.set_field("username", "fletcher".to_string());
        form.set_field("email", "fletcher@notreal.com".to_string());

        let users = form.submit(&api).await.unwrap();

        // The full collection comes back, not a delta.
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "michael");
        assert_eq!(users[1].username, "fletcher");
    }
}
