//! This crate contains all shared UI for the workspace.

mod add_user;
pub use add_user::AddUser;

mod users_list;
pub use users_list::UsersList;
