//! # API crate — client for the external users service
//!
//! Everything that touches or models the remote HTTP users service lives here, so the
//! UI crates stay purely presentational.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Service base URL, read once at startup from the environment |
//! | [`models`] | `User` / `NewUser` records and the service's JSON response envelopes |
//! | [`client`] | The [`UsersApi`] trait and its `reqwest`-backed [`UsersClient`] |
//! | [`memory`] | In-memory [`UsersApi`] double reproducing the service's visible behavior |
//! | [`form`] | Controlled form state and the create-then-refetch submit flow |
//!
//! The service contract is small: `POST /users` with `{ username, email }` creates a
//! record, `GET /users` returns `{ status, data: { users: [...] } }`, and
//! `GET /users/ping` answers `pong!`. Failures come back as
//! `{ status: "fail", message }` with a 4xx status.

pub mod client;
pub mod config;
pub mod form;
pub mod memory;
pub mod models;

pub use client::{ApiError, UsersApi, UsersClient};
pub use config::ServiceConfig;
pub use form::UserForm;
pub use memory::MemoryApi;
pub use models::{NewUser, User};
