//! Users service endpoint configuration from environment variables.

/// Base URL used when `USERS_SERVICE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Location of the users service, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    base_url: String,
}

impl ServiceConfig {
    /// Create a config for an explicit base URL. Trailing slashes are stripped
    /// so endpoint joining stays stable.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read `USERS_SERVICE_URL` from the environment, falling back to
    /// [`DEFAULT_BASE_URL`].
    ///
    /// On wasm there is no process environment, so the variable is baked in at
    /// compile time instead.
    pub fn from_env() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(option_env!("USERS_SERVICE_URL").unwrap_or(DEFAULT_BASE_URL))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            Self::new(
                std::env::var("USERS_SERVICE_URL")
                    .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            )
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Collection endpoint: `GET` lists all users, `POST` creates one.
    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// Health-check endpoint, answers `pong!`.
    pub fn ping_url(&self) -> String {
        format!("{}/users/ping", self.base_url)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
