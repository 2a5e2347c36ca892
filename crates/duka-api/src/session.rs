//! # Session & Authentication
//!
//! Signing in and carrying the resulting session around.
//!
//! ## Session Lifecycle
//! ```text
//! AuthClient::login ──► SessionContext { token, user }
//!                            │
//!                            ├──► CatalogClient::new(config, session)
//!                            └──► LedgerClient::new(config, session)
//! ```
//!
//! The session is an explicit value handed to each client at construction.
//! There is no ambient global token; when the backend answers 401 the call
//! returns [`ApiError::SessionExpired`](crate::error::ApiError::SessionExpired)
//! and the caller decides to log in again, discarding the old context.

use tracing::{debug, info};

use duka_core::User;

use crate::config::{build_client, ApiConfig};
use crate::error::ApiResult;
use crate::http;
use crate::wire::{LoginBody, LoginResponse, MeResponse};

/// An authenticated session with the backend.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Bearer token presented on every authenticated request.
    pub token: String,
    /// The signed-in operator.
    pub user: User,
}

/// Client for the auth endpoints. The only client that works without a
/// session.
pub struct AuthClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl AuthClient {
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let client = build_client(&config)?;
        Ok(AuthClient { config, client })
    }

    /// Signs in with username and password.
    ///
    /// ## Returns
    /// The [`SessionContext`] all other clients are built from.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<SessionContext> {
        let url = self.config.endpoint("/auth/login");
        info!(url = %url, username = %username, "Logging in");

        let body: LoginResponse =
            http::execute(self.client.post(&url).json(&LoginBody { username, password })).await?;

        let user: User = body.user.into();
        info!(username = %user.username, role = %user.role, "Login succeeded");

        Ok(SessionContext {
            token: body.token,
            user,
        })
    }

    /// Fetches the operator the backend associates with this session.
    ///
    /// Useful as a token check: an expired session comes back as
    /// `SessionExpired` here before any real work is attempted.
    pub async fn current_user(&self, session: &SessionContext) -> ApiResult<User> {
        let url = self.config.endpoint("/auth/me");
        debug!(url = %url, "Fetching current user");

        let body: MeResponse =
            http::execute(self.client.get(&url).bearer_auth(&session.token)).await?;

        Ok(body.user.into())
    }
}
