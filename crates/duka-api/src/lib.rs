//! # duka-api: Backend HTTP Client for Duka POS
//!
//! Everything that talks to the backend lives here: authentication, catalog
//! reads, and ledger writes. The rest of the workspace never sees HTTP,
//! JSON, or decimal-unit money.
//!
//! ## Module Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            duka-api                                     │
//! │                                                                         │
//! │   config    ApiConfig (base URL + timeouts, env-driven)                 │
//! │   error     ApiError categories + backend message extraction           │
//! │   wire      request/response DTOs, cents ◄─► units (the ONLY place)    │
//! │   session   AuthClient::login ──► SessionContext { token, user }       │
//! │   catalog   CatalogClient: all / search / by_barcode                   │
//! │   ledger    LedgerClient: submit / recent / by_id                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```no_run
//! use duka_api::{ApiConfig, AuthClient, CatalogClient};
//!
//! # async fn demo() -> duka_api::ApiResult<()> {
//! let config = ApiConfig::from_env();
//! let auth = AuthClient::new(config.clone())?;
//! let session = auth.login("jane", "hunter2").await?;
//!
//! let catalog = CatalogClient::new(config.clone(), session.clone())?;
//! let products = catalog.all().await?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
mod http;
pub mod ledger;
pub mod session;
pub mod wire;

pub use catalog::CatalogClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use ledger::{LedgerClient, DEFAULT_HISTORY_LIMIT};
pub use session::{AuthClient, SessionContext};
