//! LMS Client Access Layer
//!
//! Clean Architecture structure:
//! - `domain/` - Records exchanged with the backend, route table, transport trait
//! - `application/` - Session store, API gateway and services, route guard
//! - `infra/` - reqwest-based HTTP transport
//! - `presentation/` - Router applying guard decisions and login redirects
//!
//! ## Features
//! - Login/register with token + user persisted in key-value storage
//! - Typed operations for students, questions, answers and server status
//! - Bearer token attached automatically, anonymous public endpoints
//! - Session cleared and login redirect queued on any 401
//! - Route guard over `requires_auth` / `requires_admin` / `guest` metadata
//!
//! ## Wiring
//! ```no_run
//! use std::sync::Arc;
//! use lms::{ApiGateway, GatewayConfig, Navigation, ReqwestTransport, Router, SessionStore};
//! use platform::storage::MemoryStorage;
//!
//! # async fn run() -> Result<(), lms::ApiError> {
//! let config = GatewayConfig::builder()
//!     .base_url("http://localhost:3001/api")
//!     .build()?;
//! let session = Arc::new(SessionStore::open(Arc::new(MemoryStorage::new())));
//! let navigation = Arc::new(Navigation::new("/"));
//! let gateway = ApiGateway::new(
//!     ReqwestTransport::new()?,
//!     session.clone(),
//!     navigation.clone(),
//!     config,
//! );
//! let router = Router::new(session, navigation);
//!
//! let status = gateway.server_status().check().await?;
//! router.navigate("/questions");
//! # let _ = status;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::GatewayConfig;
pub use application::gateway::ApiGateway;
pub use application::navigation::Navigation;
pub use application::session::{SessionSnapshot, SessionStore};
pub use error::{ApiError, ApiResult, SessionError};
pub use infra::reqwest_transport::ReqwestTransport;
pub use presentation::router::Router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod routes {
    pub use crate::domain::route::*;
}

pub mod guard {
    pub use crate::application::guard::*;
}
