//! Application Layer
//!
//! Session store, gateway and per-resource services, navigation state
//! and the route guard.

pub mod answers;
pub mod auth;
pub mod config;
pub mod gateway;
pub mod guard;
pub mod navigation;
pub mod questions;
pub mod server_status;
pub mod session;
pub mod students;

// Re-exports
pub use answers::AnswerService;
pub use auth::AuthService;
pub use config::{GatewayConfig, GatewayConfigBuilder};
pub use gateway::ApiGateway;
pub use guard::{GuardDecision, evaluate};
pub use navigation::Navigation;
pub use questions::QuestionService;
pub use server_status::ServerStatusService;
pub use session::{SessionSnapshot, SessionStore};
pub use students::StudentService;
