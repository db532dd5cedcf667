//! Domain Layer
//!
//! Contains records exchanged with the backend, value objects,
//! the static route table and the HTTP transport trait.

pub mod entity;
pub mod route;
pub mod transport;
pub mod value_object;

// Re-exports
pub use entity::{question::Question, student::Student, student_answer::StudentAnswer, user::User};
pub use route::{RouteDescriptor, RouteMeta, RouteName};
pub use transport::{HttpTransport, LocalHttpTransport};
pub use value_object::user_role::UserRole;
