pub mod question_type;
pub mod user_role;

pub use kernel::id::{AnswerId, QuestionId, StudentId, UserId};
pub use question_type::QuestionType;
pub use user_role::UserRole;
