pub mod auth;
pub mod envelope;
pub mod question;
pub mod server_status;
pub mod student;
pub mod student_answer;
pub mod user;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest};
pub use envelope::DataEnvelope;
pub use question::{Question, QuestionInput};
pub use server_status::ServerStatus;
pub use student::{Student, StudentInput};
pub use student_answer::{GradeRequest, StudentAnswer, StudentAnswerDetails, SubmitAnswerRequest};
pub use user::User;
