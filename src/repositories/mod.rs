pub mod course_repository;
pub mod http_helpers;
pub mod module_repository;
pub mod quiz_attempt_repository;
pub mod quiz_repository;

pub use course_repository::{CourseRepository, HttpCourseRepository};
pub use module_repository::{HttpModuleRepository, ModuleRepository};
pub use quiz_attempt_repository::{HttpQuizAttemptRepository, QuizAttemptRepository};
pub use quiz_repository::{HttpQuizRepository, QuizRepository};
