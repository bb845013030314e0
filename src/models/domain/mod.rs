pub mod course;
pub mod practice;
pub mod quiz;
pub mod quiz_attempt;
pub use course::{CourseSummary, ModuleSummary};
pub use practice::{NavigationTarget, PracticeCategory, PracticeExercise};
pub use quiz::QuizMetadata;
pub use quiz_attempt::{AttemptHistory, AttemptRecord};
