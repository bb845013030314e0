pub mod practice_service;
pub mod quiz_view_service;

pub use practice_service::PracticeService;
pub use quiz_view_service::{derive_view_model, select_actions, QuizViewService};
