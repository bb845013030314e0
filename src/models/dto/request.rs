use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};

pub static IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("IDENTIFIER_REGEX is a valid regex pattern")
});

/// Query string of the quiz overview page. The student id is passed explicitly;
/// a missing or blank one means "anonymous viewer".
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizOverviewQuery {
    #[validate(regex(path = *IDENTIFIER_REGEX, message = "Invalid student id"))]
    pub student_id: Option<String>,

    #[validate(regex(path = *IDENTIFIER_REGEX, message = "Invalid course id"))]
    pub course_id: Option<String>,

    #[validate(regex(path = *IDENTIFIER_REGEX, message = "Invalid module id"))]
    pub module_id: Option<String>,
}

impl QuizOverviewQuery {
    /// Blank values are dropped before validation so `?studentId=` reads as absent.
    pub fn normalized(self) -> Self {
        Self {
            student_id: blank_to_none(self.student_id),
            course_id: blank_to_none(self.course_id),
            module_id: blank_to_none(self.module_id),
        }
    }
}

/// Everything the presenter needs to build one overview page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOverviewRequest {
    pub quiz_id: String,
    pub student_id: Option<String>,
    pub course_id: Option<String>,
    pub module_id: Option<String>,
}

impl QuizOverviewRequest {
    pub fn new(quiz_id: &str, query: QuizOverviewQuery) -> AppResult<Self> {
        validate_identifier("quiz id", quiz_id)?;
        let query = query.normalized();
        query.validate()?;

        Ok(Self {
            quiz_id: quiz_id.to_string(),
            student_id: query.student_id,
            course_id: query.course_id,
            module_id: query.module_id,
        })
    }
}

pub fn validate_identifier(label: &str, value: &str) -> AppResult<()> {
    if IDENTIFIER_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(AppError::ValidationError(format!(
            "Invalid {}: '{}'",
            label, value
        )))
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
