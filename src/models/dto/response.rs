use async_graphql::{Enum, SimpleObject};
use serde::Serialize;

/// Render-ready shape of a quiz for one viewer.
#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuizViewModel {
    pub quiz_id: String,
    pub title: String,
    pub description: String,
    pub attempts_left: u8,
    pub attempts_max: u8,
    pub time_per_attempt_minutes: u32,
    /// Score of the latest attempt; absent (not zero) when there is none.
    pub grade: Option<f64>,
    pub has_submitted: bool,
    pub latest_attempt_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttemptOutcome {
    NotAttempted,
    Passed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuizControlKind {
    Start,
    Retry,
    ViewSubmission,
    PassedIndicator,
}

/// Payload handed to the quiz-taking flow when a control is activated.
#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuizContinuation {
    pub quiz_id: String,
    pub is_retry: bool,
    pub is_view_submission: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_attempt_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuizControl {
    pub kind: QuizControlKind,
    /// None for the passed indicator, which is not actionable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation: Option<QuizContinuation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct ActionSet {
    pub outcome: AttemptOutcome,
    pub controls: Vec<QuizControl>,
}

impl ActionSet {
    pub fn kinds(&self) -> Vec<QuizControlKind> {
        self.controls.iter().map(|c| c.kind).collect()
    }

    pub fn find(&self, kind: QuizControlKind) -> Option<&QuizControl> {
        self.controls.iter().find(|c| c.kind == kind)
    }
}

/// Full payload of the quiz overview page.
#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuizOverview {
    pub quiz: QuizViewModel,
    pub course_name: String,
    pub module_name: String,
    pub actions: ActionSet,
    /// One entry per secondary field that fell back to a default.
    pub notices: Vec<String>,
}
