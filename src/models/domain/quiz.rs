use serde::{Deserialize, Serialize};

use crate::constants::{
    labels::{QUIZ_DESCRIPTION_FALLBACK, QUIZ_TITLE_FALLBACK},
    quiz_policy::DEFAULT_DURATION_MINUTES,
};

/// Quiz metadata as returned by the quiz service. Any field but the id may be missing.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizMetadata {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "duration")]
    pub duration_minutes: Option<u32>,
}

impl QuizMetadata {
    pub fn display_title(&self) -> String {
        non_blank(self.title.as_deref())
            .unwrap_or(QUIZ_TITLE_FALLBACK)
            .to_string()
    }

    pub fn display_description(&self) -> String {
        non_blank(self.description.as_deref())
            .unwrap_or(QUIZ_DESCRIPTION_FALLBACK)
            .to_string()
    }

    /// A zero duration is treated the same as a missing one.
    pub fn effective_duration_minutes(&self) -> u32 {
        self.duration_minutes
            .filter(|minutes| *minutes > 0)
            .unwrap_or(DEFAULT_DURATION_MINUTES)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
