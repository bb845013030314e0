use serde::{Deserialize, Serialize};

/// Only the title is used; other fields the course service returns are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CourseSummary {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModuleSummary {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
}
