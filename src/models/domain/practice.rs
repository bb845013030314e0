use async_graphql::SimpleObject;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct PracticeExercise {
    pub id: String,
    pub title: String,
    pub description: String,
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct PracticeCategory {
    pub key: String,
    pub title: String,
    pub exercises: Vec<PracticeExercise>,
}

/// Where the front end should navigate when an exercise is picked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct NavigationTarget {
    pub exercise_id: String,
    pub category_key: String,
    pub path: String,
}

pub fn exercise_path(category_key: &str, exercise_id: &str) -> String {
    format!("/practice/{}/{}", category_key, exercise_id)
}
