use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{
    app_state::AppState,
    graphql::helpers::parse_id,
    models::{
        domain::{NavigationTarget, PracticeCategory},
        dto::{
            request::{QuizOverviewQuery, QuizOverviewRequest},
            response::{QuizOverview, QuizViewModel},
        },
    },
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn quiz_overview(
        &self,
        ctx: &Context<'_>,
        quiz_id: ID,
        student_id: Option<String>,
        course_id: Option<String>,
        module_id: Option<String>,
    ) -> Result<QuizOverview> {
        let state = ctx.data::<AppState>()?;

        let query = QuizOverviewQuery {
            student_id,
            course_id,
            module_id,
        };
        let request = QuizOverviewRequest::new(quiz_id.as_str(), query).map_err(|e| e.extend())?;

        state
            .quiz_view_service
            .load_quiz_overview(&request)
            .await
            .map_err(|e| e.extend())
    }

    async fn quiz_view(
        &self,
        ctx: &Context<'_>,
        quiz_id: ID,
        student_id: Option<String>,
    ) -> Result<QuizViewModel> {
        let state = ctx.data::<AppState>()?;
        let quiz_id = parse_id("quiz id", &quiz_id).map_err(|e| e.extend())?;

        let query = QuizOverviewQuery {
            student_id,
            ..Default::default()
        };
        let request = QuizOverviewRequest::new(&quiz_id, query).map_err(|e| e.extend())?;

        state
            .quiz_view_service
            .load_quiz_view(&request.quiz_id, request.student_id.as_deref())
            .await
            .map_err(|e| e.extend())
    }

    async fn practice_categories(&self, ctx: &Context<'_>) -> Result<Vec<PracticeCategory>> {
        let state = ctx.data::<AppState>()?;
        Ok(state.practice_service.categories().to_vec())
    }

    async fn practice_navigation(
        &self,
        ctx: &Context<'_>,
        exercise_id: String,
    ) -> Result<NavigationTarget> {
        let state = ctx.data::<AppState>()?;
        state
            .practice_service
            .dispatch(&exercise_id)
            .map_err(|e| e.extend())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::Config,
        errors::AppError,
        graphql::create_schema,
        repositories::{
            course_repository::MockCourseRepository, module_repository::MockModuleRepository,
            quiz_attempt_repository::MockQuizAttemptRepository,
            quiz_repository::MockQuizRepository,
        },
        test_utils::fixtures::{attempt_history, quiz},
    };

    fn state(quiz_repository: MockQuizRepository, attempts: MockQuizAttemptRepository) -> AppState {
        AppState::with_repositories(
            Config::test_config(),
            Arc::new(quiz_repository),
            Arc::new(attempts),
            Arc::new(MockCourseRepository::new()),
            Arc::new(MockModuleRepository::new()),
        )
    }

    #[tokio::test]
    async fn test_practice_categories_query() {
        let schema = create_schema(state(
            MockQuizRepository::new(),
            MockQuizAttemptRepository::new(),
        ));

        let response = schema
            .execute("{ practiceCategories { key exercises { id path } } }")
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["practiceCategories"][0]["key"], "pitch");
        assert_eq!(
            data["practiceCategories"][0]["exercises"][0]["path"],
            "/practice/pitch/note-reading-treble"
        );
    }

    #[tokio::test]
    async fn test_quiz_view_query_with_passing_attempt() {
        let mut quizzes = MockQuizRepository::new();
        quizzes
            .expect_find_by_id()
            .returning(|_| Ok(Some(quiz("Q1"))));
        let mut attempts = MockQuizAttemptRepository::new();
        attempts
            .expect_find_by_student_and_quiz()
            .returning(|_, _| Ok(Some(attempt_history("A1", 7.0, 0))));
        let schema = create_schema(state(quizzes, attempts));

        let response = schema
            .execute(r#"{ quizView(quizId: "Q1", studentId: "S1") { grade hasSubmitted attemptsLeft } }"#)
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["quizView"]["grade"], 7.0);
        assert_eq!(data["quizView"]["hasSubmitted"], true);
        assert_eq!(data["quizView"]["attemptsLeft"], 2);
    }

    #[tokio::test]
    async fn test_quiz_overview_query_reports_data_unavailable() {
        let mut quizzes = MockQuizRepository::new();
        quizzes
            .expect_find_by_id()
            .returning(|_| Err(AppError::UpstreamError("down".into())));
        let schema = create_schema(state(quizzes, MockQuizAttemptRepository::new()));

        let response = schema
            .execute(r#"{ quizOverview(quizId: "Q1") { courseName } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        let code = response.errors[0]
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .cloned();
        assert_eq!(
            code,
            Some(async_graphql::Value::String("DATA_UNAVAILABLE".to_string()))
        );
    }

    #[tokio::test]
    async fn test_practice_navigation_unknown_exercise() {
        let schema = create_schema(state(
            MockQuizRepository::new(),
            MockQuizAttemptRepository::new(),
        ));

        let response = schema
            .execute(r#"{ practiceNavigation(exerciseId: "nope") { path } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.starts_with("Not found"));
    }
}
