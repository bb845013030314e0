use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{
        http_helpers::build_client, CourseRepository, HttpCourseRepository, HttpModuleRepository,
        HttpQuizAttemptRepository, HttpQuizRepository, ModuleRepository, QuizAttemptRepository,
        QuizRepository,
    },
    services::{PracticeService, QuizViewService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_view_service: Arc<QuizViewService>,
    pub practice_service: PracticeService,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let client = build_client(config.upstream_timeout())?;

        let quiz_repository = Arc::new(HttpQuizRepository::new(
            client.clone(),
            &config.quiz_service_url,
        ));
        let attempt_repository = Arc::new(HttpQuizAttemptRepository::new(
            client.clone(),
            &config.quiz_service_url,
        ));
        let course_repository = Arc::new(HttpCourseRepository::new(
            client.clone(),
            &config.course_service_url,
        ));
        let module_repository = Arc::new(HttpModuleRepository::new(
            client,
            &config.module_service_url,
        ));

        Ok(Self::with_repositories(
            config,
            quiz_repository,
            attempt_repository,
            course_repository,
            module_repository,
        ))
    }

    /// Wires the services over arbitrary repository implementations.
    pub fn with_repositories(
        config: Config,
        quiz_repository: Arc<dyn QuizRepository>,
        attempt_repository: Arc<dyn QuizAttemptRepository>,
        course_repository: Arc<dyn CourseRepository>,
        module_repository: Arc<dyn ModuleRepository>,
    ) -> Self {
        let quiz_view_service = Arc::new(QuizViewService::new(
            quiz_repository,
            attempt_repository,
            course_repository,
            module_repository,
        ));

        Self {
            quiz_view_service,
            practice_service: PracticeService::new(),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_from_test_config() {
        let state = AppState::new(Config::test_config()).unwrap();
        assert_eq!(state.practice_service.categories().len(), 5);
    }
}
