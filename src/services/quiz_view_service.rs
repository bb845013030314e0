use std::sync::Arc;

use crate::{
    constants::{
        labels::{COURSE_NAME_FALLBACK, MODULE_NAME_FALLBACK},
        quiz_policy::{ATTEMPTS_LEFT_AFTER_SUBMISSION, ATTEMPTS_MAX},
    },
    errors::{AppError, AppResult},
    models::{
        domain::{quiz_attempt::is_passing_score, AttemptRecord, QuizMetadata},
        dto::{
            request::QuizOverviewRequest,
            response::{
                ActionSet, AttemptOutcome, QuizContinuation, QuizControl, QuizControlKind,
                QuizOverview, QuizViewModel,
            },
        },
    },
    repositories::{CourseRepository, ModuleRepository, QuizAttemptRepository, QuizRepository},
};

/// A value that may have been replaced by a fallback, with the reason if so.
struct Resolved<T> {
    value: T,
    notice: Option<String>,
}

impl<T> Resolved<T> {
    fn clean(value: T) -> Self {
        Self {
            value,
            notice: None,
        }
    }

    fn degraded(value: T, reason: String) -> Self {
        let notice = AppError::DegradedData(reason).to_string();
        log::warn!("{}", notice);
        Self {
            value,
            notice: Some(notice),
        }
    }
}

pub struct QuizViewService {
    quiz_repository: Arc<dyn QuizRepository>,
    attempt_repository: Arc<dyn QuizAttemptRepository>,
    course_repository: Arc<dyn CourseRepository>,
    module_repository: Arc<dyn ModuleRepository>,
}

impl QuizViewService {
    pub fn new(
        quiz_repository: Arc<dyn QuizRepository>,
        attempt_repository: Arc<dyn QuizAttemptRepository>,
        course_repository: Arc<dyn CourseRepository>,
        module_repository: Arc<dyn ModuleRepository>,
    ) -> Self {
        Self {
            quiz_repository,
            attempt_repository,
            course_repository,
            module_repository,
        }
    }

    /// Builds the view model for one quiz and an optional viewer.
    ///
    /// Fails with `DataUnavailable` only when the quiz metadata cannot be
    /// fetched. A failing attempt lookup is logged and read as "no attempt".
    pub async fn load_quiz_view(
        &self,
        quiz_id: &str,
        student_id: Option<&str>,
    ) -> AppResult<QuizViewModel> {
        let quiz = self.fetch_quiz(quiz_id).await?;
        let attempt = self.fetch_latest_attempt(&quiz.id, student_id).await;

        Ok(derive_view_model(&quiz, attempt.value.as_ref()))
    }

    /// Builds the whole overview page: view model, course and module names, and actions.
    ///
    /// The quiz metadata is fetched first; the attempt, course and module
    /// lookups then run concurrently and each falls back independently.
    pub async fn load_quiz_overview(&self, request: &QuizOverviewRequest) -> AppResult<QuizOverview> {
        let quiz = self.fetch_quiz(&request.quiz_id).await?;

        let (attempt, course_name, module_name) = futures::join!(
            self.fetch_latest_attempt(&quiz.id, request.student_id.as_deref()),
            self.resolve_course_name(request.course_id.as_deref()),
            self.resolve_module_name(request.module_id.as_deref()),
        );

        let view = derive_view_model(&quiz, attempt.value.as_ref());
        let actions = select_actions(&view);

        let notices = [attempt.notice, course_name.notice, module_name.notice]
            .into_iter()
            .flatten()
            .collect();

        Ok(QuizOverview {
            quiz: view,
            course_name: course_name.value,
            module_name: module_name.value,
            actions,
            notices,
        })
    }

    async fn fetch_quiz(&self, quiz_id: &str) -> AppResult<QuizMetadata> {
        match self.quiz_repository.find_by_id(quiz_id).await {
            Ok(Some(mut quiz)) => {
                if quiz.id.trim().is_empty() {
                    quiz.id = quiz_id.to_string();
                }
                Ok(quiz)
            }
            Ok(None) => {
                log::error!("Quiz '{}' not found upstream", quiz_id);
                Err(AppError::DataUnavailable(format!(
                    "Quiz '{}' not found",
                    quiz_id
                )))
            }
            Err(err) => {
                log::error!("Failed to load quiz '{}': {}", quiz_id, err);
                Err(AppError::DataUnavailable(format!(
                    "Could not load quiz '{}'",
                    quiz_id
                )))
            }
        }
    }

    async fn fetch_latest_attempt(
        &self,
        quiz_id: &str,
        student_id: Option<&str>,
    ) -> Resolved<Option<AttemptRecord>> {
        let Some(student_id) = student_id else {
            return Resolved::clean(None);
        };

        match self
            .attempt_repository
            .find_by_student_and_quiz(student_id, quiz_id)
            .await
        {
            Ok(Some(history)) => {
                if !history.latest.is_within_scale() {
                    log::warn!(
                        "Attempt '{}' has score {} outside the 0-10 scale",
                        history.latest.attempt_id,
                        history.latest.score
                    );
                }
                Resolved::clean(Some(history.latest))
            }
            Ok(None) => Resolved::clean(None),
            Err(err) => Resolved::degraded(
                None,
                format!(
                    "attempt history of student '{}' for quiz '{}' unavailable ({})",
                    student_id, quiz_id, err
                ),
            ),
        }
    }

    async fn resolve_course_name(&self, course_id: Option<&str>) -> Resolved<String> {
        let Some(course_id) = course_id else {
            return Resolved::clean(COURSE_NAME_FALLBACK.to_string());
        };

        let lookup = self
            .course_repository
            .find_by_id(course_id)
            .await
            .map(|course| course.map(|c| c.title));

        name_or_fallback(lookup, COURSE_NAME_FALLBACK, "course", course_id)
    }

    async fn resolve_module_name(&self, module_id: Option<&str>) -> Resolved<String> {
        let Some(module_id) = module_id else {
            return Resolved::clean(MODULE_NAME_FALLBACK.to_string());
        };

        let lookup = self
            .module_repository
            .find_by_id(module_id)
            .await
            .map(|module| module.map(|m| m.title));

        name_or_fallback(lookup, MODULE_NAME_FALLBACK, "module", module_id)
    }
}

fn name_or_fallback(
    lookup: AppResult<Option<String>>,
    fallback: &str,
    kind: &str,
    id: &str,
) -> Resolved<String> {
    match lookup {
        Ok(Some(title)) if !title.trim().is_empty() => Resolved::clean(title),
        Ok(_) => Resolved::degraded(
            fallback.to_string(),
            format!("{} '{}' has no title", kind, id),
        ),
        Err(err) => Resolved::degraded(
            fallback.to_string(),
            format!("{} '{}' unavailable ({})", kind, id, err),
        ),
    }
}

/// Maps fetched quiz metadata and the latest attempt onto the view model.
pub fn derive_view_model(quiz: &QuizMetadata, attempt: Option<&AttemptRecord>) -> QuizViewModel {
    let attempts_left = if attempt.is_some() {
        ATTEMPTS_LEFT_AFTER_SUBMISSION
    } else {
        ATTEMPTS_MAX
    };

    QuizViewModel {
        quiz_id: quiz.id.clone(),
        title: quiz.display_title(),
        description: quiz.display_description(),
        attempts_left,
        attempts_max: ATTEMPTS_MAX,
        time_per_attempt_minutes: quiz.effective_duration_minutes(),
        grade: attempt.map(|a| a.score),
        has_submitted: attempt.is_some(),
        latest_attempt_id: attempt.map(|a| a.attempt_id.clone()),
    }
}

/// Chooses the controls shown under the quiz overview.
pub fn select_actions(view: &QuizViewModel) -> ActionSet {
    let submitted = match (view.has_submitted, view.grade) {
        (true, Some(score)) => Some(score),
        _ => None,
    };

    let Some(score) = submitted else {
        return ActionSet {
            outcome: AttemptOutcome::NotAttempted,
            controls: vec![QuizControl {
                kind: QuizControlKind::Start,
                continuation: Some(QuizContinuation {
                    quiz_id: view.quiz_id.clone(),
                    is_retry: false,
                    is_view_submission: false,
                    previous_attempt_id: None,
                    previous_score: None,
                }),
            }],
        };
    };

    let view_submission = QuizControl {
        kind: QuizControlKind::ViewSubmission,
        continuation: Some(QuizContinuation {
            quiz_id: view.quiz_id.clone(),
            is_retry: false,
            is_view_submission: true,
            previous_attempt_id: view.latest_attempt_id.clone(),
            previous_score: Some(score),
        }),
    };

    if is_passing_score(score) {
        ActionSet {
            outcome: AttemptOutcome::Passed,
            controls: vec![
                QuizControl {
                    kind: QuizControlKind::PassedIndicator,
                    continuation: None,
                },
                view_submission,
            ],
        }
    } else {
        ActionSet {
            outcome: AttemptOutcome::Failed,
            controls: vec![
                QuizControl {
                    kind: QuizControlKind::Retry,
                    continuation: Some(QuizContinuation {
                        quiz_id: view.quiz_id.clone(),
                        is_retry: true,
                        is_view_submission: false,
                        previous_attempt_id: view.latest_attempt_id.clone(),
                        previous_score: Some(score),
                    }),
                },
                view_submission,
            ],
        }
    }
}
