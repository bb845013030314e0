use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{QuizOverviewQuery, QuizOverviewRequest},
};

/// Everything the quiz overview page renders, or a blocking error when the
/// quiz itself cannot be loaded.
#[get("/api/quizzes/{quiz_id}/overview")]
pub async fn get_quiz_overview(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    query: web::Query<QuizOverviewQuery>,
) -> Result<HttpResponse, AppError> {
    let request = QuizOverviewRequest::new(&quiz_id, query.into_inner())?;
    let overview = state.quiz_view_service.load_quiz_overview(&request).await?;
    Ok(HttpResponse::Ok().json(overview))
}
