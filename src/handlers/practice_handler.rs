use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

#[get("/api/practice/categories")]
pub async fn get_practice_categories(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.practice_service.categories())
}

#[get("/api/practice/exercises/{exercise_id}")]
pub async fn navigate_to_exercise(
    state: web::Data<AppState>,
    exercise_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let target = state.practice_service.dispatch(&exercise_id)?;
    Ok(HttpResponse::Ok().json(target))
}
