use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::SubmitQuizRequest, response::ApiResponse},
};

#[post("/api/submissions")]
pub async fn submit_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<SubmitQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    log::debug!(
        "[{}] scoring {} answers for quiz '{}'",
        get_request_id(&req).unwrap_or_default(),
        request.answers.len(),
        request.quiz_id
    );

    let result = state.submission_service.submit(request).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(result)))
}

#[get("/api/submissions/{id}")]
pub async fn get_submission(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let submission = state.submission_service.get_submission(&id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(submission)))
}
