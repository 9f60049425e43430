use actix_web::{get, post, web, HttpRequest, HttpResponse};
use chrono::Utc;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{GenerateForm, InitialStateParams},
        response::{GenerateResponse, PageView},
    },
    views::render_page,
};

fn html(view: &PageView) -> Result<HttpResponse, AppError> {
    let body = render_page(view)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

#[get("/")]
pub async fn index(query: web::Query<InitialStateParams>) -> Result<HttpResponse, AppError> {
    let (difficulty, content_type) = query.selection();
    html(&PageView::initial(difficulty, content_type))
}

#[post("/generate")]
pub async fn generate_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<GenerateForm>,
) -> Result<HttpResponse, AppError> {
    log::info!(
        "Page generation requested (request {})",
        get_request_id(&req).unwrap_or_default()
    );
    let view = state.study_service.generate_view(&form).await;
    html(&view)
}

#[post("/clear")]
pub async fn clear_page(
    state: web::Data<AppState>,
    form: web::Form<GenerateForm>,
) -> Result<HttpResponse, AppError> {
    html(&state.study_service.clear_view(&form))
}

#[post("/api/generate")]
pub async fn generate_api(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<GenerateForm>,
) -> Result<HttpResponse, AppError> {
    let request = body.to_request()?;
    log::info!(
        "API generation requested (request {})",
        get_request_id(&req).unwrap_or_default()
    );

    let generation = state.study_service.generate(&request).await?;

    Ok(HttpResponse::Ok().json(GenerateResponse {
        topic: generation.request.topic,
        difficulty: generation.request.difficulty,
        content_type: generation.request.content_type,
        source: generation.source.to_string(),
        raw: generation.raw,
        markup: generation.formatted.markup,
        question_blocks: generation.formatted.question_blocks,
        generated_at: Utc::now(),
    }))
}
