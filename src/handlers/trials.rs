use crate::error::AppError;
use crate::models::trial::TrialSubmission;
use crate::services::trials as service;
use crate::AppState;
use ntex::web::{self, HttpResponse};
use std::sync::Arc;

pub async fn save_trial(
    state: web::types::State<Arc<AppState>>,
    body: web::types::Json<TrialSubmission>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let result = service::save_trial(&state.db, &state.ranking, req)?;
    Ok(HttpResponse::Ok().json(&result))
}
