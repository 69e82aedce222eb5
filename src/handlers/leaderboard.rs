use crate::error::AppError;
use crate::models::leaderboard::LeaderboardQuery;
use crate::services::leaderboard as service;
use crate::AppState;
use ntex::web::{self, HttpResponse};
use std::sync::Arc;

pub async fn get_leaderboard(
    state: web::types::State<Arc<AppState>>,
    query: web::types::Query<LeaderboardQuery>,
) -> Result<HttpResponse, AppError> {
    let view = service::get_leaderboard(&state.db, &state.ranking, query.email.as_deref())?;
    Ok(HttpResponse::Ok().json(&view))
}
