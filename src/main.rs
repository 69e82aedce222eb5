mod config;
mod db;
mod error;
mod handlers;
mod models;
mod ranking;
mod services;
mod validation;

use config::{Config, RankingConfig};
use db::Db;
use ntex::web;
use ntex_cors::Cors;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub struct AppState {
    pub db: Db,
    pub ranking: RankingConfig,
}

#[ntex::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let db = Db::open(&config.database_path).map_err(|e| {
        tracing::error!("failed to open database {}: {}", config.database_path, e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;
    let state = Arc::new(AppState {
        db,
        ranking: config.ranking,
    });

    info!(
        "Reaction board server starting on {}:{} (window {}, floor {}s)",
        config.host,
        config.port,
        config.ranking.window_size,
        config.ranking.min_plausible_latency_seconds
    );

    web::HttpServer::new(move || {
        web::App::new()
            .state(state.clone())
            .wrap(
                Cors::new()
                    .allowed_origin("*")
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec!["Content-Type"])
                    .max_age(3600)
                    .finish(),
            )
            .route("/api/health", web::get().to(health))
            // Trial submissions
            .route("/save", web::post().to(handlers::trials::save_trial))
            .route("/api/results", web::post().to(handlers::trials::save_trial))
            // Leaderboard
            .route("/leaderboard", web::get().to(handlers::leaderboard::get_leaderboard))
            .route("/api/leaderboard", web::get().to(handlers::leaderboard::get_leaderboard))
    })
    .bind(format!("{}:{}", config.host, config.port))?
    .run()
    .await
}

async fn health() -> web::HttpResponse {
    web::HttpResponse::Ok().json(&serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
