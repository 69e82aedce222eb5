use ntex::http::StatusCode;
use ntex::web::{HttpResponse, WebResponseError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The trial store could not be read or written.
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl WebResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Db(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self, _: &ntex::web::HttpRequest) -> HttpResponse {
        let message = match self {
            AppError::Db(e) => {
                tracing::error!("trial store failure: {}", e);
                "Leaderboard store unavailable"
            }
            AppError::BadRequest(msg) => msg.as_str(),
        };
        HttpResponse::build(self.status_code()).json(&serde_json::json!({ "error": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let unavailable = AppError::Db(rusqlite::Error::InvalidQuery);
        assert_eq!(unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let bad = AppError::BadRequest("Missing required field: email".into());
        assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(bad.to_string(), "Bad request: Missing required field: email");
    }
}
