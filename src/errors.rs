use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
    #[error("Internal error: {0}")]
    Internal(anyhow::Error),
    #[error("required field \"{0}\"")]
    MissingField(String),
    #[error("invalid JSON body: {0}")]
    InvalidBody(String),
    #[error("invalid user_id")]
    InvalidUserId,
    #[error("invalid category_id")]
    InvalidCategoryId,
    #[error("card not found")]
    CardNotFound,
    #[error("card category not found")]
    CardCategoryNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MissingField(_)
            | ApiError::InvalidBody(_)
            | ApiError::InvalidUserId
            | ApiError::InvalidCategoryId => StatusCode::BAD_REQUEST,
            ApiError::CardNotFound | ApiError::CardCategoryNotFound => StatusCode::NOT_FOUND,
        };

        let message = match self {
            ApiError::Database(err) => {
                error!("Database error: {:#}", err);
                "Internal server error".to_string()
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:#}", err);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests;
