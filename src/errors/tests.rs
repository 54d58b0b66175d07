use super::*;
use axum::body::to_bytes;
use axum::response::IntoResponse;

/// Helper to extract status code and body JSON from an ApiError response
async fn error_response(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_database_error_hides_details() {
    let error = ApiError::Database(anyhow::anyhow!("connection refused"));
    let (status, body) = error_response(error).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let error = ApiError::Internal(anyhow::anyhow!("invalid cost").context("hashing password"));
    assert_eq!(error.to_string(), "Internal error: hashing password");

    let (status, body) = error_response(error).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn test_missing_field_response() {
    let error = ApiError::MissingField("password".to_string());
    let (status, body) = error_response(error).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "required field \"password\"");
}

#[tokio::test]
async fn test_invalid_body_response() {
    let error = ApiError::InvalidBody("expected value at line 1 column 1".to_string());
    let (status, body) = error_response(error).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid JSON body: expected value at line 1 column 1");
}

#[tokio::test]
async fn test_invalid_user_id_response() {
    let (status, body) = error_response(ApiError::InvalidUserId).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid user_id");
}

#[tokio::test]
async fn test_invalid_category_id_response() {
    let (status, body) = error_response(ApiError::InvalidCategoryId).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid category_id");
}

#[tokio::test]
async fn test_card_not_found_response() {
    let (status, body) = error_response(ApiError::CardNotFound).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "card not found");
}

#[tokio::test]
async fn test_card_category_not_found_response() {
    let (status, body) = error_response(ApiError::CardCategoryNotFound).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "card category not found");
}
