use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;
use tracing::{instrument, debug, info};

use crate::db::DbPool;
use crate::dto::{UserPayload, UserResponse};
use crate::errors::ApiError;
use crate::guards::{parse_body, payload, required_fields, token_required};
use crate::models::User;
use crate::password::hash_password;
use crate::repo;

/// Builds the serialized view of a user, including the ids it owns
pub(crate) fn user_response(pool: &DbPool, user: &User) -> Result<UserResponse, ApiError> {
    let cards = repo::list_card_ids_for_user(pool, &user.get_id())
        .map_err(ApiError::Database)?;
    let categories = repo::list_card_category_ids_for_user(pool, &user.get_id())
        .map_err(ApiError::Database)?;
    Ok(UserResponse::new(user, cards, categories))
}

/// Handler for fetching the calling user
///
/// This function handles GET requests to `/user`. The user returned is the
/// one named by `user_id`; there is no way to fetch someone else.
#[instrument(skip(pool, body))]
pub async fn get_user_handler(
    State(pool): State<Arc<DbPool>>,
    body: Bytes,
) -> Result<Json<UserResponse>, ApiError> {
    let body = parse_body(&body)?;
    let user = token_required(&pool, &body)?;

    debug!("Returning user {}", user.get_id());
    Ok(Json(user_response(&pool, &user)?))
}

/// Handler for registering a new user
///
/// This function handles POST requests to `/user`.
///
/// ### Required fields
///
/// `name`, `email`, `password`; `photo` is optional
///
/// ### Returns
///
/// The newly created user as JSON, with the password replaced by its hash
#[instrument(skip(pool, body))]
pub async fn create_user_handler(
    State(pool): State<Arc<DbPool>>,
    body: Bytes,
) -> Result<Json<UserResponse>, ApiError> {
    let body = parse_body(&body)?;
    required_fields(&body, &["name", "email", "password"])?;
    let payload: UserPayload = payload(body)?;

    info!("Creating new user");

    let password_hash = hash_password(payload.password).await.map_err(ApiError::Internal)?;
    let user = repo::create_user(
        &pool,
        payload.name,
        password_hash,
        payload.email,
        payload.photo.unwrap_or_default(),
    )
    .map_err(ApiError::Database)?;

    info!("Successfully created user with id: {}", user.get_id());
    Ok(Json(user_response(&pool, &user)?))
}

/// Handler for replacing the calling user's profile
///
/// This function handles PUT requests to `/user`. The password is always
/// re-hashed, and an omitted `photo` clears the stored one.
#[instrument(skip(pool, body))]
pub async fn update_user_handler(
    State(pool): State<Arc<DbPool>>,
    body: Bytes,
) -> Result<Json<UserResponse>, ApiError> {
    let body = parse_body(&body)?;
    let mut user = token_required(&pool, &body)?;
    required_fields(&body, &["name", "password", "email"])?;
    let payload: UserPayload = payload(body)?;

    info!("Updating user {}", user.get_id());

    let password_hash = hash_password(payload.password).await.map_err(ApiError::Internal)?;
    user.update(
        payload.name,
        password_hash,
        payload.email,
        payload.photo.unwrap_or_default(),
    );
    repo::update_user(&pool, &user).map_err(ApiError::Database)?;

    Ok(Json(user_response(&pool, &user)?))
}

/// Handler for deleting the calling user
///
/// This function handles DELETE requests to `/user`. All of the user's cards
/// and categories go with it.
///
/// ### Returns
///
/// The user as it was before deletion
#[instrument(skip(pool, body))]
pub async fn delete_user_handler(
    State(pool): State<Arc<DbPool>>,
    body: Bytes,
) -> Result<Json<UserResponse>, ApiError> {
    let body = parse_body(&body)?;
    let user = token_required(&pool, &body)?;

    let response = user_response(&pool, &user)?;
    repo::delete_user(&pool, &user.get_id()).map_err(ApiError::Database)?;

    info!("Deleted user {}", user.get_id());
    Ok(Json(response))
}
