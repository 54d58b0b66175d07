use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{instrument, debug, info, warn};

use crate::db::DbPool;
use crate::dto::{CardCategoryIdDto, CardCategoryResponse, CreateCardCategoryDto, UpdateCardCategoryDto};
use crate::errors::ApiError;
use crate::guards::{parse_body, payload, required_fields, token_required};
use crate::models::CardCategory;
use crate::repo;

/// Builds the serialized view of a category, including its card ids
fn category_response(pool: &DbPool, category: &CardCategory) -> Result<CardCategoryResponse, ApiError> {
    let cards = repo::list_card_ids_for_category(pool, &category.get_id())
        .map_err(ApiError::Database)?;
    Ok(CardCategoryResponse::new(category, cards))
}

/// Looks up a category owned by the caller
///
/// Another user's category is indistinguishable from a missing one.
fn owned_category(pool: &DbPool, user_id: &str, category_id: &str) -> Result<CardCategory, ApiError> {
    match repo::get_card_category(pool, category_id).map_err(ApiError::Database)? {
        Some(category) if category.is_owned_by(user_id) => Ok(category),
        Some(_) => {
            warn!("Card category {} belongs to another user", category_id);
            Err(ApiError::CardCategoryNotFound)
        }
        None => Err(ApiError::CardCategoryNotFound),
    }
}

/// Handler for listing the caller's card categories
///
/// This function handles GET requests to `/card-category`.
#[instrument(skip(pool, body))]
pub async fn list_card_categories_handler(
    State(pool): State<Arc<DbPool>>,
    body: Bytes,
) -> Result<Json<Vec<CardCategoryResponse>>, ApiError> {
    let body = parse_body(&body)?;
    let user = token_required(&pool, &body)?;

    let categories = repo::list_card_categories_for_user(&pool, &user.get_id())
        .map_err(ApiError::Database)?;

    info!("Retrieved {} card categories", categories.len());

    let responses = categories
        .iter()
        .map(|category| category_response(&pool, category))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(responses))
}

/// Handler for creating a new card category
///
/// This function handles POST requests to `/card-category`.
///
/// ### Required fields
///
/// `user_id`, `name`, `color`
#[instrument(skip(pool, body))]
pub async fn create_card_category_handler(
    State(pool): State<Arc<DbPool>>,
    body: Bytes,
) -> Result<Json<CardCategoryResponse>, ApiError> {
    let body = parse_body(&body)?;
    let user = token_required(&pool, &body)?;
    required_fields(&body, &["name", "color"])?;
    let payload: CreateCardCategoryDto = payload(body)?;

    info!("Creating new card category");

    let category = repo::create_card_category(&pool, &user.get_id(), payload.name, payload.color)
        .map_err(ApiError::Database)?;

    info!("Successfully created card category with id: {}", category.get_id());
    Ok(Json(CardCategoryResponse::new(&category, Vec::new())))
}

/// Handler for renaming or recolouring a card category
///
/// This function handles PUT requests to `/card-category`. The category is
/// named by `category_id` in the body.
#[instrument(skip(pool, body))]
pub async fn update_card_category_handler(
    State(pool): State<Arc<DbPool>>,
    body: Bytes,
) -> Result<Json<CardCategoryResponse>, ApiError> {
    let body = parse_body(&body)?;
    let user = token_required(&pool, &body)?;
    required_fields(&body, &["category_id", "name", "color"])?;
    let payload: UpdateCardCategoryDto = payload(body)?;

    let mut category = owned_category(&pool, &user.get_id(), &payload.category_id)?;
    category.update(payload.name, payload.color);
    repo::update_card_category(&pool, &category).map_err(ApiError::Database)?;

    info!("Updated card category {}", category.get_id());
    Ok(Json(category_response(&pool, &category)?))
}

/// Handler for deleting a card category and every card filed under it
///
/// This function handles DELETE requests to `/card-category`.
///
/// ### Returns
///
/// The category as it was before deletion
#[instrument(skip(pool, body))]
pub async fn delete_card_category_handler(
    State(pool): State<Arc<DbPool>>,
    body: Bytes,
) -> Result<Json<CardCategoryResponse>, ApiError> {
    let body = parse_body(&body)?;
    let user = token_required(&pool, &body)?;
    required_fields(&body, &["category_id"])?;
    let payload: CardCategoryIdDto = payload(body)?;

    let category = owned_category(&pool, &user.get_id(), &payload.category_id)?;
    let response = category_response(&pool, &category)?;

    repo::delete_card_category(&pool, &category.get_id()).map_err(ApiError::Database)?;

    info!("Deleted card category {} and {} card(s)", category.get_id(), response.card_id.len());
    Ok(Json(response))
}

/// Handler for retrieving a single card category
///
/// This function handles GET requests to `/card-category/{card_category_id}`.
#[instrument(skip(pool, body), fields(category_id = %category_id))]
pub async fn get_card_category_handler(
    State(pool): State<Arc<DbPool>>,
    Path(category_id): Path<String>,
    body: Bytes,
) -> Result<Json<CardCategoryResponse>, ApiError> {
    let body = parse_body(&body)?;
    let user = token_required(&pool, &body)?;

    let category = owned_category(&pool, &user.get_id(), &category_id)?;

    debug!("Card category found with id: {}", category.get_id());
    Ok(Json(category_response(&pool, &category)?))
}
