use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{instrument, debug, info, warn};

use crate::db::DbPool;
use crate::dto::{CardIdDto, CardResponse, CreateCardDto, UpdateCardDto};
use crate::errors::ApiError;
use crate::guards::{parse_body, payload, required_fields, token_required};
use crate::models::{Card, CardCategory};
use crate::repo;

/// Looks up a category the caller may file cards under
///
/// A category that does not exist and one owned by somebody else are both
/// reported as `invalid category_id`.
fn owned_category(pool: &DbPool, user_id: &str, category_id: &str) -> Result<CardCategory, ApiError> {
    match repo::get_card_category(pool, category_id).map_err(ApiError::Database)? {
        Some(category) if category.is_owned_by(user_id) => Ok(category),
        Some(_) => {
            warn!("Category {} belongs to another user", category_id);
            Err(ApiError::InvalidCategoryId)
        }
        None => Err(ApiError::InvalidCategoryId),
    }
}

/// Looks up a card owned by the caller
///
/// Another user's card is indistinguishable from a missing one.
fn owned_card(pool: &DbPool, user_id: &str, card_id: &str) -> Result<Card, ApiError> {
    match repo::get_card(pool, card_id).map_err(ApiError::Database)? {
        Some(card) if card.is_owned_by(user_id) => Ok(card),
        Some(_) => {
            warn!("Card {} belongs to another user", card_id);
            Err(ApiError::CardNotFound)
        }
        None => Err(ApiError::CardNotFound),
    }
}

/// Handler for listing the caller's cards
///
/// This function handles GET requests to `/card`.
#[instrument(skip(pool, body))]
pub async fn list_cards_handler(
    State(pool): State<Arc<DbPool>>,
    body: Bytes,
) -> Result<Json<Vec<CardResponse>>, ApiError> {
    let body = parse_body(&body)?;
    let user = token_required(&pool, &body)?;

    let cards = repo::list_cards_for_user(&pool, &user.get_id())
        .map_err(ApiError::Database)?;

    info!("Retrieved {} cards", cards.len());
    Ok(Json(cards.iter().map(CardResponse::from).collect()))
}

/// Handler for creating a new card
///
/// This function handles POST requests to `/card`.
///
/// ### Required fields
///
/// `user_id`, `title`, `category_id`, `status`; `description` is optional
///
/// ### Returns
///
/// The newly created card as JSON, or `invalid category_id` when the
/// category is missing or not the caller's
#[instrument(skip(pool, body))]
pub async fn create_card_handler(
    State(pool): State<Arc<DbPool>>,
    body: Bytes,
) -> Result<Json<CardResponse>, ApiError> {
    let body = parse_body(&body)?;
    let user = token_required(&pool, &body)?;
    required_fields(&body, &["title", "category_id", "status"])?;
    let payload: CreateCardDto = payload(body)?;

    info!("Creating new card");

    let category = owned_category(&pool, &user.get_id(), &payload.category_id)?;

    let card = repo::create_card(
        &pool,
        &user.get_id(),
        &category.get_id(),
        payload.status,
        payload.title,
        payload.description.unwrap_or_default(),
    )
    .map_err(ApiError::Database)?;

    info!("Successfully created card with id: {}", card.get_id());
    Ok(Json(CardResponse::from(&card)))
}

/// Handler for replacing a card's status, title, description and category
///
/// This function handles PUT requests to `/card`.
#[instrument(skip(pool, body))]
pub async fn update_card_handler(
    State(pool): State<Arc<DbPool>>,
    body: Bytes,
) -> Result<Json<CardResponse>, ApiError> {
    let body = parse_body(&body)?;
    let user = token_required(&pool, &body)?;
    required_fields(&body, &["id", "status", "title", "category_id"])?;
    let payload: UpdateCardDto = payload(body)?;

    let mut card = owned_card(&pool, &user.get_id(), &payload.id)?;
    let category = owned_category(&pool, &user.get_id(), &payload.category_id)?;

    card.update(
        payload.status,
        payload.title,
        payload.description.unwrap_or_default(),
        category.get_id(),
    );
    repo::update_card(&pool, &card).map_err(ApiError::Database)?;

    info!("Updated card {}", card.get_id());
    Ok(Json(CardResponse::from(&card)))
}

/// Handler for deleting one of the caller's cards
///
/// This function handles DELETE requests to `/card`.
///
/// ### Returns
///
/// The card as it was before deletion
#[instrument(skip(pool, body))]
pub async fn delete_card_handler(
    State(pool): State<Arc<DbPool>>,
    body: Bytes,
) -> Result<Json<CardResponse>, ApiError> {
    let body = parse_body(&body)?;
    let user = token_required(&pool, &body)?;
    required_fields(&body, &["id"])?;
    let payload: CardIdDto = payload(body)?;

    let card = owned_card(&pool, &user.get_id(), &payload.id)?;
    let response = CardResponse::from(&card);

    repo::delete_card(&pool, &card.get_id()).map_err(ApiError::Database)?;

    info!("Deleted card {}", card.get_id());
    Ok(Json(response))
}

/// Handler for retrieving a single card
///
/// This function handles GET requests to `/card/{card_id}`.
#[instrument(skip(pool, body), fields(card_id = %card_id))]
pub async fn get_card_handler(
    State(pool): State<Arc<DbPool>>,
    Path(card_id): Path<String>,
    body: Bytes,
) -> Result<Json<CardResponse>, ApiError> {
    let body = parse_body(&body)?;
    let user = token_required(&pool, &body)?;

    let card = owned_card(&pool, &user.get_id(), &card_id)?;

    debug!("Card found with id: {}", card.get_id());
    Ok(Json(CardResponse::from(&card)))
}
