use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Card, CardCategory, User};

// ----------------------------------------------------------------------------
// Request payloads
//
// These are deserialized only after the guards have checked that the
// required fields are present, so a failure here means a field had the
// wrong JSON type. Unknown fields, `user_id` included, are ignored.
// ----------------------------------------------------------------------------

/// Data transfer object for creating or replacing a user
#[derive(Deserialize, Debug)]
pub struct UserPayload {
    pub name: String,
    pub email: String,

    /// Plaintext password, hashed before it is stored
    pub password: String,

    /// Avatar location; omitted or null means empty
    #[serde(default)]
    pub photo: Option<String>,
}

/// Data transfer object for creating a new card
#[derive(Deserialize, Debug)]
pub struct CreateCardDto {
    pub title: String,
    pub category_id: String,
    pub status: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Data transfer object for replacing a card's mutable fields
#[derive(Deserialize, Debug)]
pub struct UpdateCardDto {
    /// The card to update
    pub id: String,
    pub status: String,
    pub title: String,
    pub category_id: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Data transfer object naming a single card
#[derive(Deserialize, Debug)]
pub struct CardIdDto {
    pub id: String,
}

/// Data transfer object for creating a new card category
#[derive(Deserialize, Debug)]
pub struct CreateCardCategoryDto {
    pub name: String,
    pub color: String,
}

/// Data transfer object for replacing a card category's name and colour
#[derive(Deserialize, Debug)]
pub struct UpdateCardCategoryDto {
    /// The category to update
    pub category_id: String,
    pub name: String,
    pub color: String,
}

/// Data transfer object naming a single card category
#[derive(Deserialize, Debug)]
pub struct CardCategoryIdDto {
    pub category_id: String,
}

// ----------------------------------------------------------------------------
// Response shapes
//
// Flat objects: scalar fields plus the ids of related rows, never nested
// objects. Timestamps serialize as RFC 3339 in UTC, with a trailing `Z`.
// ----------------------------------------------------------------------------

/// Serialized view of a user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: String,
    pub name: String,

    /// The stored bcrypt hash
    pub password: String,
    pub email: String,
    pub photo: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,

    /// Ids of the user's cards
    pub card: Vec<String>,

    /// Ids of the user's card categories
    pub card_category: Vec<String>,
}

impl UserResponse {
    pub fn new(user: &User, card: Vec<String>, card_category: Vec<String>) -> Self {
        Self {
            id: user.get_id(),
            name: user.get_name(),
            password: user.get_password_hash(),
            email: user.get_email(),
            photo: user.get_photo(),
            create_at: user.get_create_at(),
            update_at: user.get_update_at(),
            card,
            card_category,
        }
    }
}

/// Serialized view of a card
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardResponse {
    pub id: String,
    pub status: String,
    pub title: String,
    pub description: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
    pub user_id: String,
    pub category_id: String,
}

impl From<&Card> for CardResponse {
    fn from(card: &Card) -> Self {
        Self {
            id: card.get_id(),
            status: card.get_status(),
            title: card.get_title(),
            description: card.get_description(),
            create_at: card.get_create_at(),
            update_at: card.get_update_at(),
            user_id: card.get_user_id(),
            category_id: card.get_category_id(),
        }
    }
}

/// Serialized view of a card category
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardCategoryResponse {
    pub id: String,
    pub name: String,
    pub color: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,

    /// Ids of the cards filed under this category
    pub card_id: Vec<String>,
}

impl CardCategoryResponse {
    pub fn new(category: &CardCategory, card_id: Vec<String>) -> Self {
        Self {
            id: category.get_id(),
            name: category.get_name(),
            color: category.get_color(),
            create_at: category.get_create_at(),
            update_at: category.get_update_at(),
            card_id,
        }
    }
}
