use crate::db::DbPool;
use crate::models::Card;
use crate::schema::cards;
use diesel::prelude::*;
use anyhow::Result;
use tracing::{instrument, debug, info};

/// Creates a new card in the database
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `user_id` - The owning user
/// * `category_id` - The category to file the card under
/// * `status` - The initial status
/// * `title` - The title
/// * `description` - The description, or an empty string
///
/// ### Returns
///
/// A Result containing the newly created Card if successful
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The insert fails, including foreign key violations on the user or category
#[instrument(skip(pool, description), fields(user_id = %user_id, category_id = %category_id))]
pub fn create_card(
    pool: &DbPool,
    user_id: &str,
    category_id: &str,
    status: String,
    title: String,
    description: String,
) -> Result<Card> {
    let conn = &mut pool.get()?;

    let new_card = Card::new(user_id.to_string(), category_id.to_string(), status, title, description);

    diesel::insert_into(cards::table)
        .values(&new_card)
        .execute(conn)?;

    info!("Created card with id: {}", new_card.get_id());
    Ok(new_card)
}

/// Retrieves a card by its ID
///
/// ### Returns
///
/// A Result containing an Option with the Card if found, or None if not found
#[instrument(skip(pool), fields(card_id = %card_id))]
pub fn get_card(pool: &DbPool, card_id: &str) -> Result<Option<Card>> {
    let conn = &mut pool.get()?;

    let result = cards::table
        .find(card_id)
        .select(Card::as_select())
        .first(conn)
        .optional()?;

    Ok(result)
}

/// Lists every card owned by a user, oldest first
#[instrument(skip(pool), fields(user_id = %user_id))]
pub fn list_cards_for_user(pool: &DbPool, user_id: &str) -> Result<Vec<Card>> {
    let conn = &mut pool.get()?;

    let result = cards::table
        .filter(cards::user_id.eq(user_id))
        .order((cards::create_at.asc(), cards::id.asc()))
        .select(Card::as_select())
        .load(conn)?;

    debug!("Found {} cards", result.len());
    Ok(result)
}

/// Lists the ids of every card owned by a user, oldest first
#[instrument(skip(pool), fields(user_id = %user_id))]
pub fn list_card_ids_for_user(pool: &DbPool, user_id: &str) -> Result<Vec<String>> {
    let conn = &mut pool.get()?;

    let result = cards::table
        .filter(cards::user_id.eq(user_id))
        .order((cards::create_at.asc(), cards::id.asc()))
        .select(cards::id)
        .load::<String>(conn)?;

    Ok(result)
}

/// Lists the ids of every card filed under a category, oldest first
#[instrument(skip(pool), fields(category_id = %category_id))]
pub fn list_card_ids_for_category(pool: &DbPool, category_id: &str) -> Result<Vec<String>> {
    let conn = &mut pool.get()?;

    let result = cards::table
        .filter(cards::category_id.eq(category_id))
        .order((cards::create_at.asc(), cards::id.asc()))
        .select(cards::id)
        .load::<String>(conn)?;

    Ok(result)
}

/// Writes every mutable field of `card` back to its row
///
/// ### Errors
///
/// Returns an error if the connection or the update fails, or if the card no
/// longer exists
#[instrument(skip(pool, card), fields(card_id = %card.get_id()))]
pub fn update_card(pool: &DbPool, card: &Card) -> Result<()> {
    let conn = &mut pool.get()?;

    let updated = diesel::update(cards::table.find(card.get_id()))
        .set((
            cards::status.eq(card.get_status()),
            cards::title.eq(card.get_title()),
            cards::description.eq(card.get_description()),
            cards::category_id.eq(card.get_category_id()),
            cards::update_at.eq(card.get_update_at_raw()),
        ))
        .execute(conn)?;

    if updated == 0 {
        anyhow::bail!("Card with id {} disappeared during update", card.get_id());
    }

    Ok(())
}

/// Deletes a card
///
/// ### Returns
///
/// The number of rows removed (0 or 1)
#[instrument(skip(pool), fields(card_id = %card_id))]
pub fn delete_card(pool: &DbPool, card_id: &str) -> Result<usize> {
    let conn = &mut pool.get()?;

    let deleted = diesel::delete(cards::table.find(card_id))
        .execute(conn)?;

    info!("Deleted {} card(s)", deleted);
    Ok(deleted)
}
