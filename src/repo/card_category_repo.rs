use crate::db::DbPool;
use crate::models::CardCategory;
use crate::schema::card_categories;
use diesel::prelude::*;
use anyhow::Result;
use tracing::{instrument, debug, info};

/// Creates a new card category owned by `user_id`
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The insert fails, including when `user_id` does not reference a user
#[instrument(skip(pool), fields(user_id = %user_id, name = %name))]
pub fn create_card_category(pool: &DbPool, user_id: &str, name: String, color: String) -> Result<CardCategory> {
    let conn = &mut pool.get()?;

    let new_category = CardCategory::new(user_id.to_string(), name, color);

    diesel::insert_into(card_categories::table)
        .values(&new_category)
        .execute(conn)?;

    info!("Created card category with id: {}", new_category.get_id());
    Ok(new_category)
}

/// Retrieves a card category by its ID, or None if there is no such row
#[instrument(skip(pool), fields(category_id = %category_id))]
pub fn get_card_category(pool: &DbPool, category_id: &str) -> Result<Option<CardCategory>> {
    let conn = &mut pool.get()?;

    let result = card_categories::table
        .find(category_id)
        .select(CardCategory::as_select())
        .first(conn)
        .optional()?;

    Ok(result)
}

/// Lists a user's card categories, oldest first
#[instrument(skip(pool), fields(user_id = %user_id))]
pub fn list_card_categories_for_user(pool: &DbPool, user_id: &str) -> Result<Vec<CardCategory>> {
    let conn = &mut pool.get()?;

    let result = card_categories::table
        .filter(card_categories::user_id.eq(user_id))
        .order((card_categories::create_at.asc(), card_categories::id.asc()))
        .select(CardCategory::as_select())
        .load(conn)?;

    debug!("Found {} card categories", result.len());
    Ok(result)
}

/// Lists the ids of a user's card categories, oldest first
#[instrument(skip(pool), fields(user_id = %user_id))]
pub fn list_card_category_ids_for_user(pool: &DbPool, user_id: &str) -> Result<Vec<String>> {
    let conn = &mut pool.get()?;

    let result = card_categories::table
        .filter(card_categories::user_id.eq(user_id))
        .order((card_categories::create_at.asc(), card_categories::id.asc()))
        .select(card_categories::id)
        .load::<String>(conn)?;

    Ok(result)
}

/// Writes the mutable fields of `category` back to its row
#[instrument(skip(pool, category), fields(category_id = %category.get_id()))]
pub fn update_card_category(pool: &DbPool, category: &CardCategory) -> Result<()> {
    let conn = &mut pool.get()?;

    let updated = diesel::update(card_categories::table.find(category.get_id()))
        .set((
            card_categories::name.eq(category.get_name()),
            card_categories::color.eq(category.get_color()),
            card_categories::update_at.eq(category.get_update_at_raw()),
        ))
        .execute(conn)?;

    if updated == 0 {
        anyhow::bail!("Card category with id {} disappeared during update", category.get_id());
    }

    Ok(())
}

/// Deletes a card category and every card filed under it
///
/// ### Returns
///
/// The number of category rows removed (0 or 1)
#[instrument(skip(pool), fields(category_id = %category_id))]
pub fn delete_card_category(pool: &DbPool, category_id: &str) -> Result<usize> {
    let conn = &mut pool.get()?;

    let deleted = diesel::delete(card_categories::table.find(category_id))
        .execute(conn)?;

    info!("Deleted {} card category(ies)", deleted);
    Ok(deleted)
}
