use crate::db::DbPool;
use crate::models::User;
use crate::schema::users;
use diesel::prelude::*;
use anyhow::Result;
use tracing::{instrument, debug, info};

/// Creates a new user in the database
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `name` - The display name
/// * `password_hash` - The already hashed password
/// * `email` - The email address
/// * `photo` - The avatar location, or an empty string
///
/// ### Returns
///
/// A Result containing the newly created User if successful
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database insert operation fails
#[instrument(skip(pool, password_hash), fields(name = %name))]
pub fn create_user(pool: &DbPool, name: String, password_hash: String, email: String, photo: String) -> Result<User> {
    let conn = &mut pool.get()?;

    let new_user = User::new(name, password_hash, email, photo);

    diesel::insert_into(users::table)
        .values(&new_user)
        .execute(conn)?;

    info!("Created user with id: {}", new_user.get_id());
    Ok(new_user)
}

/// Retrieves a user from the database by its ID
///
/// ### Returns
///
/// A Result containing an Option with the User if found, or None if not found
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database query fails for reasons other than the user not existing
#[instrument(skip(pool), fields(user_id = %user_id))]
pub fn get_user(pool: &DbPool, user_id: &str) -> Result<Option<User>> {
    let conn = &mut pool.get()?;

    let result = users::table
        .find(user_id)
        .select(User::as_select())
        .first(conn)
        .optional()?;

    debug!("User found: {}", result.is_some());
    Ok(result)
}

/// Writes every mutable field of `user` back to its row
///
/// ### Errors
///
/// Returns an error if the connection or the update fails, or if the user no
/// longer exists
#[instrument(skip(pool, user), fields(user_id = %user.get_id()))]
pub fn update_user(pool: &DbPool, user: &User) -> Result<()> {
    let conn = &mut pool.get()?;

    let updated = diesel::update(users::table.find(user.get_id()))
        .set((
            users::name.eq(user.get_name()),
            users::password.eq(user.get_password_hash()),
            users::email.eq(user.get_email()),
            users::photo.eq(user.get_photo()),
            users::update_at.eq(user.get_update_at_raw()),
        ))
        .execute(conn)?;

    if updated == 0 {
        anyhow::bail!("User with id {} disappeared during update", user.get_id());
    }

    debug!("Updated user");
    Ok(())
}

/// Deletes a user together with all of its cards and card categories
///
/// ### Returns
///
/// The number of user rows removed (0 or 1)
#[instrument(skip(pool), fields(user_id = %user_id))]
pub fn delete_user(pool: &DbPool, user_id: &str) -> Result<usize> {
    let conn = &mut pool.get()?;

    let deleted = diesel::delete(users::table.find(user_id))
        .execute(conn)?;

    info!("Deleted {} user(s)", deleted);
    Ok(deleted)
}
