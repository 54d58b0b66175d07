/// Kanban: a small task board backend
///
/// Users own cards, and cards are grouped into per-user categories. The
/// whole surface is JSON over HTTP, served with Axum on top of a SQLite
/// database accessed through Diesel.
///
/// ### Modules
///
/// - `config`: Layered configuration (defaults, TOML file, env and CLI)
/// - `db`: Database connection management
/// - `models`: Rows for users, cards and card categories
/// - `dto`: Request payloads and serialized response shapes
/// - `repo`: Repository layer for database operations
/// - `guards`: Body parsing, required-field and `user_id` checks
/// - `handlers`: HTTP handlers
/// - `password`: Password hashing
/// - `schema`: Database schema definitions
///
/// ### Web API
///
/// Every endpoint takes a JSON body. All but `POST /user` need a `user_id`
/// naming an existing user.
///
/// - `GET|POST|PUT|DELETE /user`: The calling user
/// - `GET|POST|PUT|DELETE /card`: The caller's cards
/// - `GET /card/{card_id}`: One of the caller's cards
/// - `GET|POST|PUT|DELETE /card-category`: The caller's card categories
/// - `GET /card-category/{card_category_id}`: One of the caller's categories

/// Configuration module
pub mod config;

/// Database connection module
pub mod db;

/// Data transfer objects
pub mod dto;

/// API error type
pub mod errors;

/// Request guards
pub mod guards;

/// HTTP handlers
pub mod handlers;

/// Data models module
pub mod models;

/// Password hashing
pub mod password;

/// Repository module for database operations
pub mod repo;

/// Database schema module
pub mod schema;

#[cfg(test)]
mod test_utils;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use errors::ApiError;

/// Creates the application router with all routes
///
/// ### Arguments
///
/// * `pool` - The database connection pool to be shared with all handlers
///
/// ### Returns
///
/// An Axum Router configured with all routes and the database pool as state
pub fn create_app(pool: Arc<db::DbPool>) -> Router {
    Router::new()
        .route(
            "/user",
            get(handlers::get_user_handler)
                .post(handlers::create_user_handler)
                .put(handlers::update_user_handler)
                .delete(handlers::delete_user_handler),
        )
        .route(
            "/card",
            get(handlers::list_cards_handler)
                .post(handlers::create_card_handler)
                .put(handlers::update_card_handler)
                .delete(handlers::delete_card_handler),
        )
        .route("/card/{card_id}", get(handlers::get_card_handler))
        .route(
            "/card-category",
            get(handlers::list_card_categories_handler)
                .post(handlers::create_card_category_handler)
                .put(handlers::update_card_category_handler)
                .delete(handlers::delete_card_category_handler),
        )
        .route(
            "/card-category/{card_category_id}",
            get(handlers::get_card_category_handler),
        )
        .with_state(pool)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Runs the embedded migrations
///
/// ### Arguments
///
/// * `conn` - A mutable reference to a SQLite connection
///
/// ### Errors
///
/// Returns an error if any pending migration fails to apply
pub fn run_migrations(conn: &mut diesel::SqliteConnection) -> anyhow::Result<()> {
    use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

    const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    tracing::info!("Applied {} migration(s)", applied.len());
    Ok(())
}
