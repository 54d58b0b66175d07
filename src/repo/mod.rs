/// Repository module
///
/// This module provides the data access layer for the application. Every
/// function takes the connection pool explicitly, and every single-row fetch
/// returns `Option` rather than failing when the row is absent, so callers
/// decide what a missing row means.
///
/// Each entity exposes the same capability set: create, get, list for a
/// user, update and delete.

mod user_repo;
mod card_category_repo;
mod card_repo;

// Re-export all repository functions
pub use user_repo::*;
pub use card_category_repo::*;
pub use card_repo::*;
