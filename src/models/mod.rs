/// Data models module
///
/// This module defines the rows persisted for the kanban board: users,
/// the categories they group their cards into, and the cards themselves.

mod user;
pub use user::User;

mod card_category;
pub use card_category::CardCategory;

mod card;
pub use card::Card;

use chrono::{NaiveDateTime, Utc};

/// Current time in the representation stored by every timestamp column
pub(crate) fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
