use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::now;

/// A single task on the board
///
/// Every card belongs to exactly one user and sits in exactly one of that
/// user's categories.
#[derive(Queryable, Selectable, Insertable, Identifiable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::cards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Card {
    /// Unique identifier for the card (UUID v4 as string)
    id: String,

    /// Free-form workflow status, e.g. "todo" or "done"
    status: String,

    /// Short title shown on the board
    title: String,

    /// Longer description, empty when unset
    description: String,

    /// When this card was created
    create_at: NaiveDateTime,

    /// When this card was last modified
    update_at: NaiveDateTime,

    /// The owning user
    user_id: String,

    /// The category this card is filed under
    category_id: String,
}

impl Card {
    /// Creates a new card
    ///
    /// ### Arguments
    ///
    /// * `user_id` - The owning user
    /// * `category_id` - The category to file the card under
    /// * `status` - The initial status
    /// * `title` - The card title
    /// * `description` - The description, or an empty string
    ///
    /// ### Returns
    ///
    /// A new `Card` with a fresh id and both timestamps set to now
    pub fn new(
        user_id: String,
        category_id: String,
        status: String,
        title: String,
        description: String,
    ) -> Self {
        let timestamp = now();
        Self {
            id: Uuid::new_v4().to_string(),
            status,
            title,
            description,
            create_at: timestamp,
            update_at: timestamp,
            user_id,
            category_id,
        }
    }

    /// Replaces every mutable field and touches `update_at`
    pub fn update(&mut self, status: String, title: String, description: String, category_id: String) {
        self.status = status;
        self.title = title;
        self.description = description;
        self.category_id = category_id;
        self.update_at = now();
    }

    /// Whether this card belongs to the given user
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    pub fn get_status(&self) -> String {
        self.status.clone()
    }

    pub fn get_title(&self) -> String {
        self.title.clone()
    }

    pub fn get_description(&self) -> String {
        self.description.clone()
    }

    pub fn get_user_id(&self) -> String {
        self.user_id.clone()
    }

    pub fn get_category_id(&self) -> String {
        self.category_id.clone()
    }

    pub fn get_create_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.create_at, Utc)
    }

    pub fn get_create_at_raw(&self) -> NaiveDateTime {
        self.create_at
    }

    pub fn get_update_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.update_at, Utc)
    }

    pub fn get_update_at_raw(&self) -> NaiveDateTime {
        self.update_at
    }
}
