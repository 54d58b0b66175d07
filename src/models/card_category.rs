use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::now;

/// A named, coloured column that a user groups cards into
#[derive(Queryable, Selectable, Insertable, Identifiable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::card_categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CardCategory {
    /// Unique identifier for the category (UUID v4 as string)
    id: String,

    /// The name of the category
    name: String,

    /// Free-form colour, usually a hex code
    color: String,

    /// When this category was created
    create_at: NaiveDateTime,

    /// When this category was last modified
    update_at: NaiveDateTime,

    /// The owning user
    user_id: String,
}

impl CardCategory {
    /// Creates a new category owned by `user_id`
    pub fn new(user_id: String, name: String, color: String) -> Self {
        let timestamp = now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            color,
            create_at: timestamp,
            update_at: timestamp,
            user_id,
        }
    }

    /// Replaces the name and colour and touches `update_at`
    pub fn update(&mut self, name: String, color: String) {
        self.name = name;
        self.color = color;
        self.update_at = now();
    }

    /// Whether this category belongs to the given user
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    pub fn get_color(&self) -> String {
        self.color.clone()
    }

    pub fn get_user_id(&self) -> String {
        self.user_id.clone()
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
