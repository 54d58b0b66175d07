use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::now;

/// A registered user of the board
///
/// `password` always holds a bcrypt hash, never the plaintext.
#[derive(Queryable, Selectable, Insertable, Identifiable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    /// Unique identifier for the user (UUID v4 as string)
    id: String,

    /// Display name
    name: String,

    /// bcrypt hash of the user's password
    password: String,

    /// Contact email, not validated
    email: String,

    /// URL or path of the avatar, empty when unset
    photo: String,

    /// When this user was created
    create_at: NaiveDateTime,

    /// When this user was last modified
    update_at: NaiveDateTime,
}

impl User {
    /// Creates a new user with a freshly generated id
    ///
    /// ### Arguments
    ///
    /// * `name` - The display name
    /// * `password_hash` - The already hashed password
    /// * `email` - The email address
    /// * `photo` - The avatar location, or an empty string
    ///
    /// ### Returns
    ///
    /// A new `User` whose `create_at` and `update_at` are both the current time
    pub fn new(name: String, password_hash: String, email: String, photo: String) -> Self {
        let timestamp = now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            password: password_hash,
            email,
            photo,
            create_at: timestamp,
            update_at: timestamp,
        }
    }

    /// Replaces every mutable field and touches `update_at`
    pub fn update(&mut self, name: String, password_hash: String, email: String, photo: String) {
        self.name = name;
        self.password = password_hash;
        self.email = email;
        self.photo = photo;
        self.update_at = now();
    }

    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    /// Gets the stored password hash
    pub fn get_password_hash(&self) -> String {
        self.password.clone()
    }

    pub fn get_email(&self) -> String {
        self.email.clone()
    }

    pub fn get_photo(&self) -> String {
        self.photo.clone()
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


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_new() {
        let user = User::new(
            "Ada".to_string(),
            "$2b$08$hash".to_string(),
            "ada@example.com".to_string(),
            String::new(),
        );

        assert_eq!(user.get_name(), "Ada");
        assert_eq!(user.get_email(), "ada@example.com");
        assert_eq!(user.get_photo(), "");
        assert_eq!(user.get_password_hash(), "$2b$08$hash");
        assert!(Uuid::parse_str(&user.get_id()).is_ok());
        assert_eq!(user.get_create_at_raw(), user.get_update_at_raw());
    }

    #[test]
    fn test_user_update_touches_timestamp() {
        let mut user = User::new(
            "Ada".to_string(),
            "old".to_string(),
            "ada@example.com".to_string(),
            "a.png".to_string(),
        );
        let id = user.get_id();
        let created = user.get_create_at_raw();

        std::thread::sleep(std::time::Duration::from_millis(5));
        user.update(
            "Grace".to_string(),
            "new".to_string(),
            "grace@example.com".to_string(),
            String::new(),
        );

        assert_eq!(user.get_id(), id);
        assert_eq!(user.get_name(), "Grace");
        assert_eq!(user.get_password_hash(), "new");
        assert_eq!(user.get_email(), "grace@example.com");
        assert_eq!(user.get_photo(), "");
        assert_eq!(user.get_create_at_raw(), created);
        assert!(user.get_update_at_raw() > created);
    }
}
