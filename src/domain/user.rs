use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string, never serialized out of the domain layer.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    /// Opaque activation signature handed out at registration.
    #[serde(skip_serializing)]
    pub sig: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub sig: String,
}

impl NewUser {
    #[must_use]
    pub fn new(username: String, email: String, password_hash: String, sig: String) -> Self {
        Self {
            username: username.trim().to_string(),
            email: email.trim().to_lowercase(),
            password_hash,
            sig,
        }
    }
}

#[derive(Clone, Debug)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

impl UpdateUser {
    #[must_use]
    pub fn new(email: Option<String>, password_hash: Option<String>) -> Self {
        Self {
            email: email
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty()),
            password_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_normalizes_email() {
        let user = NewUser::new(
            " rick ".to_string(),
            " Rick@Example.COM ".to_string(),
            "hash".to_string(),
            "sig".to_string(),
        );
        assert_eq!(user.username, "rick");
        assert_eq!(user.email, "rick@example.com");
    }
}
