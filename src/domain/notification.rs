use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub body: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewNotification {
    pub user_id: i32,
    pub body: String,
}

impl NewNotification {
    #[must_use]
    pub fn new(user_id: i32, body: String) -> Self {
        Self {
            user_id,
            body: body.trim().to_string(),
        }
    }
}
