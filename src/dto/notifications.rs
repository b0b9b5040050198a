//! DTOs exposed by the notification endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::notification::Notification;

/// Query parameters accepted by `GET /v1/notifications`.
#[derive(Debug, Default, Deserialize)]
pub struct NotificationsQuery {
    pub unread_only: Option<bool>,
    pub page: Option<usize>,
    pub size: Option<usize>,
}

/// Public representation of a notification.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NotificationResponse {
    pub id: i32,
    pub body: String,
    #[serde(rename = "isRead")]
    pub is_read: bool,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            body: notification.body,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}
