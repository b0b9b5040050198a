use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::notification::{
    NewNotification as DomainNewNotification, Notification as DomainNotification,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::notifications)]
/// Diesel model for [`crate::domain::notification::Notification`].
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub body: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::notifications)]
/// Insertable form of [`Notification`].
pub struct NewNotification<'a> {
    pub user_id: i32,
    pub body: &'a str,
}

impl From<Notification> for DomainNotification {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            user_id: notification.user_id,
            body: notification.body,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewNotification> for NewNotification<'a> {
    fn from(notification: &'a DomainNewNotification) -> Self {
        Self {
            user_id: notification.user_id,
            body: &notification.body,
        }
    }
}
