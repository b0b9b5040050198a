use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::DbPool;
use crate::domain::notification::{NewNotification, Notification};
use crate::repository::errors::RepositoryResult;
use crate::repository::{NotificationListQuery, NotificationReader, NotificationWriter};
use crate::schema::notifications;

/// Diesel implementation of [`NotificationReader`] and [`NotificationWriter`].
pub struct DieselNotificationRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselNotificationRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Shared predicate for the count and the page slice.
    fn filtered(query: &NotificationListQuery) -> notifications::BoxedQuery<'static, Sqlite> {
        let mut stmt = notifications::table
            .filter(notifications::user_id.eq(query.user_id))
            .into_boxed();

        if query.unread_only {
            stmt = stmt.filter(notifications::is_read.eq(false));
        }

        stmt
    }
}

impl NotificationReader for DieselNotificationRepository<'_> {
    fn list(&self, query: NotificationListQuery) -> RepositoryResult<(usize, Vec<Notification>)> {
        use crate::models::notification::Notification as DbNotification;

        let mut conn = self.pool.get()?;

        let total: i64 = Self::filtered(&query).count().get_result(&mut conn)?;

        // Newest first; id keeps the order total even for same-instant rows.
        let mut stmt = Self::filtered(&query).order(notifications::id.desc());
        if let Some(pagination) = &query.pagination {
            stmt = stmt
                .limit(pagination.per_page as i64)
                .offset(pagination.offset() as i64);
        }

        let items = stmt
            .load::<DbNotification>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Notification>>();

        Ok((total as usize, items))
    }
}

impl NotificationWriter for DieselNotificationRepository<'_> {
    fn create(&self, new_notification: &NewNotification) -> RepositoryResult<Notification> {
        use crate::models::notification::{
            NewNotification as DbNewNotification, Notification as DbNotification,
        };

        let mut conn = self.pool.get()?;
        let insertable: DbNewNotification = new_notification.into();
        let created = diesel::insert_into(notifications::table)
            .values(&insertable)
            .get_result::<DbNotification>(&mut conn)?;

        Ok(created.into())
    }

    fn mark_read(
        &self,
        notification_id: i32,
        user_id: i32,
    ) -> RepositoryResult<Option<Notification>> {
        use crate::models::notification::Notification as DbNotification;

        let mut conn = self.pool.get()?;
        let updated = diesel::update(
            notifications::table
                .find(notification_id)
                .filter(notifications::user_id.eq(user_id)),
        )
        .set(notifications::is_read.eq(true))
        .get_result::<DbNotification>(&mut conn)
        .optional()?;

        Ok(updated.map(Into::into))
    }
}
