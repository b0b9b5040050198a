use crate::dto::notifications::{NotificationResponse, NotificationsQuery};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{DEFAULT_PAGE_SIZE, Page};
use crate::repository::{
    NotificationListQuery, NotificationReader, NotificationWriter, Pagination,
};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of the authenticated user's notifications.
pub fn list_notifications<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: NotificationsQuery,
) -> ServiceResult<Page<NotificationResponse>>
where
    R: NotificationReader + ?Sized,
{
    let pagination = Pagination::new(
        params.page.unwrap_or(1),
        params.size.unwrap_or(DEFAULT_PAGE_SIZE),
    )?;

    let mut query = NotificationListQuery::new(user.user_id).paginate(pagination);
    if params.unread_only.unwrap_or(false) {
        query = query.unread_only();
    }

    let (total, notifications) = repo.list(query)?;

    Ok(Page::new(notifications, total, pagination.page, pagination.per_page).map(Into::into))
}

/// Marks one of the authenticated user's notifications as read. Another
/// user's notification id behaves like a missing one.
pub fn mark_notification_read<R>(
    repo: &R,
    user: &AuthenticatedUser,
    notification_id: i32,
) -> ServiceResult<NotificationResponse>
where
    R: NotificationWriter + ?Sized,
{
    match repo.mark_read(notification_id, user.user_id)? {
        Some(notification) => Ok(notification.into()),
        None => Err(ServiceError::NotFound),
    }
}
