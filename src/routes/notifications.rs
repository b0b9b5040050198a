use actix_web::{HttpResponse, Responder, get, post, web};

use crate::db::DbPool;
use crate::dto::notifications::NotificationsQuery;
use crate::models::auth::AuthenticatedUser;
use crate::repository::notification::DieselNotificationRepository;
use crate::routes::error_response;
use crate::services::notifications as notification_service;

#[get("/v1/notifications")]
pub async fn list_notifications(
    user: AuthenticatedUser,
    params: web::Query<NotificationsQuery>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselNotificationRepository::new(&pool);

    match notification_service::list_notifications(&repo, &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(&e),
    }
}

#[post("/v1/notifications/{notification_id}/read")]
pub async fn mark_notification_read(
    user: AuthenticatedUser,
    notification_id: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselNotificationRepository::new(&pool);

    match notification_service::mark_notification_read(&repo, &user, notification_id.into_inner())
    {
        Ok(notification) => HttpResponse::Ok().json(notification),
        Err(e) => error_response(&e),
    }
}
