use actix_web::{HttpResponse, Responder, get, post, put, web};

use crate::db::DbPool;
use crate::dto::users::{ActivateQuery, RegisterUserForm, UpdateUserForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::notification::DieselNotificationRepository;
use crate::repository::user::DieselUserRepository;
use crate::routes::error_response;
use crate::services::users as user_service;

#[post("/v1/users")]
pub async fn register_user(
    body: web::Json<RegisterUserForm>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselUserRepository::new(&pool);

    match user_service::register_user(&repo, body.into_inner()) {
        Ok(user) => HttpResponse::Created().json(user),
        Err(e) => error_response(&e),
    }
}

#[get("/v1/users/activate")]
pub async fn activate_user(
    params: web::Query<ActivateQuery>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselUserRepository::new(&pool);
    let notification_repo = DieselNotificationRepository::new(&pool);

    match user_service::activate_user(&repo, &notification_repo, &params.sig) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => error_response(&e),
    }
}

#[get("/v1/users/me")]
pub async fn get_me(user: AuthenticatedUser, pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselUserRepository::new(&pool);

    match user_service::get_me(&repo, &user) {
        Ok(account) => HttpResponse::Ok().json(account),
        Err(e) => error_response(&e),
    }
}

#[put("/v1/users")]
pub async fn update_user(
    user: AuthenticatedUser,
    body: web::Json<UpdateUserForm>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselUserRepository::new(&pool);

    match user_service::update_user(&repo, &user, body.into_inner()) {
        Ok(account) => HttpResponse::Ok().json(account),
        Err(e) => error_response(&e),
    }
}
