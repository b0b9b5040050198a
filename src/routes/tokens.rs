use actix_web::{HttpResponse, Responder, post, web};

use crate::db::DbPool;
use crate::dto::tokens::TokenRequest;
use crate::models::config::ServerConfig;
use crate::repository::user::DieselUserRepository;
use crate::routes::error_response;
use crate::services::auth as auth_service;

#[post("/v1/token")]
pub async fn issue_token(
    body: web::Json<TokenRequest>,
    pool: web::Data<DbPool>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let repo = DieselUserRepository::new(&pool);

    match auth_service::issue_token(&repo, &config, body.into_inner()) {
        Ok(token) => HttpResponse::Ok().json(token),
        Err(e) => error_response(&e),
    }
}
