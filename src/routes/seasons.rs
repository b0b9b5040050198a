use actix_web::{HttpResponse, Responder, get, post, web};

use crate::db::DbPool;
use crate::dto::seasons::SeasonsQuery;
use crate::models::auth::AuthenticatedUser;
use crate::repository::season::DieselSeasonRepository;
use crate::routes::error_response;
use crate::services::seasons as season_service;

#[get("/v1/seasons")]
pub async fn list_seasons(
    params: web::Query<SeasonsQuery>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselSeasonRepository::new(&pool);

    match season_service::list_seasons(&repo, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(&e),
    }
}

#[get("/v1/seasons/{season_id}")]
pub async fn get_season(season_id: web::Path<i32>, pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselSeasonRepository::new(&pool);

    match season_service::get_season(&repo, season_id.into_inner()) {
        Ok(season) => HttpResponse::Ok().json(season),
        Err(e) => error_response(&e),
    }
}

#[post("/v1/seasons")]
pub async fn create_season(_user: AuthenticatedUser, pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselSeasonRepository::new(&pool);

    match season_service::create_season(&repo) {
        Ok(season) => HttpResponse::Created().json(season),
        Err(e) => error_response(&e),
    }
}
