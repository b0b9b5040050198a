use actix_web::{HttpResponse, Responder, get, post, web};

use crate::db::DbPool;
use crate::dto::episodes::{EpisodeForm, EpisodesQuery};
use crate::models::auth::AuthenticatedUser;
use crate::repository::episode::DieselEpisodeRepository;
use crate::routes::error_response;
use crate::services::episodes as episode_service;

#[get("/v1/episodes")]
pub async fn list_episodes(
    params: web::Query<EpisodesQuery>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselEpisodeRepository::new(&pool);

    match episode_service::list_episodes(&repo, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(&e),
    }
}

#[get("/v1/episodes/{episode_id}")]
pub async fn get_episode(
    episode_id: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselEpisodeRepository::new(&pool);

    match episode_service::get_episode(&repo, episode_id.into_inner()) {
        Ok(episode) => HttpResponse::Ok().json(episode),
        Err(e) => error_response(&e),
    }
}

#[post("/v1/episodes")]
pub async fn create_episode(
    _user: AuthenticatedUser,
    body: web::Json<EpisodeForm>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselEpisodeRepository::new(&pool);

    match episode_service::create_episode(&repo, body.into_inner()) {
        Ok(()) => HttpResponse::Created().finish(),
        Err(e) => error_response(&e),
    }
}
