use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::db::DbPool;
use crate::dto::characters::{CharacterForm, CharactersQuery};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::character::DieselCharacterRepository;
use crate::routes::error_response;
use crate::services::characters as character_service;

#[get("/v1/characters")]
pub async fn list_characters(
    params: web::Query<CharactersQuery>,
    pool: web::Data<DbPool>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let repo = DieselCharacterRepository::new(&pool);

    match character_service::list_characters(&repo, &config, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(&e),
    }
}

#[get("/v1/characters/{character_id}")]
pub async fn get_character(
    character_id: web::Path<i32>,
    pool: web::Data<DbPool>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let repo = DieselCharacterRepository::new(&pool);

    match character_service::get_character(&repo, &config, character_id.into_inner()) {
        Ok(character) => HttpResponse::Ok().json(character),
        Err(e) => error_response(&e),
    }
}

#[post("/v1/characters")]
pub async fn create_character(
    _user: AuthenticatedUser,
    body: web::Json<CharacterForm>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselCharacterRepository::new(&pool);

    match character_service::create_character(&repo, body.into_inner()) {
        Ok(()) => HttpResponse::Created().finish(),
        Err(e) => error_response(&e),
    }
}

#[put("/v1/characters/{character_id}")]
pub async fn update_character(
    _user: AuthenticatedUser,
    character_id: web::Path<i32>,
    body: web::Json<CharacterForm>,
    pool: web::Data<DbPool>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let repo = DieselCharacterRepository::new(&pool);

    match character_service::update_character(
        &repo,
        &config,
        character_id.into_inner(),
        body.into_inner(),
    ) {
        Ok(character) => HttpResponse::Ok().json(character),
        Err(e) => error_response(&e),
    }
}

#[delete("/v1/characters/{character_id}")]
pub async fn delete_character(
    _user: AuthenticatedUser,
    character_id: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselCharacterRepository::new(&pool);

    match character_service::delete_character(&repo, character_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}
