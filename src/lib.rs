use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::routes::characters::{
    create_character, delete_character, get_character, list_characters, update_character,
};
use crate::routes::episodes::{create_episode, get_episode, list_episodes};
use crate::routes::notifications::{list_notifications, mark_notification_read};
use crate::routes::seasons::{create_season, get_season, list_seasons};
use crate::routes::tokens::issue_token;
use crate::routes::users::{activate_user, get_me, register_user, update_user};

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Registers every API route under the `/api` scope.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(list_characters)
            .service(get_character)
            .service(create_character)
            .service(update_character)
            .service(delete_character)
            .service(list_episodes)
            .service(get_episode)
            .service(create_episode)
            .service(list_seasons)
            .service(get_season)
            .service(create_season)
            .service(list_notifications)
            .service(mark_notification_read)
            .service(register_user)
            .service(activate_user)
            .service(get_me)
            .service(update_user)
            .service(issue_token),
    );
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let bind_address = (server_config.address.clone(), server_config.port);
    let static_mount = format!("/{}", server_config.static_base.trim_matches('/'));

    HttpServer::new(move || {
        let cors = if server_config.allow_origins.is_empty() {
            Cors::permissive()
        } else {
            server_config.allow_origins.iter().fold(
                Cors::default().allow_any_method().allow_any_header(),
                |cors, origin| cors.allowed_origin(origin),
            )
        };

        App::new()
            .wrap(cors)
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new(&static_mount, &server_config.static_dir))
            .configure(configure_api)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
