pub mod modules;
pub use modules::catalog;
pub mod health;

pub mod api;
pub mod shared;

use crate::catalog::adapter::outgoing::{
    PlaylistQueryPostgres, PlaylistRepositoryPostgres, RatingQueryPostgres,
};
use crate::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::catalog::application::service::{
    CreatePlaylistService, GetMovieService, GetPlaylistService, GetShowSeasonService,
    GetShowService, ListFeaturedPlaylistsService, ListMoviesService, ListShowsService,
    PatchPlaylistService,
};
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let playlist_query = PlaylistQueryPostgres::new(Arc::clone(&db_arc));
    let rating_query = RatingQueryPostgres::new(Arc::clone(&db_arc));
    let playlist_repo = PlaylistRepositoryPostgres::new(Arc::clone(&db_arc));

    // Use cases
    let catalog = CatalogUseCases {
        list_movies: Arc::new(ListMoviesService::new(playlist_query.clone())),
        get_movie: Arc::new(GetMovieService::new(
            playlist_query.clone(),
            rating_query.clone(),
        )),
        list_shows: Arc::new(ListShowsService::new(playlist_query.clone())),
        get_show: Arc::new(GetShowService::new(playlist_query.clone())),
        get_show_season: Arc::new(GetShowSeasonService::new(
            playlist_query.clone(),
            rating_query.clone(),
        )),
        list_featured: Arc::new(ListFeaturedPlaylistsService::new(playlist_query.clone())),
        get_playlist: Arc::new(GetPlaylistService::new(playlist_query, rating_query)),
        create: Arc::new(CreatePlaylistService::new(playlist_repo.clone())),
        patch: Arc::new(PatchPlaylistService::new(playlist_repo)),
    };

    let state = AppState { catalog };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Catalog reads; /api/playlists/featured must land before
    // /api/playlists/{slug}
    cfg.service(crate::catalog::adapter::incoming::web::routes::list_movies_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_movie_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::list_shows_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_show_season_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_show_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::list_featured_playlists_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_playlist_handler);
    // Catalog writes
    cfg.service(crate::catalog::adapter::incoming::web::routes::create_playlist_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::patch_playlist_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() -> std::io::Result<()> {
    start()
}
