use actix_web::{get, web, Responder};
use tracing::error;

use super::list_movies::PlaylistCardDto;
use crate::modules::catalog::application::ports::incoming::use_cases::ListFeaturedPlaylistsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/playlists/featured",
    tag = "catalog",
    responses(
        (status = 200, description = "Curated top-level playlists", body = [PlaylistCardDto]),
        (status = 500, description = "Internal error")
    )
)]
#[get("/api/playlists/featured")]
pub async fn list_featured_playlists_handler(data: web::Data<AppState>) -> impl Responder {
    match data.catalog.list_featured.execute().await {
        Ok(playlists) => ApiResponse::success(
            playlists
                .into_iter()
                .map(PlaylistCardDto::from)
                .collect::<Vec<_>>(),
        ),

        Err(ListFeaturedPlaylistsError::QueryFailed(msg)) => {
            error!("Failed to list featured playlists: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
