use actix_web::{get, web, Responder};
use tracing::error;

use super::list_movies::PlaylistCardDto;
use crate::modules::catalog::application::ports::incoming::use_cases::ListShowsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/shows",
    tag = "catalog",
    responses(
        (status = 200, description = "Published TV shows", body = [PlaylistCardDto]),
        (status = 500, description = "Internal error")
    )
)]
#[get("/api/shows")]
pub async fn list_shows_handler(data: web::Data<AppState>) -> impl Responder {
    match data.catalog.list_shows.execute().await {
        Ok(shows) => ApiResponse::success(
            shows
                .into_iter()
                .map(PlaylistCardDto::from)
                .collect::<Vec<_>>(),
        ),

        Err(ListShowsError::QueryFailed(msg)) => {
            error!("Failed to list shows: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
