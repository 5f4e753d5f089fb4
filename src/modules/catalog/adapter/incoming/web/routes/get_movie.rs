use actix_web::{get, web, Responder};
use tracing::error;

use super::get_playlist::PlaylistDetailDto;
use crate::modules::catalog::application::ports::incoming::use_cases::GetMovieError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/movies/{slug}",
    tag = "catalog",
    params(
        ("slug" = String, Path, description = "Movie slug, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "Movie detail", body = PlaylistDetailDto),
        (status = 404, description = "No published movie with that slug"),
        (status = 500, description = "Internal error")
    )
)]
#[get("/api/movies/{slug}")]
pub async fn get_movie_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.catalog.get_movie.execute(&slug).await {
        Ok(detail) => ApiResponse::success(PlaylistDetailDto::from(detail)),

        Err(GetMovieError::NotFound) => {
            ApiResponse::not_found("MOVIE_NOT_FOUND", "No published movie with that slug")
        }

        Err(GetMovieError::QueryFailed(msg)) => {
            error!("Failed to fetch movie {}: {}", slug, msg);
            ApiResponse::internal_error()
        }
    }
}
