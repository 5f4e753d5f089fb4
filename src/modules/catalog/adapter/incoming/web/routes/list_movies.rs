use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::catalog::application::ports::incoming::use_cases::ListMoviesError;
use crate::modules::catalog::application::ports::outgoing::PlaylistCardView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct PlaylistCardDto {
    pub id: Uuid,
    pub title: String,
    /// MOV | TVS | SEA | PLY
    #[schema(example = "MOV")]
    pub kind: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub publish_timestamp: Option<DateTime<Utc>>,
}

impl From<PlaylistCardView> for PlaylistCardDto {
    fn from(view: PlaylistCardView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            kind: view.kind.code().to_string(),
            slug: view.slug,
            description: view.description,
            publish_timestamp: view.publish_timestamp,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "catalog",
    responses(
        (status = 200, description = "Published movies", body = [PlaylistCardDto]),
        (status = 500, description = "Internal error")
    )
)]
#[get("/api/movies")]
pub async fn list_movies_handler(data: web::Data<AppState>) -> impl Responder {
    match data.catalog.list_movies.execute().await {
        Ok(movies) => ApiResponse::success(
            movies
                .into_iter()
                .map(PlaylistCardDto::from)
                .collect::<Vec<_>>(),
        ),

        Err(ListMoviesError::QueryFailed(msg)) => {
            error!("Failed to list movies: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
