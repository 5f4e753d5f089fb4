use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::list_movies::PlaylistCardDto;
use crate::modules::catalog::application::ports::incoming::use_cases::{GetShowError, ShowDetail};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ShowDetailDto {
    pub id: Uuid,
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub publish_timestamp: Option<DateTime<Utc>>,
    pub seasons: Vec<PlaylistCardDto>,
    /// e.g. "3 Seasons"
    #[schema(example = "3 Seasons")]
    pub seasons_display: String,
}

impl From<ShowDetail> for ShowDetailDto {
    fn from(detail: ShowDetail) -> Self {
        let show = detail.show;
        Self {
            id: show.id,
            title: show.title,
            slug: show.slug,
            description: show.description,
            publish_timestamp: show.publish_timestamp,
            seasons: detail
                .seasons
                .into_iter()
                .map(PlaylistCardDto::from)
                .collect(),
            seasons_display: detail.seasons_display,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/shows/{slug}",
    tag = "catalog",
    params(
        ("slug" = String, Path, description = "Show slug, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "Show detail with its published seasons", body = ShowDetailDto),
        (status = 404, description = "No published show with that slug"),
        (status = 500, description = "Internal error")
    )
)]
#[get("/api/shows/{slug}")]
pub async fn get_show_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.catalog.get_show.execute(&slug).await {
        Ok(detail) => ApiResponse::success(ShowDetailDto::from(detail)),

        Err(GetShowError::NotFound) => {
            ApiResponse::not_found("SHOW_NOT_FOUND", "No published show with that slug")
        }

        Err(GetShowError::QueryFailed(msg)) => {
            error!("Failed to fetch show {}: {}", slug, msg);
            ApiResponse::internal_error()
        }
    }
}
