use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::catalog::application::ports::incoming::use_cases::{
    GetPlaylistError, PlaylistDetail,
};
use crate::modules::catalog::application::ports::outgoing::{
    CategoryView, RatingSummary, VideoItemView,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct CategoryDto {
    pub id: Uuid,
    pub title: String,
}

impl From<CategoryView> for CategoryDto {
    fn from(view: CategoryView) -> Self {
        Self {
            id: view.id,
            title: view.title,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct VideoItemDto {
    pub id: Uuid,
    pub title: String,
    pub video_ref: String,
    pub slug: Option<String>,
    pub order: i32,
}

impl From<VideoItemView> for VideoItemDto {
    fn from(view: VideoItemView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            video_ref: view.video_ref,
            slug: view.slug,
            order: view.order,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct RatingSummaryDto {
    pub average: Option<f64>,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl From<RatingSummary> for RatingSummaryDto {
    fn from(summary: RatingSummary) -> Self {
        Self {
            average: summary.average,
            min: summary.min,
            max: summary.max,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct PlaylistDetailDto {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub title: String,
    /// MOV | TVS | SEA | PLY
    #[schema(example = "PLY")]
    pub kind: String,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub category: Option<CategoryDto>,
    pub featured_video_id: Option<Uuid>,
    pub publish_timestamp: Option<DateTime<Utc>>,
    pub videos: Vec<VideoItemDto>,
    pub rating: RatingSummaryDto,
}

impl From<PlaylistDetail> for PlaylistDetailDto {
    fn from(detail: PlaylistDetail) -> Self {
        let playlist = detail.playlist;
        Self {
            id: playlist.id,
            parent_id: playlist.parent_id,
            title: playlist.title,
            kind: playlist.kind.code().to_string(),
            description: playlist.description,
            slug: playlist.slug,
            category: playlist.category.map(CategoryDto::from),
            featured_video_id: playlist.featured_video_id,
            publish_timestamp: playlist.publish_timestamp,
            videos: detail.videos.into_iter().map(VideoItemDto::from).collect(),
            rating: detail.rating.into(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/playlists/{slug}",
    tag = "catalog",
    params(
        ("slug" = String, Path, description = "Playlist slug, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "Playlist detail", body = PlaylistDetailDto),
        (status = 404, description = "No published playlist with that slug"),
        (status = 500, description = "Internal error")
    )
)]
#[get("/api/playlists/{slug}")]
pub async fn get_playlist_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.catalog.get_playlist.execute(&slug).await {
        Ok(detail) => ApiResponse::success(PlaylistDetailDto::from(detail)),

        Err(GetPlaylistError::NotFound) => {
            ApiResponse::not_found("PLAYLIST_NOT_FOUND", "No published playlist with that slug")
        }

        Err(GetPlaylistError::QueryFailed(msg)) => {
            error!("Failed to fetch playlist {}: {}", slug, msg);
            ApiResponse::internal_error()
        }
    }
}
