use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{PlaylistKind, PublishState};
use crate::modules::catalog::application::ports::incoming::use_cases::CreatePlaylistError;
use crate::modules::catalog::application::ports::outgoing::{CreatePlaylistData, PlaylistResult};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CreatePlaylistRequest {
    pub title: String,
    /// MOV | TVS | SEA | PLY, defaults to PLY
    #[schema(example = "PLY")]
    pub kind: Option<String>,
    pub description: Option<String>,
    /// Derived from the title when omitted or blank
    pub slug: Option<String>,
    pub parent_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub order: Option<i32>,
    pub featured_video_id: Option<Uuid>,
    /// DR | PU, defaults to DR
    #[schema(example = "DR")]
    pub state: Option<String>,
    /// Schedules publication when set together with state = PU
    pub publish_timestamp: Option<DateTime<Utc>>,
    pub active: Option<bool>,
}

#[derive(Serialize, ToSchema)]
pub struct PlaylistAdminDto {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub order: i32,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub kind: String,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub featured_video_id: Option<Uuid>,
    pub active: bool,
    pub state: String,
    pub publish_timestamp: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PlaylistResult> for PlaylistAdminDto {
    fn from(result: PlaylistResult) -> Self {
        Self {
            id: result.id,
            parent_id: result.parent_id,
            order: result.order,
            category_id: result.category_id,
            title: result.title,
            kind: result.kind.code().to_string(),
            description: result.description,
            slug: result.slug,
            featured_video_id: result.featured_video_id,
            active: result.active,
            state: result.state.code().to_string(),
            publish_timestamp: result.publish_timestamp,
            created_at: result.created_at,
            updated_at: result.updated_at,
        }
    }
}

#[post("/api/playlists")]
pub async fn create_playlist_handler(
    body: web::Json<CreatePlaylistRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();

    let kind = match body.kind.as_deref() {
        None => PlaylistKind::default(),
        Some(code) => match PlaylistKind::from_code(code) {
            Some(kind) => kind,
            None => {
                return ApiResponse::bad_request(
                    "INVALID_KIND",
                    "kind must be one of MOV, TVS, SEA, PLY",
                )
            }
        },
    };

    let state = match body.state.as_deref() {
        None => PublishState::default(),
        Some(code) => match PublishState::from_code(code) {
            Some(state) => state,
            None => {
                return ApiResponse::bad_request("INVALID_STATE", "state must be DR or PU")
            }
        },
    };

    let create_data = CreatePlaylistData {
        kind,
        title: body.title,
        slug: body.slug,
        description: body.description,
        parent_id: body.parent_id,
        category_id: body.category_id,
        order: body.order,
        featured_video_id: body.featured_video_id,
        active: body.active.unwrap_or(true),
        state,
        publish_timestamp: body.publish_timestamp,
    };

    match data.catalog.create.execute(create_data).await {
        Ok(result) => ApiResponse::created(PlaylistAdminDto::from(result)),

        Err(CreatePlaylistError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "A playlist with that slug exists")
        }

        Err(CreatePlaylistError::RepositoryError(msg)) => {
            error!("Failed to create playlist: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::modules::catalog::application::ports::incoming::use_cases::CreatePlaylistUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::catalog_fixtures::sample_result;

    struct StubCreatePlaylist {
        result: Result<PlaylistResult, CreatePlaylistError>,
    }

    #[async_trait]
    impl CreatePlaylistUseCase for StubCreatePlaylist {
        async fn execute(
            &self,
            _data: CreatePlaylistData,
        ) -> Result<PlaylistResult, CreatePlaylistError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn creates_playlist() {
        let state = TestAppStateBuilder::default()
            .with_create_playlist(Arc::new(StubCreatePlaylist {
                result: Ok(sample_result("Staff Picks")),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_playlist_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/playlists")
            .set_json(serde_json::json!({ "title": "Staff Picks" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["slug"], "staff-picks");
        assert_eq!(body["data"]["state"], "DR");
    }

    #[tokio::test]
    async fn invalid_kind_is_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_create_playlist(Arc::new(StubCreatePlaylist {
                result: Ok(sample_result("Staff Picks")),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_playlist_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/playlists")
            .set_json(serde_json::json!({ "title": "Staff Picks", "kind": "BOGUS" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_KIND");
    }

    #[tokio::test]
    async fn slug_conflict_is_409() {
        let state = TestAppStateBuilder::default()
            .with_create_playlist(Arc::new(StubCreatePlaylist {
                result: Err(CreatePlaylistError::SlugAlreadyExists),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_playlist_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/playlists")
            .set_json(serde_json::json!({ "title": "Staff Picks" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
