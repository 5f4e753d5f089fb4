use actix_web::{patch, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use super::create_playlist::PlaylistAdminDto;
use crate::modules::catalog::application::domain::entities::{PlaylistKind, PublishState};
use crate::modules::catalog::application::ports::incoming::use_cases::PatchPlaylistError;
use crate::modules::catalog::application::ports::outgoing::{PatchField, PatchPlaylistData};
use crate::shared::api::ApiResponse;
use crate::AppState;

// Wire shape mirrors PatchPlaylistData; kind/state travel as codes and the
// publish stamp stays schedule-only (no null to clear it).
#[derive(Deserialize)]
pub struct PatchPlaylistRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub kind: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub slug: PatchField<String>,
    #[serde(default)]
    pub parent_id: PatchField<Uuid>,
    #[serde(default)]
    pub category_id: PatchField<Uuid>,
    #[serde(default)]
    pub order: PatchField<i32>,
    #[serde(default)]
    pub featured_video_id: PatchField<Uuid>,
    #[serde(default)]
    pub active: PatchField<bool>,
    #[serde(default)]
    pub state: PatchField<String>,
    pub publish_timestamp: Option<DateTime<Utc>>,
}

enum PatchValidationError {
    NullField(&'static str),
    BadKind,
    BadState,
}

fn to_patch_data(body: PatchPlaylistRequest) -> Result<PatchPlaylistData, PatchValidationError> {
    let kind = match body.kind {
        PatchField::Unset => PatchField::Unset,
        PatchField::Null => return Err(PatchValidationError::NullField("kind")),
        PatchField::Value(code) => PatchField::Value(
            PlaylistKind::from_code(&code).ok_or(PatchValidationError::BadKind)?,
        ),
    };

    let state = match body.state {
        PatchField::Unset => PatchField::Unset,
        PatchField::Null => return Err(PatchValidationError::NullField("state")),
        PatchField::Value(code) => PatchField::Value(
            PublishState::from_code(&code).ok_or(PatchValidationError::BadState)?,
        ),
    };

    if body.title.is_null() {
        return Err(PatchValidationError::NullField("title"));
    }
    if body.order.is_null() {
        return Err(PatchValidationError::NullField("order"));
    }
    if body.active.is_null() {
        return Err(PatchValidationError::NullField("active"));
    }

    Ok(PatchPlaylistData {
        title: body.title,
        kind,
        description: body.description,
        slug: body.slug,
        parent_id: body.parent_id,
        category_id: body.category_id,
        order: body.order,
        featured_video_id: body.featured_video_id,
        active: body.active,
        state,
        publish_timestamp: body.publish_timestamp,
    })
}

#[patch("/api/playlists/{id}")]
pub async fn patch_playlist_handler(
    path: web::Path<Uuid>,
    body: web::Json<PatchPlaylistRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let playlist_id = path.into_inner();

    let patch_data = match to_patch_data(body.into_inner()) {
        Ok(data) => data,
        Err(PatchValidationError::NullField(field)) => {
            return ApiResponse::bad_request(
                "VALIDATION_ERROR",
                &format!("{field} cannot be null"),
            )
        }
        Err(PatchValidationError::BadKind) => {
            return ApiResponse::bad_request(
                "INVALID_KIND",
                "kind must be one of MOV, TVS, SEA, PLY",
            )
        }
        Err(PatchValidationError::BadState) => {
            return ApiResponse::bad_request("INVALID_STATE", "state must be DR or PU")
        }
    };

    match data.catalog.patch.execute(playlist_id, patch_data).await {
        Ok(result) => ApiResponse::success(PlaylistAdminDto::from(result)),

        Err(PatchPlaylistError::NotFound) => {
            ApiResponse::not_found("PLAYLIST_NOT_FOUND", "No playlist with that id")
        }

        Err(PatchPlaylistError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "A playlist with that slug exists")
        }

        Err(PatchPlaylistError::RepositoryError(msg)) => {
            error!("Failed to patch playlist {}: {}", playlist_id, msg);
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

    use crate::modules::catalog::application::ports::incoming::use_cases::PatchPlaylistUseCase;
    use crate::modules::catalog::application::ports::outgoing::PlaylistResult;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::catalog_fixtures::sample_result;

    struct StubPatchPlaylist {
        result: Result<PlaylistResult, PatchPlaylistError>,
    }

    #[async_trait]
    impl PatchPlaylistUseCase for StubPatchPlaylist {
        async fn execute(
            &self,
            _playlist_id: Uuid,
            _data: PatchPlaylistData,
        ) -> Result<PlaylistResult, PatchPlaylistError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn patches_playlist() {
        let mut result = sample_result("Staff Picks");
        result.state = PublishState::Publish;
        result.publish_timestamp = Some(Utc::now());

        let state = TestAppStateBuilder::default()
            .with_patch_playlist(Arc::new(StubPatchPlaylist { result: Ok(result) }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(patch_playlist_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/playlists/{}", Uuid::new_v4()))
            .set_json(serde_json::json!({ "state": "PU" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["state"], "PU");
        assert!(body["data"]["publish_timestamp"].is_string());
    }

    #[tokio::test]
    async fn null_title_is_rejected() {
        let state = TestAppStateBuilder::default()
            .with_patch_playlist(Arc::new(StubPatchPlaylist {
                result: Ok(sample_result("Staff Picks")),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(patch_playlist_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/playlists/{}", Uuid::new_v4()))
            .set_json(serde_json::json!({ "title": null }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_playlist_is_404() {
        let state = TestAppStateBuilder::default()
            .with_patch_playlist(Arc::new(StubPatchPlaylist {
                result: Err(PatchPlaylistError::NotFound),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(patch_playlist_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/playlists/{}", Uuid::new_v4()))
            .set_json(serde_json::json!({ "order": 2 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
