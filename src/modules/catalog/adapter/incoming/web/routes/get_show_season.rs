use actix_web::{get, web, Responder};
use tracing::error;

use super::get_playlist::PlaylistDetailDto;
use crate::modules::catalog::application::ports::incoming::use_cases::GetShowSeasonError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/shows/{showSlug}/seasons/{seasonSlug}",
    tag = "catalog",
    params(
        ("showSlug" = String, Path, description = "Parent show slug, matched case-insensitively"),
        ("seasonSlug" = String, Path, description = "Season slug, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "Season detail", body = PlaylistDetailDto),
        (status = 404, description = "No single published season matches the pair"),
        (status = 500, description = "Internal error")
    )
)]
#[get("/api/shows/{showSlug}/seasons/{seasonSlug}")]
pub async fn get_show_season_handler(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (show_slug, season_slug) = path.into_inner();

    match data
        .catalog
        .get_show_season
        .execute(&show_slug, &season_slug)
        .await
    {
        Ok(detail) => ApiResponse::success(PlaylistDetailDto::from(detail)),

        Err(GetShowSeasonError::NotFound) => ApiResponse::not_found(
            "SEASON_NOT_FOUND",
            "No single published season matches that show/season pair",
        ),

        Err(GetShowSeasonError::QueryFailed(msg)) => {
            error!(
                "Failed to fetch season {}/{}: {}",
                show_slug, season_slug, msg
            );
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

    use crate::modules::catalog::application::ports::incoming::use_cases::{
        GetShowSeasonUseCase, PlaylistDetail,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::catalog_fixtures::sample_season_detail;

    struct StubGetShowSeason {
        result: Result<PlaylistDetail, GetShowSeasonError>,
    }

    #[async_trait]
    impl GetShowSeasonUseCase for StubGetShowSeason {
        async fn execute(
            &self,
            _show_slug: &str,
            _season_slug: &str,
        ) -> Result<PlaylistDetail, GetShowSeasonError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn returns_season_detail() {
        let detail = sample_season_detail("Season 1");

        let state = TestAppStateBuilder::default()
            .with_get_show_season(Arc::new(StubGetShowSeason {
                result: Ok(detail),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_show_season_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/shows/breaking-bad/seasons/season-1")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["kind"], "SEA");
        assert_eq!(body["data"]["slug"], "season-1");
    }

    #[tokio::test]
    async fn unmatched_pair_is_404() {
        let state = TestAppStateBuilder::default()
            .with_get_show_season(Arc::new(StubGetShowSeason {
                result: Err(GetShowSeasonError::NotFound),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_show_season_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/shows/breaking-bad/seasons/season-9")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SEASON_NOT_FOUND");
    }
}
