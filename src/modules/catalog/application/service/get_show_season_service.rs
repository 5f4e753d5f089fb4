use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::ContentKind;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    GetShowSeasonError, GetShowSeasonUseCase, PlaylistDetail,
};
use crate::modules::catalog::application::ports::outgoing::{
    PlaylistQuery, PlaylistQueryError, RatingQuery, RatingQueryError,
};

pub struct GetShowSeasonService<Q, R>
where
    Q: PlaylistQuery,
    R: RatingQuery,
{
    query: Q,
    ratings: R,
}

impl<Q, R> GetShowSeasonService<Q, R>
where
    Q: PlaylistQuery,
    R: RatingQuery,
{
    pub fn new(query: Q, ratings: R) -> Self {
        Self { query, ratings }
    }
}

#[async_trait]
impl<Q, R> GetShowSeasonUseCase for GetShowSeasonService<Q, R>
where
    Q: PlaylistQuery + Send + Sync,
    R: RatingQuery + Send + Sync,
{
    async fn execute(
        &self,
        show_slug: &str,
        season_slug: &str,
    ) -> Result<PlaylistDetail, GetShowSeasonError> {
        let season = self
            .query
            .get_season(show_slug, season_slug)
            .await
            .map_err(map_query_err)?;

        let videos = self
            .query
            .playlist_videos(season.id)
            .await
            .map_err(map_query_err)?;

        let rating = self
            .ratings
            .summary(ContentKind::Playlist, season.id)
            .await
            .map_err(map_rating_err)?;

        Ok(PlaylistDetail {
            playlist: season,
            videos,
            rating,
        })
    }
}

fn map_query_err(e: PlaylistQueryError) -> GetShowSeasonError {
    match e {
        PlaylistQueryError::NotFound => GetShowSeasonError::NotFound,
        PlaylistQueryError::DatabaseError(msg) => GetShowSeasonError::QueryFailed(msg),
    }
}

fn map_rating_err(e: RatingQueryError) -> GetShowSeasonError {
    match e {
        RatingQueryError::DatabaseError(msg) => GetShowSeasonError::QueryFailed(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::application::domain::entities::PlaylistKind;
    use crate::modules::catalog::application::service::test_support::{
        video_item, view, MockPlaylistQuery, MockRatingQuery,
    };

    #[tokio::test]
    async fn execute_returns_season_detail() {
        let mut season = view("Season 1", PlaylistKind::Season);
        season.parent_id = Some(uuid::Uuid::new_v4());

        let query = MockPlaylistQuery::default()
            .with_season(Ok(season.clone()))
            .with_videos(Ok(vec![video_item("Pilot", 1)]));

        let service = GetShowSeasonService::new(query, MockRatingQuery::default());

        let detail = service.execute("breaking-bad", "season-1").await.unwrap();

        assert_eq!(detail.playlist.id, season.id);
        assert_eq!(detail.playlist.kind, PlaylistKind::Season);
        assert_eq!(detail.videos.len(), 1);
    }

    #[tokio::test]
    async fn execute_maps_missing_or_ambiguous_pair_to_not_found() {
        // The query port collapses 0 and >1 matches into NotFound already
        let query = MockPlaylistQuery::default().with_season(Err(PlaylistQueryError::NotFound));
        let service = GetShowSeasonService::new(query, MockRatingQuery::default());

        let result = service.execute("breaking-bad", "season-9").await;

        assert!(matches!(result.unwrap_err(), GetShowSeasonError::NotFound));
    }
}
