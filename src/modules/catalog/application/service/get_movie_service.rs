use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::{ContentKind, PlaylistKind};
use crate::modules::catalog::application::ports::incoming::use_cases::{
    GetMovieError, GetMovieUseCase, PlaylistDetail,
};
use crate::modules::catalog::application::ports::outgoing::{
    PlaylistQuery, PlaylistQueryError, RatingQuery, RatingQueryError,
};

pub struct GetMovieService<Q, R>
where
    Q: PlaylistQuery,
    R: RatingQuery,
{
    query: Q,
    ratings: R,
}

impl<Q, R> GetMovieService<Q, R>
where
    Q: PlaylistQuery,
    R: RatingQuery,
{
    pub fn new(query: Q, ratings: R) -> Self {
        Self { query, ratings }
    }
}

#[async_trait]
impl<Q, R> GetMovieUseCase for GetMovieService<Q, R>
where
    Q: PlaylistQuery + Send + Sync,
    R: RatingQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<PlaylistDetail, GetMovieError> {
        let movie = self
            .query
            .get_published_by_slug(Some(PlaylistKind::Movie), slug)
            .await
            .map_err(map_query_err)?;

        let videos = self
            .query
            .playlist_videos(movie.id)
            .await
            .map_err(map_query_err)?;

        let rating = self
            .ratings
            .summary(ContentKind::Playlist, movie.id)
            .await
            .map_err(map_rating_err)?;

        Ok(PlaylistDetail {
            playlist: movie,
            videos,
            rating,
        })
    }
}

fn map_query_err(e: PlaylistQueryError) -> GetMovieError {
    match e {
        PlaylistQueryError::NotFound => GetMovieError::NotFound,
        PlaylistQueryError::DatabaseError(msg) => GetMovieError::QueryFailed(msg),
    }
}

fn map_rating_err(e: RatingQueryError) -> GetMovieError {
    match e {
        RatingQueryError::DatabaseError(msg) => GetMovieError::QueryFailed(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::application::service::test_support::{
        video_item, view, MockPlaylistQuery, MockRatingQuery,
    };

    #[tokio::test]
    async fn execute_pins_the_movie_kind() {
        let movie = view("Heat", PlaylistKind::Movie);
        // The mock asserts the service asked for kind = Movie
        let query = MockPlaylistQuery::default()
            .with_by_slug(Some(PlaylistKind::Movie), Ok(movie.clone()))
            .with_videos(Ok(vec![video_item("Heat", 1)]));

        let service = GetMovieService::new(query, MockRatingQuery::default());

        let detail = service.execute("heat").await.unwrap();

        assert_eq!(detail.playlist.kind, PlaylistKind::Movie);
        assert_eq!(detail.videos.len(), 1);
    }

    #[tokio::test]
    async fn execute_maps_not_found() {
        let query = MockPlaylistQuery::default()
            .with_by_slug(Some(PlaylistKind::Movie), Err(PlaylistQueryError::NotFound));
        let service = GetMovieService::new(query, MockRatingQuery::default());

        let result = service.execute("missing").await;

        assert!(matches!(result.unwrap_err(), GetMovieError::NotFound));
    }
}
