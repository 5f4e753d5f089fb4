use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::ContentKind;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    GetPlaylistError, GetPlaylistUseCase, PlaylistDetail,
};
use crate::modules::catalog::application::ports::outgoing::{
    PlaylistQuery, PlaylistQueryError, RatingQuery, RatingQueryError,
};

pub struct GetPlaylistService<Q, R>
where
    Q: PlaylistQuery,
    R: RatingQuery,
{
    query: Q,
    ratings: R,
}

impl<Q, R> GetPlaylistService<Q, R>
where
    Q: PlaylistQuery,
    R: RatingQuery,
{
    pub fn new(query: Q, ratings: R) -> Self {
        Self { query, ratings }
    }
}

#[async_trait]
impl<Q, R> GetPlaylistUseCase for GetPlaylistService<Q, R>
where
    Q: PlaylistQuery + Send + Sync,
    R: RatingQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<PlaylistDetail, GetPlaylistError> {
        // No kind pin: a detail page resolves any playlist row by slug
        let playlist = self
            .query
            .get_published_by_slug(None, slug)
            .await
            .map_err(map_query_err)?;

        let videos = self
            .query
            .playlist_videos(playlist.id)
            .await
            .map_err(map_query_err)?;

        let rating = self
            .ratings
            .summary(ContentKind::Playlist, playlist.id)
            .await
            .map_err(map_rating_err)?;

        Ok(PlaylistDetail {
            playlist,
            videos,
            rating,
        })
    }
}

fn map_query_err(e: PlaylistQueryError) -> GetPlaylistError {
    match e {
        PlaylistQueryError::NotFound => GetPlaylistError::NotFound,
        PlaylistQueryError::DatabaseError(msg) => GetPlaylistError::QueryFailed(msg),
    }
}

fn map_rating_err(e: RatingQueryError) -> GetPlaylistError {
    match e {
        RatingQueryError::DatabaseError(msg) => GetPlaylistError::QueryFailed(msg),
    }
}
