use async_trait::async_trait;

use crate::modules::catalog::application::ports::incoming::use_cases::{
    ListFeaturedPlaylistsError, ListFeaturedPlaylistsUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    PlaylistCardView, PlaylistQuery, PlaylistQueryError,
};

pub struct ListFeaturedPlaylistsService<Q>
where
    Q: PlaylistQuery,
{
    query: Q,
}

impl<Q> ListFeaturedPlaylistsService<Q>
where
    Q: PlaylistQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListFeaturedPlaylistsUseCase for ListFeaturedPlaylistsService<Q>
where
    Q: PlaylistQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PlaylistCardView>, ListFeaturedPlaylistsError> {
        self.query.list_featured().await.map_err(|e| match e {
            PlaylistQueryError::NotFound => ListFeaturedPlaylistsError::QueryFailed(e.to_string()),
            PlaylistQueryError::DatabaseError(msg) => ListFeaturedPlaylistsError::QueryFailed(msg),
        })
    }
}
