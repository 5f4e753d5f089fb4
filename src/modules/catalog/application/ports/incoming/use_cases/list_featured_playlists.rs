use async_trait::async_trait;

use crate::modules::catalog::application::ports::outgoing::PlaylistCardView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListFeaturedPlaylistsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Curated top-level playlists only: rows whose kind is the generic
/// grouping, never movies/shows/seasons.
#[async_trait]
pub trait ListFeaturedPlaylistsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PlaylistCardView>, ListFeaturedPlaylistsError>;
}
