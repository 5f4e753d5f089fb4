use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::ports::outgoing::{PatchPlaylistData, PlaylistResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchPlaylistError {
    #[error("Playlist not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchPlaylistUseCase: Send + Sync {
    async fn execute(
        &self,
        playlist_id: Uuid,
        data: PatchPlaylistData,
    ) -> Result<PlaylistResult, PatchPlaylistError>;
}
