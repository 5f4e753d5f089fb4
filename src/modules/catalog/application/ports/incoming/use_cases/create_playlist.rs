use async_trait::async_trait;

use crate::modules::catalog::application::ports::outgoing::{CreatePlaylistData, PlaylistResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePlaylistError {
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePlaylistUseCase: Send + Sync {
    async fn execute(&self, data: CreatePlaylistData)
        -> Result<PlaylistResult, CreatePlaylistError>;
}
