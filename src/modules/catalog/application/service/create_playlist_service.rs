use async_trait::async_trait;

use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreatePlaylistError, CreatePlaylistUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    CreatePlaylistData, PlaylistRepository, PlaylistRepositoryError, PlaylistResult,
};

pub struct CreatePlaylistService<R>
where
    R: PlaylistRepository,
{
    repository: R,
}

impl<R> CreatePlaylistService<R>
where
    R: PlaylistRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatePlaylistUseCase for CreatePlaylistService<R>
where
    R: PlaylistRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: CreatePlaylistData,
    ) -> Result<PlaylistResult, CreatePlaylistError> {
        self.repository
            .create_playlist(data)
            .await
            .map_err(|e| match e {
                PlaylistRepositoryError::SlugAlreadyExists => {
                    CreatePlaylistError::SlugAlreadyExists
                }
                PlaylistRepositoryError::NotFound => {
                    CreatePlaylistError::RepositoryError(e.to_string())
                }
                PlaylistRepositoryError::DatabaseError(msg) => {
                    CreatePlaylistError::RepositoryError(msg)
                }
            })
    }
}
