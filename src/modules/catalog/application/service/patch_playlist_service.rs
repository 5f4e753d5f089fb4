use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::ports::incoming::use_cases::{
    PatchPlaylistError, PatchPlaylistUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    PatchPlaylistData, PlaylistRepository, PlaylistRepositoryError, PlaylistResult,
};

pub struct PatchPlaylistService<R>
where
    R: PlaylistRepository,
{
    repository: R,
}

impl<R> PatchPlaylistService<R>
where
    R: PlaylistRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchPlaylistUseCase for PatchPlaylistService<R>
where
    R: PlaylistRepository + Send + Sync,
{
    async fn execute(
        &self,
        playlist_id: Uuid,
        data: PatchPlaylistData,
    ) -> Result<PlaylistResult, PatchPlaylistError> {
        self.repository
            .patch_playlist(playlist_id, data)
            .await
            .map_err(|e| match e {
                PlaylistRepositoryError::NotFound => PatchPlaylistError::NotFound,
                PlaylistRepositoryError::SlugAlreadyExists => PatchPlaylistError::SlugAlreadyExists,
                PlaylistRepositoryError::DatabaseError(msg) => {
                    PatchPlaylistError::RepositoryError(msg)
                }
            })
    }
}
