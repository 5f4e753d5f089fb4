use async_trait::async_trait;

use super::get_playlist::PlaylistDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMovieError {
    #[error("Movie not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetMovieUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<PlaylistDetail, GetMovieError>;
}
