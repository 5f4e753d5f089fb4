use async_trait::async_trait;

use crate::modules::catalog::application::ports::outgoing::PlaylistCardView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMoviesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListMoviesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PlaylistCardView>, ListMoviesError>;
}
