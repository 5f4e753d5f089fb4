use async_trait::async_trait;

use crate::modules::catalog::application::ports::outgoing::PlaylistCardView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListShowsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListShowsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PlaylistCardView>, ListShowsError>;
}
