use async_trait::async_trait;

use crate::modules::catalog::application::ports::outgoing::{PlaylistCardView, PlaylistView};

/// Show detail: the show row, its published seasons and the short display
/// string ("3 Seasons") the listing templates use.
#[derive(Debug, Clone)]
pub struct ShowDetail {
    pub show: PlaylistView,
    pub seasons: Vec<PlaylistCardView>,
    pub seasons_display: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetShowError {
    #[error("Show not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetShowUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<ShowDetail, GetShowError>;
}
