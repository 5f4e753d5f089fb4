use async_trait::async_trait;

use super::get_playlist::PlaylistDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetShowSeasonError {
    #[error("Season not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Hierarchical lookup: both slugs are matched case-insensitively, and
/// anything other than exactly one matching season is `NotFound`.
#[async_trait]
pub trait GetShowSeasonUseCase: Send + Sync {
    async fn execute(
        &self,
        show_slug: &str,
        season_slug: &str,
    ) -> Result<PlaylistDetail, GetShowSeasonError>;
}
