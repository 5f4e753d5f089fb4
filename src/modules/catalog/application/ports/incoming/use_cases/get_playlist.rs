use async_trait::async_trait;

use crate::modules::catalog::application::ports::outgoing::{
    PlaylistView, RatingSummary, VideoItemView,
};

/// Detail page payload: the playlist row, its ordered (published) videos
/// and the aggregate of its ratings.
#[derive(Debug, Clone)]
pub struct PlaylistDetail {
    pub playlist: PlaylistView,
    pub videos: Vec<VideoItemView>,
    pub rating: RatingSummary,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPlaylistError {
    #[error("Playlist not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPlaylistUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<PlaylistDetail, GetPlaylistError>;
}
