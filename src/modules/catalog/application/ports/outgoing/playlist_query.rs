use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{PlaylistKind, PublishState};

//
// ──────────────────────────────────────────────────────────
// Read-side views
// ──────────────────────────────────────────────────────────
//

/// Row shape for listings.
#[derive(Debug, Clone)]
pub struct PlaylistCardView {
    pub id: Uuid,
    pub title: String,
    pub kind: PlaylistKind,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub publish_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct CategoryView {
    pub id: Uuid,
    pub title: String,
}

/// Full row shape for detail pages.
///
/// `active` carries the legacy admin visibility flag as-is. End-user
/// visibility is decided by the query predicate (state + stamp), never by
/// this flag; the two are deliberately kept distinct.
#[derive(Debug, Clone)]
pub struct PlaylistView {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub order: i32,
    pub category: Option<CategoryView>,
    pub title: String,
    pub kind: PlaylistKind,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub featured_video_id: Option<Uuid>,
    pub active: bool,
    pub state: PublishState,
    pub publish_timestamp: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One entry of a playlist's ordered video list.
#[derive(Debug, Clone)]
pub struct VideoItemView {
    pub id: Uuid,
    pub title: String,
    pub video_ref: String,
    pub slug: Option<String>,
    pub order: i32,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PlaylistQueryError {
    #[error("Playlist not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
// Every listing is published-only; draft and scheduled-future
// rows never leave this port.
//

#[async_trait]
pub trait PlaylistQuery: Send + Sync {
    /// Published rows with kind = Movie.
    async fn list_movies(&self) -> Result<Vec<PlaylistCardView>, PlaylistQueryError>;

    /// Published rows with kind = Show and no parent. A show is a root
    /// node; a mistagged show hanging under a parent is excluded.
    async fn list_shows(&self) -> Result<Vec<PlaylistCardView>, PlaylistQueryError>;

    /// Published seasons of one show, kind = Season and parent = `show_id`.
    async fn list_seasons(
        &self,
        show_id: Uuid,
    ) -> Result<Vec<PlaylistCardView>, PlaylistQueryError>;

    /// Published rows with kind = Playlist: the curated groupings only,
    /// never movies/shows/seasons.
    async fn list_featured(&self) -> Result<Vec<PlaylistCardView>, PlaylistQueryError>;

    /// Single published row by slug (case-insensitive), optionally pinned
    /// to one kind.
    async fn get_published_by_slug(
        &self,
        kind: Option<PlaylistKind>,
        slug: &str,
    ) -> Result<PlaylistView, PlaylistQueryError>;

    /// Hierarchical lookup: the one published Season whose own slug and
    /// whose parent show's slug both match (case-insensitive). Zero or
    /// more than one match is `NotFound`.
    async fn get_season(
        &self,
        show_slug: &str,
        season_slug: &str,
    ) -> Result<PlaylistView, PlaylistQueryError>;

    /// Count of published child seasons of a show.
    async fn published_season_count(&self, show_id: Uuid) -> Result<u64, PlaylistQueryError>;

    /// Ordered member videos of a playlist (order ASC, added DESC),
    /// restricted to published videos.
    async fn playlist_videos(
        &self,
        playlist_id: Uuid,
    ) -> Result<Vec<VideoItemView>, PlaylistQueryError>;
}
