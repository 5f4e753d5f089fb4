use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{PlaylistKind, PublishState};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep DB value
// - Null: explicitly null => set DB column NULL (only for nullable fields)
// - Value(v): replace with v
//
// Serde behavior (recommended usage):
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreatePlaylistData {
    pub kind: PlaylistKind,

    pub title: String,

    /// Missing/blank => derived from the title on save
    pub slug: Option<String>,

    pub description: Option<String>,

    pub parent_id: Option<Uuid>,

    pub category_id: Option<Uuid>,

    /// Defaults to 1
    pub order: Option<i32>,

    pub featured_video_id: Option<Uuid>,

    pub active: bool,

    pub state: PublishState,

    /// A pre-set stamp schedules publication; otherwise entering Publish
    /// stamps "now" on save
    pub publish_timestamp: Option<DateTime<Utc>>,
}

/// Patch semantics:
/// - title/order/active/state/kind: Unset => keep, Value => replace
/// - description/parent_id/category_id/featured_video_id: Unset => keep,
///   Null => clear, Value => set
/// - slug: Value => replace (normalized), Null => re-derive from the
///   effective title; an existing slug is otherwise kept untouched
/// - publish_timestamp is schedule-only: `Some` replaces a missing stamp,
///   a stamp already in place is history and is never cleared or moved
#[derive(Debug, Clone, Default)]
pub struct PatchPlaylistData {
    pub title: PatchField<String>,
    pub kind: PatchField<PlaylistKind>,
    pub description: PatchField<String>,
    pub slug: PatchField<String>,
    pub parent_id: PatchField<Uuid>,
    pub category_id: PatchField<Uuid>,
    pub order: PatchField<i32>,
    pub featured_video_id: PatchField<Uuid>,
    pub active: PatchField<bool>,
    pub state: PatchField<PublishState>,
    pub publish_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PlaylistResult {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub order: i32,
    pub category_id: Option<Uuid>,
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

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PlaylistRepositoryError {
    #[error("Playlist not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    async fn create_playlist(
        &self,
        data: CreatePlaylistData,
    ) -> Result<PlaylistResult, PlaylistRepositoryError>;

    async fn patch_playlist(
        &self,
        playlist_id: Uuid,
        data: PatchPlaylistData,
    ) -> Result<PlaylistResult, PlaylistRepositoryError>;
}
