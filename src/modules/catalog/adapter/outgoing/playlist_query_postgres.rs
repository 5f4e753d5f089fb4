use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{PlaylistKind, PublishState};
use crate::modules::catalog::application::ports::outgoing::{
    CategoryView, PlaylistCardView, PlaylistQuery, PlaylistQueryError, PlaylistView, VideoItemView,
};

use super::sea_orm_entity::playlists::{self, Column, Entity};
use super::sea_orm_entity::{categories, playlist_items, videos};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct PlaylistQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PlaylistQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn list_published(
        &self,
        kind: PlaylistKind,
        root_only: bool,
    ) -> Result<Vec<PlaylistCardView>, PlaylistQueryError> {
        let now = Utc::now().fixed_offset();

        let models = select_published(kind, root_only, now)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_card).collect()
    }
}

/// Listing select for one kind: published rows, optionally restricted to
/// root nodes, in (order ASC, created DESC).
fn select_published(
    kind: PlaylistKind,
    root_only: bool,
    now: DateTimeWithTimeZone,
) -> Select<Entity> {
    let mut query = Entity::find()
        .filter(Column::Kind.eq(kind.code()))
        .filter(playlists::published_filter(now));

    if root_only {
        query = query.filter(Column::ParentId.is_null());
    }

    query
        .order_by_asc(Column::Order)
        .order_by_desc(Column::CreatedAt)
}

#[async_trait]
impl PlaylistQuery for PlaylistQueryPostgres {
    async fn list_movies(&self) -> Result<Vec<PlaylistCardView>, PlaylistQueryError> {
        self.list_published(PlaylistKind::Movie, false).await
    }

    async fn list_shows(&self) -> Result<Vec<PlaylistCardView>, PlaylistQueryError> {
        // A show is always a root node; rows tagged TVS with a parent are
        // bad data and stay out of the listing.
        self.list_published(PlaylistKind::Show, true).await
    }

    async fn list_seasons(
        &self,
        show_id: Uuid,
    ) -> Result<Vec<PlaylistCardView>, PlaylistQueryError> {
        let now = Utc::now().fixed_offset();

        let models = select_published(PlaylistKind::Season, false, now)
            .filter(Column::ParentId.eq(show_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_card).collect()
    }

    async fn list_featured(&self) -> Result<Vec<PlaylistCardView>, PlaylistQueryError> {
        self.list_published(PlaylistKind::Playlist, false).await
    }

    async fn get_published_by_slug(
        &self,
        kind: Option<PlaylistKind>,
        slug: &str,
    ) -> Result<PlaylistView, PlaylistQueryError> {
        // Stored slugs are lowercase (write-path invariant), so lowering
        // the input gives the case-insensitive match.
        let normalized_slug = slug.trim().to_lowercase();
        let now = Utc::now().fixed_offset();

        let mut query = Entity::find()
            .filter(Column::Slug.eq(&normalized_slug))
            .filter(playlists::published_filter(now));

        if let Some(kind) = kind {
            query = query.filter(Column::Kind.eq(kind.code()));
        }

        let (model, category) = query
            .find_also_related(categories::Entity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PlaylistQueryError::NotFound)?;

        model_to_view(model, category)
    }

    async fn get_season(
        &self,
        show_slug: &str,
        season_slug: &str,
    ) -> Result<PlaylistView, PlaylistQueryError> {
        let show_slug = show_slug.trim().to_lowercase();
        let season_slug = season_slug.trim().to_lowercase();
        let now = Utc::now().fixed_offset();

        let parents = Entity::find()
            .filter(Column::Slug.eq(&show_slug))
            .select_only()
            .column(Column::Id)
            .into_model::<PlaylistIdRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let parent_ids: Vec<Uuid> = parents.into_iter().map(|row| row.id).collect();

        let seasons = Entity::find()
            .filter(Column::Kind.eq(PlaylistKind::Season.code()))
            .filter(Column::Slug.eq(&season_slug))
            .filter(Column::ParentId.is_in(parent_ids))
            .filter(playlists::published_filter(now))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        // Anything but exactly one match (missing or ambiguous pair) is a
        // not-found to the caller.
        if seasons.len() != 1 {
            return Err(PlaylistQueryError::NotFound);
        }

        let season = seasons.into_iter().next().expect("len checked above");

        model_to_view(season, None)
    }

    async fn published_season_count(&self, show_id: Uuid) -> Result<u64, PlaylistQueryError> {
        let now = Utc::now().fixed_offset();

        Entity::find()
            .filter(Column::Kind.eq(PlaylistKind::Season.code()))
            .filter(Column::ParentId.eq(show_id))
            .filter(playlists::published_filter(now))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn playlist_videos(
        &self,
        playlist_id: Uuid,
    ) -> Result<Vec<VideoItemView>, PlaylistQueryError> {
        let now = Utc::now().fixed_offset();

        let rows = playlist_items::Entity::find()
            .find_also_related(videos::Entity)
            .filter(playlist_items::Column::PlaylistId.eq(playlist_id))
            .filter(videos::published_filter(now))
            .order_by_asc(playlist_items::Column::Order)
            .order_by_desc(playlist_items::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .filter_map(|(item, video)| {
                video.map(|v| VideoItemView {
                    id: v.id,
                    title: v.title,
                    video_ref: v.video_ref,
                    slug: v.slug,
                    order: item.order,
                })
            })
            .collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

#[derive(Debug, FromQueryResult)]
struct PlaylistIdRow {
    id: Uuid,
}

fn model_to_card(model: playlists::Model) -> Result<PlaylistCardView, PlaylistQueryError> {
    Ok(PlaylistCardView {
        id: model.id,
        title: model.title,
        kind: parse_kind(&model.kind)?,
        slug: model.slug,
        description: model.description,
        publish_timestamp: model.publish_timestamp.map(Into::into),
    })
}

fn model_to_view(
    model: playlists::Model,
    category: Option<categories::Model>,
) -> Result<PlaylistView, PlaylistQueryError> {
    Ok(PlaylistView {
        id: model.id,
        parent_id: model.parent_id,
        order: model.order,
        category: category.map(|c| CategoryView {
            id: c.id,
            title: c.title,
        }),
        title: model.title,
        kind: parse_kind(&model.kind)?,
        description: model.description,
        slug: model.slug,
        featured_video_id: model.featured_video_id,
        active: model.active,
        state: parse_state(&model.state)?,
        publish_timestamp: model.publish_timestamp.map(Into::into),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn parse_kind(code: &str) -> Result<PlaylistKind, PlaylistQueryError> {
    PlaylistKind::from_code(code)
        .ok_or_else(|| PlaylistQueryError::DatabaseError(format!("unknown kind code: {code}")))
}

fn parse_state(code: &str) -> Result<PublishState, PlaylistQueryError> {
    PublishState::from_code(code)
        .ok_or_else(|| PlaylistQueryError::DatabaseError(format!("unknown state code: {code}")))
}

fn map_db_err(e: sea_orm::DbErr) -> PlaylistQueryError {
    PlaylistQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
