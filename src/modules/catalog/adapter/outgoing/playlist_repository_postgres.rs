use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{
    publish_stamp, resolve_slug, PlaylistKind, PublishState,
};
use crate::modules::catalog::application::ports::outgoing::{
    CreatePlaylistData, PatchField, PatchPlaylistData, PlaylistRepository,
    PlaylistRepositoryError, PlaylistResult,
};

use super::sea_orm_entity::playlists::{self, ActiveModel, Column, Entity};

// ============================================================================
// Repository Implementation
// ============================================================================
//
// Normalization is centralized here: every write, whatever typed path
// produced it, runs the same slug derivation and publish stamping before
// touching the table.
//

#[derive(Clone)]
pub struct PlaylistRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PlaylistRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlaylistRepository for PlaylistRepositoryPostgres {
    async fn create_playlist(
        &self,
        data: CreatePlaylistData,
    ) -> Result<PlaylistResult, PlaylistRepositoryError> {
        let now = Utc::now();

        let slug = resolve_slug(data.slug.as_deref(), &data.title);
        let stamp = publish_stamp(data.state, data.publish_timestamp, now);

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            parent_id: Set(data.parent_id),
            order: Set(data.order.unwrap_or(1)),
            category_id: Set(data.category_id),
            title: Set(data.title.trim().to_string()),
            kind: Set(data.kind.code().to_string()),
            description: Set(data.description),
            slug: Set(slug),
            featured_video_id: Set(data.featured_video_id),
            active: Set(data.active),
            state: Set(data.state.code().to_string()),
            publish_timestamp: Set(stamp.map(|t| t.fixed_offset())),
            created_at: Set(now.fixed_offset()),
            updated_at: Set(now.fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_slug_error)?;

        model_to_result(result)
    }

    async fn patch_playlist(
        &self,
        playlist_id: Uuid,
        data: PatchPlaylistData,
    ) -> Result<PlaylistResult, PlaylistRepositoryError> {
        // The stored row decides whether a publish transition still needs a
        // stamp and whether a slug must be derived, so fetch it first.
        let current = Entity::find_by_id(playlist_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PlaylistRepositoryError::NotFound)?;

        let model = patch_changeset(&current, data, Utc::now());

        let has_changes = model.title.is_set()
            || model.kind.is_set()
            || model.description.is_set()
            || model.slug.is_set()
            || model.parent_id.is_set()
            || model.category_id.is_set()
            || model.order.is_set()
            || model.featured_video_id.is_set()
            || model.active.is_set()
            || model.state.is_set()
            || model.publish_timestamp.is_set();

        if !has_changes {
            return model_to_result(current);
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(playlist_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_slug_error)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(PlaylistRepositoryError::NotFound)?;

        model_to_result(result)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Changeset for a partial update, with the write-path normalization rules
/// applied against the stored row.
fn patch_changeset(
    current: &playlists::Model,
    data: PatchPlaylistData,
    now: DateTime<Utc>,
) -> ActiveModel {
    let mut model = <ActiveModel as Default>::default();

    let effective_title = data
        .title
        .as_value()
        .cloned()
        .unwrap_or_else(|| current.title.clone());

    if let PatchField::Value(title) = data.title {
        model.title = Set(title.trim().to_string());
    }

    if let PatchField::Value(kind) = data.kind {
        model.kind = Set(kind.code().to_string());
    }

    match data.description {
        PatchField::Unset => {}
        PatchField::Null => model.description = Set(None),
        PatchField::Value(desc) => model.description = Set(Some(desc)),
    }

    match data.parent_id {
        PatchField::Unset => {}
        PatchField::Null => model.parent_id = Set(None),
        PatchField::Value(id) => model.parent_id = Set(Some(id)),
    }

    match data.category_id {
        PatchField::Unset => {}
        PatchField::Null => model.category_id = Set(None),
        PatchField::Value(id) => model.category_id = Set(Some(id)),
    }

    match data.featured_video_id {
        PatchField::Unset => {}
        PatchField::Null => model.featured_video_id = Set(None),
        PatchField::Value(id) => model.featured_video_id = Set(Some(id)),
    }

    if let PatchField::Value(order) = data.order {
        model.order = Set(order);
    }

    if let PatchField::Value(active) = data.active {
        model.active = Set(active);
    }

    // Slug: explicit value wins (normalized), explicit null re-derives from
    // the effective title, and a row that never got one is back-filled. An
    // existing slug is otherwise left alone.
    match data.slug {
        PatchField::Value(slug) => model.slug = Set(resolve_slug(Some(&slug), &effective_title)),
        PatchField::Null => model.slug = Set(resolve_slug(None, &effective_title)),
        PatchField::Unset => {
            let missing = current
                .slug
                .as_deref()
                .map_or(true, |s| s.trim().is_empty());
            if missing {
                model.slug = Set(resolve_slug(None, &effective_title));
            }
        }
    }

    let effective_state = data.state.as_value().copied().unwrap_or_else(|| {
        PublishState::from_code(&current.state).unwrap_or_default()
    });

    if let PatchField::Value(state) = data.state {
        model.state = Set(state.code().to_string());
    }

    // A stored stamp is history and never moves; otherwise an explicit
    // schedule wins, and entering Publish without one stamps "now".
    let existing_stamp: Option<DateTime<Utc>> =
        current.publish_timestamp.map(|t| t.with_timezone(&Utc));
    let new_stamp = publish_stamp(effective_state, existing_stamp.or(data.publish_timestamp), now);

    if new_stamp != existing_stamp {
        model.publish_timestamp = Set(new_stamp.map(|t| t.fixed_offset()));
    }

    model
}

fn model_to_result(model: playlists::Model) -> Result<PlaylistResult, PlaylistRepositoryError> {
    let kind = PlaylistKind::from_code(&model.kind).ok_or_else(|| {
        PlaylistRepositoryError::DatabaseError(format!("unknown kind code: {}", model.kind))
    })?;
    let state = PublishState::from_code(&model.state).ok_or_else(|| {
        PlaylistRepositoryError::DatabaseError(format!("unknown state code: {}", model.state))
    })?;

    Ok(PlaylistResult {
        id: model.id,
        parent_id: model.parent_id,
        order: model.order,
        category_id: model.category_id,
        title: model.title,
        kind,
        description: model.description,
        slug: model.slug,
        featured_video_id: model.featured_video_id,
        active: model.active,
        state,
        publish_timestamp: model.publish_timestamp.map(Into::into),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_slug_error(e: DbErr) -> PlaylistRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        PlaylistRepositoryError::SlugAlreadyExists
    } else {
        PlaylistRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> PlaylistRepositoryError {
    PlaylistRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
