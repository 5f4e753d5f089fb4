use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Condition, Set};
use serde::{Deserialize, Serialize};

use crate::modules::catalog::application::domain::entities::PublishState;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "videos")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    // External asset identifier at the streaming provider
    #[sea_orm(column_name = "video_ref", column_type = "Text")]
    pub video_ref: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub slug: Option<String>,

    pub active: bool,

    #[sea_orm(column_type = "Text")]
    pub state: String,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub publish_timestamp: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::playlist_items::Entity")]
    PlaylistItems,

    #[sea_orm(has_many = "super::playlist_videos::Entity")]
    PlaylistVideos,
}

impl Related<super::playlist_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlaylistItems.def()
    }
}

// Many-to-many: videos <-> playlists via playlist_videos
impl Related<super::playlists::Entity> for Entity {
    fn to() -> RelationDef {
        super::playlist_videos::Relation::Playlists.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::playlist_videos::Relation::Videos.def().rev())
    }
}

/// Same visibility predicate as playlists, over the videos table.
pub fn published_filter(now: DateTimeWithTimeZone) -> Condition {
    Condition::all()
        .add(Column::State.eq(PublishState::Publish.code()))
        .add(Column::PublishTimestamp.lte(now))
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(Some(slug)) = &self.slug {
            self.slug = Set(Some(slug.trim().to_lowercase()));
        }

        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
