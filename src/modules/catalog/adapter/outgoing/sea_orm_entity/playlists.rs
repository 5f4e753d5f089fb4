use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Condition, Set};
use serde::{Deserialize, Serialize};

use crate::modules::catalog::application::domain::entities::PublishState;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "playlists")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    // Self reference: a season's parent is its show
    #[sea_orm(column_name = "parent_id", column_type = "Uuid", nullable)]
    pub parent_id: Option<Uuid>,

    pub order: i32,

    #[sea_orm(column_name = "category_id", column_type = "Uuid", nullable)]
    pub category_id: Option<Uuid>,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    // 3-char discriminant: MOV | TVS | SEA | PLY
    #[sea_orm(column_type = "Text")]
    pub kind: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub slug: Option<String>,

    #[sea_orm(column_name = "featured_video_id", column_type = "Uuid", nullable)]
    pub featured_video_id: Option<Uuid>,

    pub active: bool,

    // 2-char publish state: DR | PU
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
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Parent,

    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Categories,

    #[sea_orm(
        belongs_to = "super::videos::Entity",
        from = "Column::FeaturedVideoId",
        to = "super::videos::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    FeaturedVideo,

    #[sea_orm(has_many = "super::playlist_items::Entity")]
    PlaylistItems,

    #[sea_orm(has_many = "super::playlist_videos::Entity")]
    PlaylistVideos,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::playlist_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlaylistItems.def()
    }
}

// Many-to-many: playlists <-> videos via playlist_videos
impl Related<super::videos::Entity> for Entity {
    fn to() -> RelationDef {
        super::playlist_videos::Relation::Videos.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::playlist_videos::Relation::Playlists.def().rev())
    }
}

/// End-user visibility predicate: published state AND the publish stamp has
/// passed. A future stamp means "scheduled", not visible yet.
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
        // Stored slugs are always lowercase; lookups rely on it.
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    #[test]
    fn published_filter_checks_state_and_stamp() {
        let now = Utc::now().fixed_offset();
        let sql = Entity::find()
            .filter(published_filter(now))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""playlists"."state" = 'PU'"#));
        assert!(sql.contains(r#""playlists"."publish_timestamp" <="#));
    }
}
