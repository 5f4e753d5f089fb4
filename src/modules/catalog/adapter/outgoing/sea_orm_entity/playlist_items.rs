use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// Ordered membership of a video in a playlist. Listing order is
// (order ASC, created_at DESC); both sides cascade on delete.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "playlist_items")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_name = "playlist_id", column_type = "Uuid")]
    pub playlist_id: Uuid,

    #[sea_orm(column_name = "video_id", column_type = "Uuid")]
    pub video_id: Uuid,

    pub order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::playlists::Entity",
        from = "Column::PlaylistId",
        to = "super::playlists::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Playlists,

    #[sea_orm(
        belongs_to = "super::videos::Entity",
        from = "Column::VideoId",
        to = "super::videos::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Videos,
}

impl Related<super::playlists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Playlists.def()
    }
}

impl Related<super::videos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Videos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
