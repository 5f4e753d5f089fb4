use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// Generic annotation: (content_kind, object_id) instead of a foreign key,
// so a tag can attach to a playlist or a video. Resolved by kind at query
// time; no referential integrity on purpose.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tagged_items")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub tag: String,

    #[sea_orm(column_name = "content_kind", column_type = "Text")]
    pub content_kind: String,

    #[sea_orm(column_name = "object_id", column_type = "Uuid")]
    pub object_id: Uuid,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
