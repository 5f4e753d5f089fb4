use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// Generic annotation, same (content_kind, object_id) scheme as tagged_items.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    pub value: i32,

    #[sea_orm(column_name = "content_kind", column_type = "Text")]
    pub content_kind: String,

    #[sea_orm(column_name = "object_id", column_type = "Uuid")]
    pub object_id: Uuid,

    // Rating author lives in a system we don't own; keep the reference opaque
    #[sea_orm(column_name = "user_ref", column_type = "Uuid", nullable)]
    pub user_ref: Option<Uuid>,

    pub active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
