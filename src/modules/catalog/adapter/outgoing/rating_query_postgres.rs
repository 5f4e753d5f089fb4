use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::ContentKind;
use crate::modules::catalog::application::ports::outgoing::{
    RatingQuery, RatingQueryError, RatingSummary,
};

use super::sea_orm_entity::ratings::{Column, Entity};

#[derive(Debug, Clone)]
pub struct RatingQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RatingQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct RatingAggRow {
    average: Option<f64>,
    min: Option<i32>,
    max: Option<i32>,
}

#[async_trait]
impl RatingQuery for RatingQueryPostgres {
    async fn summary(
        &self,
        kind: ContentKind,
        object_id: Uuid,
    ) -> Result<RatingSummary, RatingQueryError> {
        // AVG over int4 yields numeric; cast so the driver hands back f64.
        let avg_expr = SimpleExpr::from(Func::avg(
            Expr::col(Column::Value).cast_as(Alias::new("double precision")),
        ));

        let row = Entity::find()
            .select_only()
            .column_as(avg_expr, "average")
            .column_as(Column::Value.min(), "min")
            .column_as(Column::Value.max(), "max")
            .filter(Column::ContentKind.eq(kind.code()))
            .filter(Column::ObjectId.eq(object_id))
            .filter(Column::Active.eq(true))
            .into_model::<RatingAggRow>()
            .one(&*self.db)
            .await
            .map_err(|e| RatingQueryError::DatabaseError(e.to_string()))?;

        Ok(row
            .map(|r| RatingSummary {
                average: r.average,
                min: r.min,
                max: r.max,
            })
            .unwrap_or_default())
    }
}
