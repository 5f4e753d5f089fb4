use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::ContentKind;

/// Aggregate over the ratings attached to one object. All fields are
/// `None` when the object has no active ratings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingSummary {
    pub average: Option<f64>,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RatingQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RatingQuery: Send + Sync {
    async fn summary(
        &self,
        kind: ContentKind,
        object_id: Uuid,
    ) -> Result<RatingSummary, RatingQueryError>;
}
