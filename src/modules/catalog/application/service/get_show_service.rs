use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::PlaylistKind;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    GetShowError, GetShowUseCase, ShowDetail,
};
use crate::modules::catalog::application::ports::outgoing::{PlaylistQuery, PlaylistQueryError};

pub struct GetShowService<Q>
where
    Q: PlaylistQuery,
{
    query: Q,
}

impl<Q> GetShowService<Q>
where
    Q: PlaylistQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetShowUseCase for GetShowService<Q>
where
    Q: PlaylistQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<ShowDetail, GetShowError> {
        let show = self
            .query
            .get_published_by_slug(Some(PlaylistKind::Show), slug)
            .await
            .map_err(map_query_err)?;

        let seasons = self
            .query
            .list_seasons(show.id)
            .await
            .map_err(map_query_err)?;

        let count = self
            .query
            .published_season_count(show.id)
            .await
            .map_err(map_query_err)?;

        Ok(ShowDetail {
            show,
            seasons,
            seasons_display: format!("{count} Seasons"),
        })
    }
}

fn map_query_err(e: PlaylistQueryError) -> GetShowError {
    match e {
        PlaylistQueryError::NotFound => GetShowError::NotFound,
        PlaylistQueryError::DatabaseError(msg) => GetShowError::QueryFailed(msg),
    }
}
