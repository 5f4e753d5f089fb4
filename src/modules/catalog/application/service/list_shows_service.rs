use async_trait::async_trait;

use crate::modules::catalog::application::ports::incoming::use_cases::{
    ListShowsError, ListShowsUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    PlaylistCardView, PlaylistQuery, PlaylistQueryError,
};

pub struct ListShowsService<Q>
where
    Q: PlaylistQuery,
{
    query: Q,
}

impl<Q> ListShowsService<Q>
where
    Q: PlaylistQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListShowsUseCase for ListShowsService<Q>
where
    Q: PlaylistQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PlaylistCardView>, ListShowsError> {
        self.query.list_shows().await.map_err(|e| match e {
            PlaylistQueryError::NotFound => ListShowsError::QueryFailed(e.to_string()),
            PlaylistQueryError::DatabaseError(msg) => ListShowsError::QueryFailed(msg),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::application::service::test_support::{card, MockPlaylistQuery};

    #[tokio::test]
    async fn execute_returns_show_cards() {
        let query = MockPlaylistQuery::default().with_shows(Ok(vec![card("Breaking Bad")]));
        let service = ListShowsService::new(query);

        let shows = service.execute().await.unwrap();

        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].slug.as_deref(), Some("breaking-bad"));
    }

    #[tokio::test]
    async fn execute_maps_database_error() {
        let query = MockPlaylistQuery::default()
            .with_shows(Err(PlaylistQueryError::DatabaseError("db down".into())));
        let service = ListShowsService::new(query);

        let result = service.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            ListShowsError::QueryFailed(msg) if msg == "db down"
        ));
    }
}
