use async_trait::async_trait;

use crate::modules::catalog::application::ports::incoming::use_cases::{
    ListMoviesError, ListMoviesUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    PlaylistCardView, PlaylistQuery, PlaylistQueryError,
};

pub struct ListMoviesService<Q>
where
    Q: PlaylistQuery,
{
    query: Q,
}

impl<Q> ListMoviesService<Q>
where
    Q: PlaylistQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListMoviesUseCase for ListMoviesService<Q>
where
    Q: PlaylistQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PlaylistCardView>, ListMoviesError> {
        self.query.list_movies().await.map_err(|e| match e {
            PlaylistQueryError::NotFound => ListMoviesError::QueryFailed(e.to_string()),
            PlaylistQueryError::DatabaseError(msg) => ListMoviesError::QueryFailed(msg),
        })
    }
}
