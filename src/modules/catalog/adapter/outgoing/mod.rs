mod playlist_query_postgres;
mod playlist_repository_postgres;
mod rating_query_postgres;
pub mod sea_orm_entity;

pub use playlist_query_postgres::PlaylistQueryPostgres;
pub use playlist_repository_postgres::PlaylistRepositoryPostgres;
pub use rating_query_postgres::RatingQueryPostgres;
