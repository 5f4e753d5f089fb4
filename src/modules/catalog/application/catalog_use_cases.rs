use std::sync::Arc;

use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreatePlaylistUseCase, GetMovieUseCase, GetPlaylistUseCase, GetShowSeasonUseCase,
    GetShowUseCase, ListFeaturedPlaylistsUseCase, ListMoviesUseCase, ListShowsUseCase,
    PatchPlaylistUseCase,
};

#[derive(Clone)]
pub struct CatalogUseCases {
    pub list_movies: Arc<dyn ListMoviesUseCase + Send + Sync>,
    pub get_movie: Arc<dyn GetMovieUseCase + Send + Sync>,
    pub list_shows: Arc<dyn ListShowsUseCase + Send + Sync>,
    pub get_show: Arc<dyn GetShowUseCase + Send + Sync>,
    pub get_show_season: Arc<dyn GetShowSeasonUseCase + Send + Sync>,
    pub list_featured: Arc<dyn ListFeaturedPlaylistsUseCase + Send + Sync>,
    pub get_playlist: Arc<dyn GetPlaylistUseCase + Send + Sync>,
    pub create: Arc<dyn CreatePlaylistUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchPlaylistUseCase + Send + Sync>,
}
