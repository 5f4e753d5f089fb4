use std::sync::Arc;

use crate::modules::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreatePlaylistUseCase, GetMovieUseCase, GetPlaylistUseCase, GetShowSeasonUseCase,
    GetShowUseCase, ListFeaturedPlaylistsUseCase, ListMoviesUseCase, ListShowsUseCase,
    PatchPlaylistUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    list_movies: Arc<dyn ListMoviesUseCase + Send + Sync>,
    get_movie: Arc<dyn GetMovieUseCase + Send + Sync>,
    list_shows: Arc<dyn ListShowsUseCase + Send + Sync>,
    get_show: Arc<dyn GetShowUseCase + Send + Sync>,
    get_show_season: Arc<dyn GetShowSeasonUseCase + Send + Sync>,
    list_featured: Arc<dyn ListFeaturedPlaylistsUseCase + Send + Sync>,
    get_playlist: Arc<dyn GetPlaylistUseCase + Send + Sync>,
    create: Arc<dyn CreatePlaylistUseCase + Send + Sync>,
    patch: Arc<dyn PatchPlaylistUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            list_movies: Arc::new(StubListMoviesUseCase),
            get_movie: Arc::new(StubGetMovieUseCase),
            list_shows: Arc::new(StubListShowsUseCase),
            get_show: Arc::new(StubGetShowUseCase),
            get_show_season: Arc::new(StubGetShowSeasonUseCase),
            list_featured: Arc::new(StubListFeaturedPlaylistsUseCase),
            get_playlist: Arc::new(StubGetPlaylistUseCase),
            create: Arc::new(StubCreatePlaylistUseCase),
            patch: Arc::new(StubPatchPlaylistUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_list_movies(mut self, uc: Arc<dyn ListMoviesUseCase + Send + Sync>) -> Self {
        self.list_movies = uc;
        self
    }

    pub fn with_get_movie(mut self, uc: Arc<dyn GetMovieUseCase + Send + Sync>) -> Self {
        self.get_movie = uc;
        self
    }

    pub fn with_list_shows(mut self, uc: Arc<dyn ListShowsUseCase + Send + Sync>) -> Self {
        self.list_shows = uc;
        self
    }

    pub fn with_get_show(mut self, uc: Arc<dyn GetShowUseCase + Send + Sync>) -> Self {
        self.get_show = uc;
        self
    }

    pub fn with_get_show_season(
        mut self,
        uc: Arc<dyn GetShowSeasonUseCase + Send + Sync>,
    ) -> Self {
        self.get_show_season = uc;
        self
    }

    pub fn with_list_featured(
        mut self,
        uc: Arc<dyn ListFeaturedPlaylistsUseCase + Send + Sync>,
    ) -> Self {
        self.list_featured = uc;
        self
    }

    pub fn with_get_playlist(mut self, uc: Arc<dyn GetPlaylistUseCase + Send + Sync>) -> Self {
        self.get_playlist = uc;
        self
    }

    pub fn with_create_playlist(
        mut self,
        uc: Arc<dyn CreatePlaylistUseCase + Send + Sync>,
    ) -> Self {
        self.create = uc;
        self
    }

    pub fn with_patch_playlist(mut self, uc: Arc<dyn PatchPlaylistUseCase + Send + Sync>) -> Self {
        self.patch = uc;
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            catalog: CatalogUseCases {
                list_movies: self.list_movies,
                get_movie: self.get_movie,
                list_shows: self.list_shows,
                get_show: self.get_show,
                get_show_season: self.get_show_season,
                list_featured: self.list_featured,
                get_playlist: self.get_playlist,
                create: self.create,
                patch: self.patch,
            },
        }
    }
}
