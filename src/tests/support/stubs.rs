//! Default use-case stubs for the app state builder. Tests override the
//! one they exercise and leave the rest on these.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreatePlaylistError, CreatePlaylistUseCase, GetMovieError, GetMovieUseCase, GetPlaylistError,
    GetPlaylistUseCase, GetShowError, GetShowSeasonError, GetShowSeasonUseCase, GetShowUseCase,
    ListFeaturedPlaylistsError, ListFeaturedPlaylistsUseCase, ListMoviesError, ListMoviesUseCase,
    ListShowsError, ListShowsUseCase, PatchPlaylistError, PatchPlaylistUseCase, PlaylistDetail,
    ShowDetail,
};
use crate::modules::catalog::application::ports::outgoing::{
    CreatePlaylistData, PatchPlaylistData, PlaylistCardView, PlaylistResult,
};

pub struct StubListMoviesUseCase;

#[async_trait]
impl ListMoviesUseCase for StubListMoviesUseCase {
    async fn execute(&self) -> Result<Vec<PlaylistCardView>, ListMoviesError> {
        Ok(vec![])
    }
}

pub struct StubListShowsUseCase;

#[async_trait]
impl ListShowsUseCase for StubListShowsUseCase {
    async fn execute(&self) -> Result<Vec<PlaylistCardView>, ListShowsError> {
        Ok(vec![])
    }
}

pub struct StubListFeaturedPlaylistsUseCase;

#[async_trait]
impl ListFeaturedPlaylistsUseCase for StubListFeaturedPlaylistsUseCase {
    async fn execute(&self) -> Result<Vec<PlaylistCardView>, ListFeaturedPlaylistsError> {
        Ok(vec![])
    }
}

pub struct StubGetMovieUseCase;

#[async_trait]
impl GetMovieUseCase for StubGetMovieUseCase {
    async fn execute(&self, _slug: &str) -> Result<PlaylistDetail, GetMovieError> {
        Err(GetMovieError::NotFound)
    }
}

pub struct StubGetShowUseCase;

#[async_trait]
impl GetShowUseCase for StubGetShowUseCase {
    async fn execute(&self, _slug: &str) -> Result<ShowDetail, GetShowError> {
        Err(GetShowError::NotFound)
    }
}

pub struct StubGetShowSeasonUseCase;

#[async_trait]
impl GetShowSeasonUseCase for StubGetShowSeasonUseCase {
    async fn execute(
        &self,
        _show_slug: &str,
        _season_slug: &str,
    ) -> Result<PlaylistDetail, GetShowSeasonError> {
        Err(GetShowSeasonError::NotFound)
    }
}

pub struct StubGetPlaylistUseCase;

#[async_trait]
impl GetPlaylistUseCase for StubGetPlaylistUseCase {
    async fn execute(&self, _slug: &str) -> Result<PlaylistDetail, GetPlaylistError> {
        Err(GetPlaylistError::NotFound)
    }
}

pub struct StubCreatePlaylistUseCase;

#[async_trait]
impl CreatePlaylistUseCase for StubCreatePlaylistUseCase {
    async fn execute(
        &self,
        _data: CreatePlaylistData,
    ) -> Result<PlaylistResult, CreatePlaylistError> {
        Err(CreatePlaylistError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubPatchPlaylistUseCase;

#[async_trait]
impl PatchPlaylistUseCase for StubPatchPlaylistUseCase {
    async fn execute(
        &self,
        _playlist_id: Uuid,
        _data: PatchPlaylistData,
    ) -> Result<PlaylistResult, PatchPlaylistError> {
        Err(PatchPlaylistError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}
