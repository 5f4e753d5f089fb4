mod create_playlist_service;
mod get_movie_service;
mod get_playlist_service;
mod get_show_season_service;
mod get_show_service;
mod list_featured_playlists_service;
mod list_movies_service;
mod list_shows_service;
mod patch_playlist_service;

#[cfg(test)]
pub mod test_support;

pub use create_playlist_service::CreatePlaylistService;
pub use get_movie_service::GetMovieService;
pub use get_playlist_service::GetPlaylistService;
pub use get_show_season_service::GetShowSeasonService;
pub use get_show_service::GetShowService;
pub use list_featured_playlists_service::ListFeaturedPlaylistsService;
pub use list_movies_service::ListMoviesService;
pub use list_shows_service::ListShowsService;
pub use patch_playlist_service::PatchPlaylistService;
