mod create_playlist;
mod get_movie;
mod get_playlist;
mod get_show;
mod get_show_season;
mod list_featured_playlists;
mod list_movies;
mod list_shows;
mod patch_playlist;

pub use create_playlist::{CreatePlaylistError, CreatePlaylistUseCase};
pub use get_movie::{GetMovieError, GetMovieUseCase};
pub use get_playlist::{GetPlaylistError, GetPlaylistUseCase, PlaylistDetail};
pub use get_show::{GetShowError, GetShowUseCase, ShowDetail};
pub use get_show_season::{GetShowSeasonError, GetShowSeasonUseCase};
pub use list_featured_playlists::{ListFeaturedPlaylistsError, ListFeaturedPlaylistsUseCase};
pub use list_movies::{ListMoviesError, ListMoviesUseCase};
pub use list_shows::{ListShowsError, ListShowsUseCase};
pub use patch_playlist::{PatchPlaylistError, PatchPlaylistUseCase};
