pub mod create_playlist;
pub mod get_movie;
pub mod get_playlist;
pub mod get_show;
pub mod get_show_season;
pub mod list_featured_playlists;
pub mod list_movies;
pub mod list_shows;
pub mod patch_playlist;

pub use create_playlist::{create_playlist_handler, CreatePlaylistRequest, PlaylistAdminDto};
pub use get_movie::get_movie_handler;
pub use get_playlist::{
    get_playlist_handler, CategoryDto, PlaylistDetailDto, RatingSummaryDto, VideoItemDto,
};
pub use get_show::{get_show_handler, ShowDetailDto};
pub use get_show_season::get_show_season_handler;
pub use list_featured_playlists::list_featured_playlists_handler;
pub use list_movies::{list_movies_handler, PlaylistCardDto};
pub use list_shows::list_shows_handler;
pub use patch_playlist::{patch_playlist_handler, PatchPlaylistRequest};
