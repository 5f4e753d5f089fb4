pub mod playlist_query;
pub mod playlist_repository;
pub mod rating_query;

pub use playlist_query::{
    CategoryView, PlaylistCardView, PlaylistQuery, PlaylistQueryError, PlaylistView, VideoItemView,
};
pub use playlist_repository::{
    CreatePlaylistData, PatchField, PatchPlaylistData, PlaylistRepository,
    PlaylistRepositoryError, PlaylistResult,
};
pub use rating_query::{RatingQuery, RatingQueryError, RatingSummary};
