use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::catalog::adapter::incoming::web::routes::{
    CategoryDto, PlaylistCardDto, PlaylistDetailDto, RatingSummaryDto, ShowDetailDto, VideoItemDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Streaming Catalog API",
        version = "1.0.0",
        description = "Public catalog endpoints: published movies, TV shows, seasons and curated playlists"
    ),
    paths(
        crate::modules::catalog::adapter::incoming::web::routes::list_movies::list_movies_handler,
        crate::modules::catalog::adapter::incoming::web::routes::get_movie::get_movie_handler,
        crate::modules::catalog::adapter::incoming::web::routes::list_shows::list_shows_handler,
        crate::modules::catalog::adapter::incoming::web::routes::get_show::get_show_handler,
        crate::modules::catalog::adapter::incoming::web::routes::get_show_season::get_show_season_handler,
        crate::modules::catalog::adapter::incoming::web::routes::list_featured_playlists::list_featured_playlists_handler,
        crate::modules::catalog::adapter::incoming::web::routes::get_playlist::get_playlist_handler,
    ),
    components(schemas(
        SuccessResponse<PlaylistDetailDto>,
        ErrorResponse,
        ErrorDetail,
        PlaylistCardDto,
        PlaylistDetailDto,
        ShowDetailDto,
        CategoryDto,
        VideoItemDto,
        RatingSummaryDto,
    )),
    tags(
        (name = "catalog", description = "Published catalog listings and lookups")
    )
)]
pub struct ApiDoc;
