//! Hand-rolled port mocks shared by the service tests.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{
    slugify, ContentKind, PlaylistKind, PublishState,
};
use crate::modules::catalog::application::ports::outgoing::{
    PlaylistCardView, PlaylistQuery, PlaylistQueryError, PlaylistView, RatingQuery,
    RatingQueryError, RatingSummary, VideoItemView,
};

pub fn card(title: &str) -> PlaylistCardView {
    PlaylistCardView {
        id: Uuid::new_v4(),
        title: title.to_string(),
        kind: PlaylistKind::Playlist,
        slug: Some(slugify(title)),
        description: None,
        publish_timestamp: Some(Utc::now() - Duration::hours(1)),
    }
}

pub fn view(title: &str, kind: PlaylistKind) -> PlaylistView {
    PlaylistView {
        id: Uuid::new_v4(),
        parent_id: None,
        order: 1,
        category: None,
        title: title.to_string(),
        kind,
        description: None,
        slug: Some(slugify(title)),
        featured_video_id: None,
        active: true,
        state: PublishState::Publish,
        publish_timestamp: Some(Utc::now() - Duration::hours(1)),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn video_item(title: &str, order: i32) -> VideoItemView {
    VideoItemView {
        id: Uuid::new_v4(),
        title: title.to_string(),
        video_ref: format!("ref-{}", slugify(title)),
        slug: Some(slugify(title)),
        order,
    }
}

type QueryResult<T> = Option<Result<T, PlaylistQueryError>>;

/// Configure only what the test under scrutiny touches; everything else
/// panics loudly.
#[derive(Default)]
pub struct MockPlaylistQuery {
    movies: QueryResult<Vec<PlaylistCardView>>,
    shows: QueryResult<Vec<PlaylistCardView>>,
    seasons: QueryResult<Vec<PlaylistCardView>>,
    featured: QueryResult<Vec<PlaylistCardView>>,
    by_slug: QueryResult<PlaylistView>,
    expected_kind: Option<Option<PlaylistKind>>,
    season: QueryResult<PlaylistView>,
    season_count: QueryResult<u64>,
    videos: QueryResult<Vec<VideoItemView>>,
}

impl MockPlaylistQuery {
    pub fn with_movies(mut self, r: Result<Vec<PlaylistCardView>, PlaylistQueryError>) -> Self {
        self.movies = Some(r);
        self
    }

    pub fn with_shows(mut self, r: Result<Vec<PlaylistCardView>, PlaylistQueryError>) -> Self {
        self.shows = Some(r);
        self
    }

    pub fn with_seasons(mut self, r: Result<Vec<PlaylistCardView>, PlaylistQueryError>) -> Self {
        self.seasons = Some(r);
        self
    }

    pub fn with_featured(mut self, r: Result<Vec<PlaylistCardView>, PlaylistQueryError>) -> Self {
        self.featured = Some(r);
        self
    }

    /// `expected_kind` is asserted against what the service actually asks
    /// for, so a service pinned to movies can't silently query everything.
    pub fn with_by_slug(
        mut self,
        expected_kind: Option<PlaylistKind>,
        r: Result<PlaylistView, PlaylistQueryError>,
    ) -> Self {
        self.expected_kind = Some(expected_kind);
        self.by_slug = Some(r);
        self
    }

    pub fn with_season(mut self, r: Result<PlaylistView, PlaylistQueryError>) -> Self {
        self.season = Some(r);
        self
    }

    pub fn with_season_count(mut self, r: Result<u64, PlaylistQueryError>) -> Self {
        self.season_count = Some(r);
        self
    }

    pub fn with_videos(mut self, r: Result<Vec<VideoItemView>, PlaylistQueryError>) -> Self {
        self.videos = Some(r);
        self
    }
}

#[async_trait]
impl PlaylistQuery for MockPlaylistQuery {
    async fn list_movies(&self) -> Result<Vec<PlaylistCardView>, PlaylistQueryError> {
        self.movies.clone().expect("list_movies not configured")
    }

    async fn list_shows(&self) -> Result<Vec<PlaylistCardView>, PlaylistQueryError> {
        self.shows.clone().expect("list_shows not configured")
    }

    async fn list_seasons(
        &self,
        _show_id: Uuid,
    ) -> Result<Vec<PlaylistCardView>, PlaylistQueryError> {
        self.seasons.clone().expect("list_seasons not configured")
    }

    async fn list_featured(&self) -> Result<Vec<PlaylistCardView>, PlaylistQueryError> {
        self.featured.clone().expect("list_featured not configured")
    }

    async fn get_published_by_slug(
        &self,
        kind: Option<PlaylistKind>,
        _slug: &str,
    ) -> Result<PlaylistView, PlaylistQueryError> {
        if let Some(expected) = self.expected_kind {
            assert_eq!(kind, expected, "service queried an unexpected kind");
        }
        self.by_slug
            .clone()
            .expect("get_published_by_slug not configured")
    }

    async fn get_season(
        &self,
        _show_slug: &str,
        _season_slug: &str,
    ) -> Result<PlaylistView, PlaylistQueryError> {
        self.season.clone().expect("get_season not configured")
    }

    async fn published_season_count(&self, _show_id: Uuid) -> Result<u64, PlaylistQueryError> {
        self.season_count
            .clone()
            .expect("published_season_count not configured")
    }

    async fn playlist_videos(
        &self,
        _playlist_id: Uuid,
    ) -> Result<Vec<VideoItemView>, PlaylistQueryError> {
        self.videos.clone().expect("playlist_videos not configured")
    }
}

pub struct MockRatingQuery {
    summary: Result<RatingSummary, RatingQueryError>,
}

impl Default for MockRatingQuery {
    fn default() -> Self {
        Self {
            summary: Ok(RatingSummary::default()),
        }
    }
}

impl MockRatingQuery {
    pub fn with_summary(mut self, r: Result<RatingSummary, RatingQueryError>) -> Self {
        self.summary = r;
        self
    }
}

#[async_trait]
impl RatingQuery for MockRatingQuery {
    async fn summary(
        &self,
        _kind: ContentKind,
        _object_id: Uuid,
    ) -> Result<RatingSummary, RatingQueryError> {
        self.summary.clone()
    }
}
