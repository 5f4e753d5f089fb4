//! Shared fixtures for route tests.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{
    slugify, PlaylistKind, PublishState,
};
use crate::modules::catalog::application::ports::incoming::use_cases::PlaylistDetail;
use crate::modules::catalog::application::ports::outgoing::{
    PlaylistCardView, PlaylistResult, PlaylistView, RatingSummary, VideoItemView,
};

pub fn sample_card(title: &str) -> PlaylistCardView {
    PlaylistCardView {
        id: Uuid::new_v4(),
        title: title.to_string(),
        kind: PlaylistKind::Movie,
        slug: Some(slugify(title)),
        description: None,
        publish_timestamp: Some(Utc::now() - Duration::hours(1)),
    }
}

pub fn sample_view(title: &str, kind: PlaylistKind) -> PlaylistView {
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

pub fn sample_detail(title: &str) -> PlaylistDetail {
    let playlist = sample_view(title, PlaylistKind::Playlist);
    PlaylistDetail {
        playlist,
        videos: vec![VideoItemView {
            id: Uuid::new_v4(),
            title: "Pilot".to_string(),
            video_ref: "ref-pilot".to_string(),
            slug: Some("pilot".to_string()),
            order: 1,
        }],
        rating: RatingSummary {
            average: Some(4.0),
            min: Some(3),
            max: Some(5),
        },
    }
}

pub fn sample_season_detail(title: &str) -> PlaylistDetail {
    let mut detail = sample_detail(title);
    detail.playlist.kind = PlaylistKind::Season;
    detail.playlist.parent_id = Some(Uuid::new_v4());
    detail
}

pub fn sample_result(title: &str) -> PlaylistResult {
    PlaylistResult {
        id: Uuid::new_v4(),
        parent_id: None,
        order: 1,
        category_id: None,
        title: title.to_string(),
        kind: PlaylistKind::Playlist,
        description: None,
        slug: Some(slugify(title)),
        featured_video_id: None,
        active: true,
        state: PublishState::Draft,
        publish_timestamp: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
