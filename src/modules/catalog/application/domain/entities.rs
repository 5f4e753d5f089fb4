use chrono::{DateTime, Utc};

//
// ──────────────────────────────────────────────────────────
// Publish state
// ──────────────────────────────────────────────────────────
// Two states only. The stored column keeps the 2-char code.
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishState {
    Draft,
    Publish,
}

impl PublishState {
    pub const fn code(self) -> &'static str {
        match self {
            PublishState::Draft => "DR",
            PublishState::Publish => "PU",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "DR" => Some(PublishState::Draft),
            "PU" => Some(PublishState::Publish),
            _ => None,
        }
    }
}

impl Default for PublishState {
    fn default() -> Self {
        PublishState::Draft
    }
}

//
// ──────────────────────────────────────────────────────────
// Playlist kind
// ──────────────────────────────────────────────────────────
// One storage shape, four user-facing collections. The kind
// column is the discriminant; structural predicates (parent
// null / not null) come on top of it in the query layer.
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistKind {
    Movie,
    Show,
    Season,
    Playlist,
}

impl PlaylistKind {
    pub const fn code(self) -> &'static str {
        match self {
            PlaylistKind::Movie => "MOV",
            PlaylistKind::Show => "TVS",
            PlaylistKind::Season => "SEA",
            PlaylistKind::Playlist => "PLY",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MOV" => Some(PlaylistKind::Movie),
            "TVS" => Some(PlaylistKind::Show),
            "SEA" => Some(PlaylistKind::Season),
            "PLY" => Some(PlaylistKind::Playlist),
            _ => None,
        }
    }
}

impl Default for PlaylistKind {
    fn default() -> Self {
        PlaylistKind::Playlist
    }
}

/// Target kind of a generic annotation (tag or rating).
///
/// Annotations reference `(content_kind, object_id)` instead of a real
/// foreign key, so one ratings table serves playlists and videos alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Playlist,
    Video,
}

impl ContentKind {
    pub const fn code(self) -> &'static str {
        match self {
            ContentKind::Playlist => "playlist",
            ContentKind::Video => "video",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "playlist" => Some(ContentKind::Playlist),
            "video" => Some(ContentKind::Video),
            _ => None,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Write-path normalization
// ──────────────────────────────────────────────────────────
// Every create/patch goes through these two rules, whatever
// kind of row is being written. Centralizing them here keeps
// the invariants independent of which typed path produced
// the write.
//

/// URL-safe slug from a display title: ASCII alphanumerics lowercased,
/// everything else collapsed into single hyphens.
pub fn slugify(title: &str) -> String {
    let mapped: String = title
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    let mut slug = String::with_capacity(mapped.len());
    let mut prev_dash = false;
    for ch in mapped.chars() {
        if ch == '-' {
            if !prev_dash {
                slug.push('-');
            }
            prev_dash = true;
        } else {
            slug.push(ch);
            prev_dash = false;
        }
    }

    slug.trim_matches('-').to_string()
}

/// Slug to persist: a caller-provided slug wins (normalized to lowercase,
/// never overwritten), otherwise one is derived from the title.
pub fn resolve_slug(slug: Option<&str>, title: &str) -> Option<String> {
    match slug {
        Some(s) if !s.trim().is_empty() => Some(s.trim().to_lowercase()),
        _ => {
            let derived = slugify(title);
            if derived.is_empty() {
                None
            } else {
                Some(derived)
            }
        }
    }
}

/// First-publish stamping. Entering `Publish` with no stored stamp sets one;
/// an existing stamp is kept as-is. There is no clearing transition: the
/// stamp is a historical record of the first publish.
pub fn publish_stamp(
    state: PublishState,
    existing: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (state, existing) {
        (PublishState::Publish, None) => Some(now),
        (_, existing) => existing,
    }
}
