use std::fmt;
use serde::Serialize;

// @module: Static media binding, curated per section and project

/// Identity of a page section or a named project sub-section
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum SectionKind {
    Home,
    About,
    Projects,
    Contact,
    /// A project sub-section, keyed by its heading title
    Project(String),
}

impl SectionKind {
    // @returns: Anchor/lookup name, case preserved for project titles
    pub fn name(&self) -> &str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::Project(name) => name,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Presentation variant for a bound media item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MediaKind {
    /// Static image shown in a carousel
    Image,
    /// Embeddable audio playlist player
    AudioPlaylist,
}

// @struct: One curated media descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaItem {
    // @field: Image or embed URL, not validated for reachability
    pub source_uri: String,

    // @field: Caption and accessibility text
    pub alt_text: String,

    // @field: Presentation variant selector
    pub kind: MediaKind,
}

impl MediaItem {
    /// Shorthand for an image descriptor
    pub fn image(source_uri: &str, alt_text: &str) -> Self {
        MediaItem {
            source_uri: source_uri.to_string(),
            alt_text: alt_text.to_string(),
            kind: MediaKind::Image,
        }
    }

    /// Shorthand for an embeddable playlist descriptor
    pub fn playlist(source_uri: &str, alt_text: &str) -> Self {
        MediaItem {
            source_uri: source_uri.to_string(),
            alt_text: alt_text.to_string(),
            kind: MediaKind::AudioPlaylist,
        }
    }
}

/// Binding table from section identity to its curated media, in display order
#[derive(Debug, Clone)]
pub struct MediaLibrary {
    bindings: Vec<(SectionKind, Vec<MediaItem>)>,
}

impl MediaLibrary {
    /// Build a library from explicit bindings, mainly for tests
    pub fn new(bindings: Vec<(SectionKind, Vec<MediaItem>)>) -> Self {
        MediaLibrary { bindings }
    }

    /// An empty library: every lookup yields no media
    pub fn empty() -> Self {
        MediaLibrary { bindings: Vec::new() }
    }

    // @binds: Media for a section, exact match, declaration order preserved
    // @returns: Empty slice for unknown sections, never an error
    pub fn bind(&self, kind: &SectionKind) -> &[MediaItem] {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == kind)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for MediaLibrary {
    // The curated tables shipped with the site
    fn default() -> Self {
        MediaLibrary::new(vec![
            (
                SectionKind::Home,
                vec![
                    MediaItem::image("https://f9y2nv7uff.ufs.sh/f/nkgLo6uKBuNjv03EyzDDZg0mYBiM43271b8AJcFG6wTV5saW", "Chester"),
                    MediaItem::image("https://f9y2nv7uff.ufs.sh/f/nkgLo6uKBuNjunwSWmI0cIjg3BZdiJowSTfR8rl9WGL6m2b1", "Latte Art 2024"),
                    MediaItem::image("https://f9y2nv7uff.ufs.sh/f/nkgLo6uKBuNje9lc5UffMjBseuvGIUcb9FWdHmpONYkoZEKr", "Latte Art 2024 2"),
                    MediaItem::image("https://f9y2nv7uff.ufs.sh/f/nkgLo6uKBuNjsU4pIOn345OyM2j0kCJQ6lcYngt9VFziofvT", "Desk"),
                    MediaItem::image("https://f9y2nv7uff.ufs.sh/f/nkgLo6uKBuNjh0H571WYQRTd6qklsFrWe4cU3bC8MigLN7vA", "Bass Canyon"),
                    MediaItem::image("https://f9y2nv7uff.ufs.sh/f/nkgLo6uKBuNjyQo83uqXAD0saPGEeuYNK8LjZS4WMIm9kz1r", "Bass Canyon 2"),
                ],
            ),
            (
                SectionKind::Project("EmailEssence".to_string()),
                vec![
                    MediaItem::image("https://f9y2nv7uff.ufs.sh/f/nkgLo6uKBuNjkyi1uoTKvHl3Yc6iN4UeChxIdMXsOJLnf0tP", "EmailEssence Dashboard"),
                    MediaItem::image("https://f9y2nv7uff.ufs.sh/f/nkgLo6uKBuNjUrh23jbW6d9Ra8hBcVYTtwP0Dji5yJs7eES2", "EmailEssence Screenshot 1"),
                    MediaItem::image("https://f9y2nv7uff.ufs.sh/f/nkgLo6uKBuNjprm1QkzGEPjidDz7AUys8ev256YTLbFZocMx", "EmailEssence Screenshot 2"),
                    MediaItem::image("https://f9y2nv7uff.ufs.sh/f/nkgLo6uKBuNjsf8xZS345OyM2j0kCJQ6lcYngt9VFziofvTW", "EmailEssence Screenshot 3"),
                    MediaItem::image("https://f9y2nv7uff.ufs.sh/f/nkgLo6uKBuNjQebo5pW6CG1RlbTWjvaFQu9IyZJsp2iL36nm", "EmailEssence Screenshot 4"),
                ],
            ),
            (
                SectionKind::Project("ReverbXR".to_string()),
                vec![
                    MediaItem::image("https://f9y2nv7uff.ufs.sh/f/nkgLo6uKBuNjq4GZLzGh0pZivJbPAEcongRdQtewV6DxLfyG", "ReverbXR v2"),
                    MediaItem::image("https://f9y2nv7uff.ufs.sh/f/nkgLo6uKBuNjKGomwQLgAUnSZdIuQlaNTyHWEscxr6VpFqoB", "ReverbXR v1 Final"),
                    MediaItem::image("https://f9y2nv7uff.ufs.sh/f/nkgLo6uKBuNj8dTvhqGaSOBD9ZzAXdiosC5GunQHKYNbFJ1R", "ReverbXR v1"),
                    MediaItem::image("https://f9y2nv7uff.ufs.sh/f/nkgLo6uKBuNjWVxqg04upgRSyMNarcl0H3nB1tjEIfLoexVY", "ReverbXR 2D Prototype"),
                ],
            ),
            (
                SectionKind::Project("WhatNext".to_string()),
                vec![
                    MediaItem::playlist("https://open.spotify.com/embed/playlist/2kpswjk4hzWHQwpci2PUnc?utm_source=generator", "WhatNext Playlist 1"),
                    MediaItem::playlist("https://open.spotify.com/embed/playlist/6KgZCaJ94sVwCVZiOt1ToE?utm_source=generator", "WhatNext Playlist 2"),
                    MediaItem::playlist("https://open.spotify.com/embed/playlist/2oLS4kpcrgoA530LjNqH1V?utm_source=generator", "WhatNext Playlist 3"),
                    MediaItem::playlist("https://open.spotify.com/embed/playlist/72jl5AIRhXgX12Gbtkifw5?utm_source=generator", "WhatNext Playlist 4"),
                    MediaItem::playlist("https://open.spotify.com/embed/playlist/6FRUuTQFVtEQkECIqslQRS?utm_source=generator", "WhatNext Playlist 5"),
                    MediaItem::playlist("https://open.spotify.com/embed/playlist/2TGkrJ3ZuNWAzFiLq9z2JY?utm_source=generator", "WhatNext Playlist 6"),
                ],
            ),
        ])
    }
}
