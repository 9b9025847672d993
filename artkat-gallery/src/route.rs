//! Mapping between gallery navigation state and address paths.
//!
//! `path_from_state` and `state_from_path` form a round-trip pair: every
//! reachable state maps to one canonical path which parses back to the same
//! state. Alias paths (`/artwork`, `/artwork/others`) parse to a state but are
//! never produced.

use crate::filter::Filter;

pub const ARTWORK_ROOT: &str = "/artwork";

/// Sub-collections of the "others" filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OthersTab {
    #[default]
    Lineart,
    CharacterDesign,
    ArtProcess,
}

impl OthersTab {
    pub const ALL: [Self; 3] = [Self::Lineart, Self::CharacterDesign, Self::ArtProcess];

    /// Path segment under `/artwork/others/`.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Lineart => "visual-breakdown",
            Self::CharacterDesign => "character-design",
            Self::ArtProcess => "art-process",
        }
    }

    /// Identifier used by the datasets and css classes.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Lineart => "lineart",
            Self::CharacterDesign => "character_design",
            Self::ArtProcess => "art_process",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lineart => "Visual Breakdown",
            Self::CharacterDesign => "Character Design",
            Self::ArtProcess => "Art Process",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.segment() == segment)
    }
}

/// Authoritative gallery navigation state.
///
/// The sub-tab only exists while the `others` filter is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NavigationState {
    #[default]
    All,
    Personal,
    Webtoon,
    Others(OthersTab),
}

impl NavigationState {
    /// Every reachable state, in button order.
    pub const REACHABLE: [Self; 6] = [
        Self::All,
        Self::Personal,
        Self::Webtoon,
        Self::Others(OthersTab::Lineart),
        Self::Others(OthersTab::CharacterDesign),
        Self::Others(OthersTab::ArtProcess),
    ];

    /// State for a bare filter selection; `others` starts on its default tab.
    #[must_use]
    pub const fn from_filter(filter: Filter) -> Self {
        match filter {
            Filter::All => Self::All,
            Filter::Personal => Self::Personal,
            Filter::Webtoon => Self::Webtoon,
            Filter::Others => Self::Others(OthersTab::Lineart),
        }
    }

    #[must_use]
    pub const fn filter(self) -> Filter {
        match self {
            Self::All => Filter::All,
            Self::Personal => Filter::Personal,
            Self::Webtoon => Filter::Webtoon,
            Self::Others(_) => Filter::Others,
        }
    }

    #[must_use]
    pub const fn sub_tab(self) -> Option<OthersTab> {
        match self {
            Self::Others(tab) => Some(tab),
            _ => None,
        }
    }
}

/// Canonical address for `state`.
#[must_use]
pub fn path_from_state(state: NavigationState) -> String {
    match state {
        NavigationState::Others(tab) => format!("{ARTWORK_ROOT}/others/{}", tab.segment()),
        other => format!("{ARTWORK_ROOT}/{}", other.filter().slug()),
    }
}

/// Parse an address into a navigation state; `None` when the path is not a gallery path.
///
/// Query strings, fragments and trailing slashes are ignored.
#[must_use]
pub fn parse_path(path: &str) -> Option<NavigationState> {
    let path = normalize(path);
    let rest = path.strip_prefix(ARTWORK_ROOT)?;
    if !(rest.is_empty() || rest.starts_with('/')) {
        return None;
    }
    let mut segments = rest.split('/').filter(|segment| !segment.is_empty());

    let state = match (segments.next(), segments.next()) {
        (None, _) => NavigationState::All,
        (Some("others"), None) => NavigationState::Others(OthersTab::default()),
        (Some("others"), Some(segment)) => NavigationState::Others(OthersTab::from_segment(segment)?),
        (Some(slug), None) => NavigationState::from_filter(Filter::from_slug(slug)?),
        (Some(_), Some(_)) => return None,
    };

    segments.next().is_none().then_some(state)
}

/// Parse an address, falling back to the default view for anything unrecognised.
#[must_use]
pub fn state_from_path(path: &str) -> NavigationState {
    parse_path(path).unwrap_or_else(|| {
        log::debug!("unrecognised gallery path {path:?}, using default view");
        NavigationState::default()
    })
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
