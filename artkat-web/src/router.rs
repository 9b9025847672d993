use artkat_gallery::{NavigationState, parse_path, path_from_state};
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/home")]
    HomeAlias,
    #[at("/artwork")]
    Artwork,
    #[at("/artwork/all")]
    ArtworkAll,
    #[at("/artwork/personal")]
    ArtworkPersonal,
    #[at("/artwork/webtoon")]
    ArtworkWebtoon,
    #[at("/artwork/others")]
    Others,
    #[at("/artwork/others/visual-breakdown")]
    VisualBreakdown,
    #[at("/artwork/others/character-design")]
    CharacterDesign,
    #[at("/artwork/others/art-process")]
    ArtProcess,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Canonical route for a gallery state.
    #[must_use]
    pub fn from_state(state: NavigationState) -> Self {
        Self::recognize(&path_from_state(state)).unwrap_or(Self::ArtworkAll)
    }

    /// Gallery state addressed by this route; `None` for non-gallery pages.
    #[must_use]
    pub fn to_state(&self) -> Option<NavigationState> {
        parse_path(&self.to_path())
    }

    #[must_use]
    pub fn is_gallery(&self) -> bool {
        self.to_state().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_a_distinct_canonical_route() {
        let routes: Vec<Route> = NavigationState::REACHABLE
            .into_iter()
            .map(Route::from_state)
            .collect();
        for (state, route) in NavigationState::REACHABLE.into_iter().zip(&routes) {
            assert_ne!(route, &Route::NotFound);
            assert_eq!(route.to_state(), Some(state));
        }
        for (i, a) in routes.iter().enumerate() {
            assert!(!routes[i + 1..].contains(a), "duplicate route {a:?}");
        }
    }

    #[test]
    fn alias_routes_map_to_default_states() {
        assert_eq!(Route::Artwork.to_state(), Some(NavigationState::All));
        assert_eq!(
            Route::Others.to_state(),
            Some(NavigationState::Others(artkat_gallery::OthersTab::Lineart))
        );
    }

    #[test]
    fn non_gallery_routes_have_no_state() {
        for route in [Route::Home, Route::HomeAlias, Route::NotFound] {
            assert!(!route.is_gallery(), "{route:?}");
        }
    }
}
