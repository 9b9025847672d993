//! Single owner of the gallery navigation state.
//!
//! User intents and address changes are funneled through [`Coordinator::apply`].
//! A user intent that changes the state yields exactly one [`PathRequest`];
//! an address change never does, so observing our own push converges without
//! a second history entry.

use crate::filter::Filter;
use crate::route::{NavigationState, OthersTab, path_from_state, state_from_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    SelectFilter(Filter),
    SelectTab(OthersTab),
    AddressChanged(String),
}

/// Address update the host should push onto its history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRequest {
    /// Monotonic per coordinator; lets hosts push each request once.
    pub seq: u64,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    Changed {
        from: NavigationState,
        to: NavigationState,
        push: Option<PathRequest>,
    },
}

impl Transition {
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    #[must_use]
    pub const fn push(&self) -> Option<&PathRequest> {
        match self {
            Self::Changed { push, .. } => push.as_ref(),
            Self::Unchanged => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coordinator {
    state: NavigationState,
    next_seq: u64,
    last_push: Option<PathRequest>,
}

impl Coordinator {
    /// Seed from the address at load time, so the address wins over defaults.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self {
            state: state_from_path(path),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn state(&self) -> NavigationState {
        self.state
    }

    /// Most recent address request produced by a user intent.
    #[must_use]
    pub const fn last_push(&self) -> Option<&PathRequest> {
        self.last_push.as_ref()
    }

    #[must_use]
    pub fn peek(&self, action: &NavAction) -> NavigationState {
        match action {
            NavAction::SelectFilter(filter) => NavigationState::from_filter(*filter),
            NavAction::SelectTab(tab) => NavigationState::Others(*tab),
            NavAction::AddressChanged(path) => state_from_path(path),
        }
    }

    pub fn apply(&mut self, action: NavAction) -> Transition {
        let next = self.peek(&action);
        if next == self.state {
            return Transition::Unchanged;
        }

        let from = std::mem::replace(&mut self.state, next);
        let push = match action {
            NavAction::AddressChanged(_) => None,
            NavAction::SelectFilter(_) | NavAction::SelectTab(_) => {
                let request = PathRequest {
                    seq: self.next_seq,
                    path: path_from_state(next),
                };
                self.next_seq += 1;
                self.last_push = Some(request.clone());
                Some(request)
            }
        };
        log::debug!("navigation {from:?} -> {next:?}");

        Transition::Changed {
            from,
            to: next,
            push,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_intent_pushes_exactly_once_and_echo_converges() {
        let mut nav = Coordinator::from_path("/artwork/all");
        let transition = nav.apply(NavAction::SelectFilter(Filter::Webtoon));
        let push = transition.push().cloned().unwrap();
        assert_eq!(push.path, "/artwork/webtoon");
        assert_eq!(nav.state(), NavigationState::Webtoon);

        // The host observes its own push.
        let echo = nav.apply(NavAction::AddressChanged(push.path));
        assert_eq!(echo, Transition::Unchanged);
        assert_eq!(nav.last_push().map(|p| p.seq), Some(0));
    }

    #[test]
    fn reselecting_active_filter_is_a_no_op() {
        let mut nav = Coordinator::from_path("/artwork/webtoon");
        assert_eq!(
            nav.apply(NavAction::SelectFilter(Filter::Webtoon)),
            Transition::Unchanged
        );
        let mut nav = Coordinator::from_path("/artwork/others/visual-breakdown");
        assert_eq!(
            nav.apply(NavAction::SelectFilter(Filter::Others)),
            Transition::Unchanged
        );
        assert!(nav.last_push().is_none());
    }

    #[test]
    fn reselecting_others_on_another_tab_returns_to_lineart() {
        for tab in [OthersTab::CharacterDesign, OthersTab::ArtProcess] {
            let mut nav = Coordinator::from_path(&path_from_state(NavigationState::Others(tab)));
            let transition = nav.apply(NavAction::SelectFilter(Filter::Others));
            assert_eq!(
                transition.push().map(|p| p.path.as_str()),
                Some("/artwork/others/visual-breakdown")
            );
            assert_eq!(nav.state(), NavigationState::Others(OthersTab::Lineart));
            assert_eq!(nav.last_push().map(|p| p.seq), Some(0));
        }
    }

    #[test]
    fn entering_others_defaults_to_lineart() {
        let mut nav = Coordinator::default();
        let transition = nav.apply(NavAction::SelectFilter(Filter::Others));
        assert_eq!(
            transition.push().map(|p| p.path.as_str()),
            Some("/artwork/others/visual-breakdown")
        );
        assert_eq!(nav.state().sub_tab(), Some(OthersTab::Lineart));
    }

    #[test]
    fn tab_selection_from_outside_others_enters_others() {
        let mut nav = Coordinator::from_path("/artwork/personal");
        nav.apply(NavAction::SelectTab(OthersTab::CharacterDesign));
        assert_eq!(
            nav.state(),
            NavigationState::Others(OthersTab::CharacterDesign)
        );
    }

    #[test]
    fn address_changes_never_push() {
        let mut nav = Coordinator::default();
        let transition = nav.apply(NavAction::AddressChanged(
            "/artwork/others/character-design".into(),
        ));
        assert!(transition.is_changed());
        assert!(transition.push().is_none());
        assert_eq!(
            nav.state(),
            NavigationState::Others(OthersTab::CharacterDesign)
        );
    }

    #[test]
    fn unknown_address_falls_back_to_default() {
        let mut nav = Coordinator::from_path("/artwork/webtoon");
        nav.apply(NavAction::AddressChanged("/foo/bar".into()));
        assert_eq!(nav.state(), NavigationState::All);
    }

    #[test]
    fn push_sequence_is_monotonic() {
        let mut nav = Coordinator::default();
        let seqs: Vec<u64> = [
            NavAction::SelectFilter(Filter::Personal),
            NavAction::SelectFilter(Filter::Personal),
            NavAction::SelectTab(OthersTab::ArtProcess),
            NavAction::SelectTab(OthersTab::Lineart),
        ]
        .into_iter()
        .filter_map(|action| nav.apply(action).push().map(|p| p.seq))
        .collect();
        assert_eq!(seqs, [0, 1, 2]);
    }

    #[test]
    fn initial_address_takes_precedence() {
        let nav = Coordinator::from_path("/artwork/others");
        assert_eq!(nav.state(), NavigationState::Others(OthersTab::Lineart));
        assert!(nav.last_push().is_none());
    }
}
