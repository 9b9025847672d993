use artkat_gallery::{Coordinator, NavAction, NavigationState, PathRequest};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer wrapper so the coordinator can drive a Yew `use_reducer_eq`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavStore(Coordinator);

impl NavStore {
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self(Coordinator::from_path(path))
    }

    #[must_use]
    pub const fn state(&self) -> NavigationState {
        self.0.state()
    }

    #[must_use]
    pub const fn last_push(&self) -> Option<&PathRequest> {
        self.0.last_push()
    }
}

impl Reducible for NavStore {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        if next.apply(action).is_changed() {
            Rc::new(Self(next))
        } else {
            self
        }
    }
}

#[hook]
pub fn use_nav_store(initial_path: String) -> UseReducerHandle<NavStore> {
    use_reducer_eq(move || NavStore::from_path(&initial_path))
}
