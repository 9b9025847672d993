//! artkat gallery core
//!
//! Platform-agnostic logic behind the artwork gallery: the item catalog,
//! filter resolution, address/state synchronization, the detail overlay and
//! the embedded media lifecycle. DOM side effects are reached only through the
//! [`ScrollLock`] and [`PlayerBackend`] traits.

pub mod catalog;
pub mod coordinator;
pub mod filter;
pub mod media;
pub mod overlay;
pub mod route;
pub mod view;

pub use catalog::{
    Catalog, CatalogError, CatalogItem, CharacterDesignGroup, LineartGroup, MediaEntry,
    OthersGroup, Platform,
};
pub use coordinator::{Coordinator, NavAction, PathRequest, Transition};
pub use filter::{CategoryRule, Filter, resolve};
pub use media::{
    EmbeddedPlayer, MediaError, MediaFailure, MediaLifecycle, PlayerBackend, PlayerConfig,
};
pub use overlay::{
    OverlayController, SampleKind, ScrollLock, ScrollLockGuard, breakdown_crop_path,
    derived_sample, full_resolution_path,
};
pub use route::{NavigationState, OthersTab, parse_path, path_from_state, state_from_path};
pub use view::{
    BreakdownPanel, BreakdownRow, Card, DetailInfo, DetailView, FilterButton, GalleryBody,
    GalleryView, MediaSlot, OthersContent, OthersView, TabButton,
};
