//! Lifecycle of the embedded video players on the art-process tab.
//!
//! Players live outside the rendering tree, so they are never created by a
//! render pass. [`MediaLifecycle::sync`] is called with the active sub-tab
//! after each commit; it creates one player per entry when the owning tab
//! becomes active and destroys every player when it stops being active.

use crate::catalog::MediaEntry;
use crate::route::OthersTab;
use serde::Serialize;

/// Sub-tab whose activation owns the players.
pub const OWNING_TAB: OthersTab = OthersTab::ArtProcess;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("player library is not available")]
    Unavailable,
    #[error("mount point {0} not found")]
    MissingMount(String),
    #[error("mount point {0} is already taken by another entry")]
    DuplicateMount(String),
    #[error("player creation failed: {0}")]
    Create(String),
}

/// Options handed to the external player, serialized with its field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    /// CSS selector of the mount point.
    pub container: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    pub volume: f64,
    pub autoplay: bool,
    pub auto_size: bool,
    pub auto_mini: bool,
    pub fullscreen: bool,
    pub mini_progress_bar: bool,
    /// Starting one player pauses the others.
    pub mutex: bool,
    pub plays_inline: bool,
    pub auto_playback: bool,
    pub theme: String,
    /// Applied after creation, the player has no constructor option for it.
    #[serde(skip)]
    pub aspect_ratio: String,
}

impl PlayerConfig {
    pub const VOLUME: f64 = 0.5;
    pub const THEME: &'static str = "#4dff5c";

    #[must_use]
    pub fn for_entry(entry: &MediaEntry) -> Self {
        Self {
            container: format!("#{}", entry.mount_id()),
            url: entry.video.clone(),
            poster: entry.thumbnail.clone(),
            volume: Self::VOLUME,
            autoplay: false,
            auto_size: false,
            auto_mini: true,
            fullscreen: true,
            mini_progress_bar: true,
            mutex: true,
            plays_inline: true,
            auto_playback: true,
            theme: Self::THEME.to_string(),
            aspect_ratio: entry.aspect_ratio().to_string(),
        }
    }

    /// Mount id without the leading `#`.
    #[must_use]
    pub fn mount_id(&self) -> &str {
        self.container.trim_start_matches('#')
    }
}

/// Create/destroy hooks of the external player library.
pub trait PlayerBackend {
    type Handle;

    /// # Errors
    ///
    /// Returns an error when the player cannot be attached to its mount point.
    fn create(&mut self, config: &PlayerConfig) -> Result<Self::Handle, MediaError>;

    fn destroy(&mut self, handle: Self::Handle);
}

/// A live player, tagged with the activation that created it.
#[derive(Debug)]
pub struct EmbeddedPlayer<H> {
    pub entry_id: String,
    pub mount_id: String,
    pub generation: u64,
    pub handle: H,
}

/// Entry that could not be instantiated during the current activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFailure {
    pub entry_id: String,
    pub error: MediaError,
}

pub struct MediaLifecycle<B: PlayerBackend> {
    backend: B,
    entries: Vec<MediaEntry>,
    players: Vec<EmbeddedPlayer<B::Handle>>,
    failures: Vec<MediaFailure>,
    generation: u64,
    active: bool,
}

impl<B: PlayerBackend> MediaLifecycle<B> {
    pub const fn new(backend: B, entries: Vec<MediaEntry>) -> Self {
        Self {
            backend,
            entries,
            players: Vec::new(),
            failures: Vec::new(),
            generation: 0,
            active: false,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn players(&self) -> &[EmbeddedPlayer<B::Handle>] {
        &self.players
    }

    #[must_use]
    pub fn failures(&self) -> &[MediaFailure] {
        &self.failures
    }

    /// Activation counter; bumped each time the owning tab is entered.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Bring the players in line with the active sub-tab.
    pub fn sync(&mut self, active_tab: Option<OthersTab>) {
        if active_tab == Some(OWNING_TAB) {
            self.activate();
        } else {
            self.deactivate();
        }
    }

    /// Create one player per entry. No-op while already active.
    ///
    /// A failing entry is recorded and skipped; the others are still created.
    /// An entry whose mount point already holds a player counts as failing.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        // Any leftover from an interrupted activation goes before new mounts are touched.
        self.destroy_all();
        self.active = true;
        self.generation += 1;

        for entry in &self.entries {
            let config = PlayerConfig::for_entry(entry);
            let created = if self.players.iter().any(|p| p.mount_id == config.mount_id()) {
                Err(MediaError::DuplicateMount(config.mount_id().to_string()))
            } else {
                self.backend.create(&config)
            };
            match created {
                Ok(handle) => self.players.push(EmbeddedPlayer {
                    entry_id: entry.id.clone(),
                    mount_id: config.mount_id().to_string(),
                    generation: self.generation,
                    handle,
                }),
                Err(error) => {
                    log::warn!("media entry {} failed to start: {error}", entry.id);
                    self.failures.push(MediaFailure {
                        entry_id: entry.id.clone(),
                        error,
                    });
                }
            }
        }
        log::debug!(
            "media activation {} started {} of {} players",
            self.generation,
            self.players.len(),
            self.entries.len()
        );
    }

    /// Destroy every live player. No-op while inactive.
    pub fn deactivate(&mut self) {
        if !self.active && self.players.is_empty() {
            return;
        }
        self.destroy_all();
        self.active = false;
        log::debug!("media activation {} torn down", self.generation);
    }

    fn destroy_all(&mut self) {
        for player in self.players.drain(..) {
            self.backend.destroy(player.handle);
        }
        self.failures.clear();
    }
}

impl<B: PlayerBackend> Drop for MediaLifecycle<B> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
