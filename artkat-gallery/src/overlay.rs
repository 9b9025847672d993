//! Detail overlay state machine and the scroll lock it owns.

use crate::catalog::CatalogItem;
use regex::Regex;

pub const PROCESS_CROP_DIR: &str = "/img/others/process/crop";
pub const PROCESS_FULL_DIR: &str = "/img/others/process/full";

/// Category given to synthesized breakdown samples.
pub const SAMPLE_CATEGORY: &str = "lineart";
pub const CHARACTER_DESIGN_CATEGORY: &str = "character_design";

/// Trailing extension of a file name, dot included.
const EXTENSION_PATTERN: &str = r"\.[^/.]+$";

/// Page-wide scroll lock. Implementations are owned by a single controller.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Releases the scroll lock when dropped.
#[must_use = "dropping the guard releases the scroll lock"]
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    pub fn acquire(lock: L) -> Self {
        lock.lock();
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        self.lock.unlock();
    }
}

/// Stage of a visual breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKind {
    Lineart,
    Flat,
    Rendered,
}

impl SampleKind {
    pub const ALL: [Self; 3] = [Self::Lineart, Self::Flat, Self::Rendered];

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Lineart => "lineart",
            Self::Flat => "flat",
            Self::Rendered => "rendered",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Lineart => "Lineart Sample",
            Self::Flat => "Flat Sample",
            Self::Rendered => "Rendered Sample",
        }
    }

    /// Hover caption in the breakdown grid.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Lineart => "Lineart",
            Self::Flat => "Flat Colors",
            Self::Rendered => "Final Render",
        }
    }
}

/// File name without directories or extension.
///
/// Best effort: a path without an extension keeps its whole file name.
#[must_use]
pub fn file_stem(path: &str) -> &str {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    Regex::new(EXTENSION_PATTERN)
        .map(|re| {
            re.find(file_name)
                .map_or(file_name, |ext| &file_name[..ext.start()])
        })
        .unwrap_or(file_name)
}

/// Cropped preview path for one stage of a breakdown image.
#[must_use]
pub fn breakdown_crop_path(base_image: &str, kind: SampleKind) -> String {
    format!("{PROCESS_CROP_DIR}/{}_{}.webp", file_stem(base_image), kind.suffix())
}

/// Full resolution counterpart of a process image.
#[must_use]
pub fn full_resolution_path(source: &str) -> String {
    format!("{PROCESS_FULL_DIR}/{}.webp", file_stem(source))
}

/// Image-only item shown when a breakdown panel is opened.
#[must_use]
pub fn derived_sample(source: &str, kind: SampleKind) -> CatalogItem {
    CatalogItem::image_only(kind.title(), full_resolution_path(source), SAMPLE_CATEGORY)
}

/// Closed/open overlay holding the inspected item.
///
/// While open the controller holds exactly one scroll-lock guard. Every way
/// out of the open state, including dropping the controller, releases it.
pub struct OverlayController<L: ScrollLock + Clone> {
    lock: L,
    selected: Option<CatalogItem>,
    guard: Option<ScrollLockGuard<L>>,
}

impl<L: ScrollLock + Clone> OverlayController<L> {
    pub const fn new(lock: L) -> Self {
        Self {
            lock,
            selected: None,
            guard: None,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&CatalogItem> {
        self.selected.as_ref()
    }

    /// Open on `item`; when already open the content is swapped in place.
    pub fn open(&mut self, item: CatalogItem) {
        if self.guard.is_none() {
            self.guard = Some(ScrollLockGuard::acquire(self.lock.clone()));
        }
        log::debug!("overlay open: {}", item.title);
        self.selected = Some(item);
    }

    pub fn open_derived(&mut self, source: &str, kind: SampleKind) {
        self.open(derived_sample(source, kind));
    }

    /// Close the overlay; a no-op when already closed.
    pub fn close(&mut self) {
        if self.selected.take().is_some() {
            log::debug!("overlay closed");
        }
        self.guard = None;
    }
}

impl<L: ScrollLock + Clone> Drop for OverlayController<L> {
    fn drop(&mut self) {
        self.close();
    }
}
