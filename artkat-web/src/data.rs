//! Bundled gallery datasets, parsed once per session.

use anyhow::Context;
use artkat_gallery::{Catalog, OthersGroup};
use once_cell::sync::Lazy;

const PERSONAL_JSON: &str = include_str!("../static/data/personal.json");
const WEBTOON_JSON: &str = include_str!("../static/data/webtoon.json");
const OTHERS_JSON: &str = include_str!("../static/data/others.json");
const VIDEO_JSON: &str = include_str!("../static/data/video.json");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Datasets {
    pub catalog: Catalog,
    pub others: OthersGroup,
}

static DATASETS: Lazy<Datasets> = Lazy::new(|| {
    load_bundled().unwrap_or_else(|err| {
        log::error!("gallery datasets unavailable: {err:#}");
        Datasets::default()
    })
});

/// Parse the bundled JSON datasets.
///
/// # Errors
///
/// Returns an error naming the dataset that failed to parse.
pub fn load_bundled() -> anyhow::Result<Datasets> {
    load_from(PERSONAL_JSON, WEBTOON_JSON, OTHERS_JSON, VIDEO_JSON)
}

fn load_from(
    personal: &str,
    webtoon: &str,
    others: &str,
    video: &str,
) -> anyhow::Result<Datasets> {
    let catalog = Catalog::from_json(personal, webtoon).context("loading gallery catalog")?;
    let others =
        OthersGroup::from_json(others, video).context("loading others collections")?;
    log::debug!(
        "loaded {} catalog items, {} breakdowns, {} videos",
        catalog.len(),
        others.lineart.images.len(),
        others.art_process.len()
    );
    Ok(Datasets { catalog, others })
}

/// Session-wide datasets; empty when the bundle is malformed.
#[must_use]
pub fn datasets() -> &'static Datasets {
    &DATASETS
}
