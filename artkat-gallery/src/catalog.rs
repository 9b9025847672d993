use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Category tag forced onto every webtoon entry when the catalog is assembled.
pub const WEBTOON_CATEGORY: &str = "webtoon";

/// Aspect ratio used for media entries that do not declare one.
pub const DEFAULT_ASPECT_RATIO: &str = "9:16";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse {dataset} dataset: {source}")]
    Parse {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Publishing platform of a webtoon title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Originals,
    Canvas,
}

impl Platform {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Originals => "Originals",
            Self::Canvas => "Canvas",
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Originals => "platform-originals",
            Self::Canvas => "platform-canvas",
        }
    }
}

/// A single piece of work shown in the gallery grid or the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub title: String,
    /// One or more comma separated tags, e.g. `"personal, illustration"`.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub url: Option<String>,
}

impl CatalogItem {
    /// Minimal image-only item, used for synthesized detail views.
    #[must_use]
    pub fn image_only(
        title: impl Into<String>,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            image: Some(image.into()),
            poster: None,
            description: None,
            genres: Vec::new(),
            platform: None,
            url: None,
        }
    }

    /// Poster wins over image, matching how webtoon entries are displayed.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.poster.as_deref().or(self.image.as_deref())
    }

    /// Category tags split on commas, trimmed, empty fragments dropped.
    pub fn category_tags(&self) -> impl Iterator<Item = &str> {
        self.category
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }

    #[must_use]
    pub fn is_webtoon(&self) -> bool {
        self.category == WEBTOON_CATEGORY
    }
}

/// One embedded video in the "art process" sub-collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEntry {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub video: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, rename = "aspectRatio", alias = "aspect_ratio")]
    pub aspect_ratio: Option<String>,
}

impl MediaEntry {
    #[must_use]
    pub fn aspect_ratio(&self) -> &str {
        self.aspect_ratio.as_deref().unwrap_or(DEFAULT_ASPECT_RATIO)
    }

    /// DOM id of the node the player attaches to.
    #[must_use]
    pub fn mount_id(&self) -> String {
        format!("art-player-{}", self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineartGroup {
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDesignGroup {
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

/// Secondary dataset rendered under the "others" filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OthersGroup {
    #[serde(default)]
    pub lineart: LineartGroup,
    #[serde(default)]
    pub character_design: CharacterDesignGroup,
    #[serde(skip)]
    pub art_process: Vec<MediaEntry>,
}

impl OthersGroup {
    /// Parse the `others` dataset and attach the media entries of the art-process tab.
    ///
    /// # Errors
    ///
    /// Returns an error if either JSON document is malformed.
    pub fn from_json(others_json: &str, video_json: &str) -> Result<Self, CatalogError> {
        let mut group: Self =
            serde_json::from_str(others_json).map_err(|source| CatalogError::Parse {
                dataset: "others",
                source,
            })?;
        group.art_process =
            serde_json::from_str(video_json).map_err(|source| CatalogError::Parse {
                dataset: "video",
                source,
            })?;
        Ok(group)
    }
}

/// Read-only collection of gallery items in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        let catalog = Self { items };
        for title in catalog.duplicate_titles() {
            log::warn!("catalog title {title:?} is not unique");
        }
        catalog
    }

    /// Build the catalog from the personal and webtoon datasets.
    ///
    /// Personal entries come first, webtoon entries follow with their category
    /// forced to `webtoon`.
    ///
    /// # Errors
    ///
    /// Returns an error if either JSON document is malformed.
    pub fn from_json(personal_json: &str, webtoon_json: &str) -> Result<Self, CatalogError> {
        let personal: Vec<CatalogItem> =
            serde_json::from_str(personal_json).map_err(|source| CatalogError::Parse {
                dataset: "personal",
                source,
            })?;
        let webtoon: Vec<CatalogItem> =
            serde_json::from_str(webtoon_json).map_err(|source| CatalogError::Parse {
                dataset: "webtoon",
                source,
            })?;

        let items = personal
            .into_iter()
            .chain(webtoon.into_iter().map(|item| CatalogItem {
                category: WEBTOON_CATEGORY.to_string(),
                ..item
            }))
            .collect();
        Ok(Self::from_items(items))
    }

    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn find(&self, title: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.title == title)
    }

    fn duplicate_titles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.title.as_str())
            .filter(|title| !seen.insert(*title))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERSONAL: &str = r#"[
        {"title": "Moonlit", "category": "personal, illustration", "image": "/img/personal/moonlit.webp"},
        {"title": "Harbor", "category": "personal", "image": "/img/personal/harbor.webp", "url": "https://example.com/harbor"}
    ]"#;

    const WEBTOON: &str = r#"[
        {"title": "Ashen Crown", "poster": "/img/webtoon/ashen.webp", "platform": "originals",
         "genres": ["Fantasy", "Action"], "url": "https://www.webtoons.com/en/fantasy/ashen-crown"}
    ]"#;

    #[test]
    fn catalog_keeps_personal_first_and_forces_webtoon_category() {
        let catalog = Catalog::from_json(PERSONAL, WEBTOON).unwrap();
        let titles: Vec<_> = catalog.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Moonlit", "Harbor", "Ashen Crown"]);

        let webtoon = catalog.find("Ashen Crown").unwrap();
        assert_eq!(webtoon.category, WEBTOON_CATEGORY);
        assert!(webtoon.is_webtoon());
        assert_eq!(webtoon.platform, Some(Platform::Originals));
        assert_eq!(webtoon.genres, vec!["Fantasy", "Action"]);
    }

    #[test]
    fn malformed_dataset_reports_its_name() {
        let err = Catalog::from_json("{", WEBTOON).unwrap_err();
        assert!(err.to_string().contains("personal"), "{err}");

        let err = Catalog::from_json(PERSONAL, "[{}]").unwrap_err();
        assert!(err.to_string().contains("webtoon"), "{err}");
    }

    #[test]
    fn category_tags_split_and_trim() {
        let item = CatalogItem::image_only("x", "/x.webp", " personal ,illustration,, ");
        let tags: Vec<_> = item.category_tags().collect();
        assert_eq!(tags, ["personal", "illustration"]);
    }

    #[test]
    fn primary_image_prefers_poster() {
        let mut item = CatalogItem::image_only("x", "/image.webp", "personal");
        assert_eq!(item.primary_image(), Some("/image.webp"));
        item.poster = Some("/poster.webp".into());
        assert_eq!(item.primary_image(), Some("/poster.webp"));
    }

    #[test]
    fn others_group_attaches_media_entries() {
        let others = r#"{
            "lineart": {"images": ["/img/others/lineart/fox.webp"]},
            "character_design": {"items": [{"title": "Sheet A", "image": "/img/others/cd/a.webp"}]}
        }"#;
        let video = r#"[
            {"id": "one", "video": "/video/one.mp4", "thumbnail": "/video/one.webp"},
            {"id": "two", "video": "/video/two.mp4", "aspectRatio": "16:9"}
        ]"#;
        let group = OthersGroup::from_json(others, video).unwrap();
        assert_eq!(group.lineart.images.len(), 1);
        assert_eq!(group.character_design.items[0].title, "Sheet A");
        assert_eq!(group.art_process.len(), 2);
        assert_eq!(group.art_process[0].aspect_ratio(), DEFAULT_ASPECT_RATIO);
        assert_eq!(group.art_process[1].aspect_ratio(), "16:9");
        assert_eq!(group.art_process[1].mount_id(), "art-player-two");
    }

    #[test]
    fn duplicate_titles_are_detected() {
        let catalog = Catalog::from_items(vec![
            CatalogItem::image_only("Same", "/a.webp", "personal"),
            CatalogItem::image_only("Same", "/b.webp", "personal"),
            CatalogItem::image_only("Other", "/c.webp", "personal"),
        ]);
        assert_eq!(catalog.duplicate_titles(), vec!["Same"]);
        assert_eq!(catalog.len(), 3);
    }
}
