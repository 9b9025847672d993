//! Render-ready view models for the gallery page.
//!
//! Everything here is derived from `{navigation state, displayed items,
//! selected item}` and never feeds back into state.

use crate::catalog::{CatalogItem, MediaEntry, OthersGroup};
use crate::filter::Filter;
use crate::overlay::{CHARACTER_DESIGN_CATEGORY, SAMPLE_CATEGORY, SampleKind, breakdown_crop_path};
use crate::route::{NavigationState, OthersTab};

pub const READ_ACTION_LABEL: &str = "Read on WEBTOON";
pub const CHARACTER_DESIGN_CAPTION: &str =
    "Character design sheet from an unpublished anthology Webtoon series by NOSLEEPAREWE Studio.";
pub const ART_PROCESS_CAPTION: &str = "Timelapse and speedpaint videos showing my art process.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub filter: Filter,
    pub label: &'static str,
    pub slug: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    pub tab: OthersTab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Card {
    Webtoon {
        title: String,
        poster: Option<String>,
        description: Option<String>,
        genres: Vec<String>,
        platform_label: &'static str,
        platform_class: &'static str,
    },
    Artwork {
        title: String,
        image: Option<String>,
        description: Option<String>,
        /// First tag, used as css class and data attribute.
        primary_tag: String,
        tags_label: String,
    },
}

impl Card {
    #[must_use]
    pub fn from_item(item: &CatalogItem) -> Self {
        if item.is_webtoon() {
            let platform = item.platform.unwrap_or(crate::catalog::Platform::Canvas);
            return Self::Webtoon {
                title: item.title.clone(),
                poster: item.poster.clone(),
                description: item.description.clone(),
                genres: item.genres.clone(),
                platform_label: platform.label(),
                platform_class: platform.css_class(),
            };
        }

        let tags: Vec<&str> = item.category_tags().collect();
        Self::Artwork {
            title: item.title.clone(),
            image: item.image.clone(),
            description: item.description.clone(),
            primary_tag: tags.first().copied().unwrap_or_default().to_string(),
            tags_label: tags.join(", "),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Webtoon { title, .. } | Self::Artwork { title, .. } => title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownPanel {
    pub kind: SampleKind,
    pub crop_src: String,
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRow {
    pub base_image: String,
    pub panels: Vec<BreakdownPanel>,
}

impl BreakdownRow {
    #[must_use]
    pub fn for_image(base_image: &str) -> Self {
        Self {
            base_image: base_image.to_string(),
            panels: SampleKind::ALL
                .into_iter()
                .map(|kind| BreakdownPanel {
                    kind,
                    crop_src: breakdown_crop_path(base_image, kind),
                    caption: kind.caption(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSlot {
    pub entry_id: String,
    pub mount_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OthersContent {
    Breakdown(Vec<BreakdownRow>),
    CharacterDesign {
        caption: &'static str,
        /// Items with their category forced to `character_design`.
        items: Vec<CatalogItem>,
    },
    ArtProcess {
        caption: &'static str,
        slots: Vec<MediaSlot>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OthersView {
    pub tabs: Vec<TabButton>,
    pub content: OthersContent,
}

impl OthersView {
    #[must_use]
    pub fn assemble(others: &OthersGroup, active: OthersTab) -> Self {
        let tabs = OthersTab::ALL
            .into_iter()
            .map(|tab| TabButton {
                tab,
                label: tab.label(),
                active: tab == active,
            })
            .collect();

        let content = match active {
            OthersTab::Lineart => OthersContent::Breakdown(
                others
                    .lineart
                    .images
                    .iter()
                    .map(|image| BreakdownRow::for_image(image))
                    .collect(),
            ),
            OthersTab::CharacterDesign => OthersContent::CharacterDesign {
                caption: CHARACTER_DESIGN_CAPTION,
                items: others
                    .character_design
                    .items
                    .iter()
                    .map(|item| CatalogItem {
                        category: CHARACTER_DESIGN_CATEGORY.to_string(),
                        ..item.clone()
                    })
                    .collect(),
            },
            OthersTab::ArtProcess => OthersContent::ArtProcess {
                caption: ART_PROCESS_CAPTION,
                slots: others.art_process.iter().map(media_slot).collect(),
            },
        };

        Self { tabs, content }
    }
}

fn media_slot(entry: &MediaEntry) -> MediaSlot {
    MediaSlot {
        entry_id: entry.id.clone(),
        mount_id: entry.mount_id(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryBody {
    Grid(Vec<Card>),
    Others(OthersView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailInfo {
    pub description: Option<String>,
    pub genres: Vec<String>,
    /// Tags and platform badge, only for items that are neither webtoon nor personal.
    pub categories: Option<(Vec<String>, Option<(&'static str, &'static str)>)>,
    pub action: Option<(String, &'static str)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub image: Option<String>,
    pub image_class: &'static str,
    /// `None` for image-only samples and character sheets.
    pub info: Option<DetailInfo>,
}

impl DetailView {
    #[must_use]
    pub fn from_item(item: &CatalogItem) -> Self {
        let image_only =
            item.category == SAMPLE_CATEGORY || item.category == CHARACTER_DESIGN_CATEGORY;
        let is_webtoon = item.is_webtoon();
        let is_personal = item.category.contains("personal");

        let image_class = if image_only {
            "lineart-full-image"
        } else if is_webtoon {
            "webtoon-detail-image"
        } else {
            ""
        };

        let info = (!image_only).then(|| DetailInfo {
            description: item.description.clone().filter(|d| !d.is_empty()),
            genres: item.genres.clone(),
            categories: (!is_webtoon && !is_personal).then(|| {
                (
                    item.category_tags().map(str::to_string).collect(),
                    item.platform.map(|p| (p.label(), p.css_class())),
                )
            }),
            action: item
                .url
                .clone()
                .filter(|_| is_webtoon || is_personal)
                .map(|url| (url, READ_ACTION_LABEL)),
        });

        Self {
            title: item.title.clone(),
            image: item.primary_image().map(str::to_string),
            image_class,
            info,
        }
    }

    #[must_use]
    pub const fn is_image_only(&self) -> bool {
        self.info.is_none()
    }
}

/// Complete render model for the gallery page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub filters: Vec<FilterButton>,
    pub caption: Option<&'static str>,
    pub body: GalleryBody,
    pub detail: Option<DetailView>,
}

impl GalleryView {
    #[must_use]
    pub fn assemble(
        state: NavigationState,
        displayed: &[&CatalogItem],
        others: &OthersGroup,
        selected: Option<&CatalogItem>,
    ) -> Self {
        let active = state.filter();
        let filters = Filter::ALL
            .into_iter()
            .map(|filter| FilterButton {
                filter,
                label: filter.label(),
                slug: filter.slug(),
                active: filter == active,
            })
            .collect();

        let body = match state {
            NavigationState::Others(tab) => GalleryBody::Others(OthersView::assemble(others, tab)),
            _ => GalleryBody::Grid(displayed.iter().map(|item| Card::from_item(item)).collect()),
        };

        Self {
            filters,
            caption: active.caption().filter(|_| active.shows_caption()),
            body,
            detail: selected.map(DetailView::from_item),
        }
    }

    #[must_use]
    pub fn active_filter(&self) -> Option<Filter> {
        self.filters.iter().find(|b| b.active).map(|b| b.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CharacterDesignGroup, LineartGroup, Platform, WEBTOON_CATEGORY};
    use crate::overlay::derived_sample;

    fn webtoon(url: Option<&str>) -> CatalogItem {
        CatalogItem {
            title: "Ashen Crown".into(),
            category: WEBTOON_CATEGORY.into(),
            image: None,
            poster: Some("/img/webtoon/ashen.webp".into()),
            description: Some("A crown of ash.".into()),
            genres: vec!["Fantasy".into()],
            platform: Some(Platform::Originals),
            url: url.map(str::to_string),
        }
    }

    fn others() -> OthersGroup {
        OthersGroup {
            lineart: LineartGroup {
                images: vec!["/img/others/lineart/fox.webp".into()],
            },
            character_design: CharacterDesignGroup {
                items: vec![CatalogItem::image_only("Sheet", "/img/cd/sheet.webp", "")],
            },
            art_process: vec![MediaEntry {
                id: "speedpaint".into(),
                title: None,
                video: "/video/speedpaint.mp4".into(),
                thumbnail: None,
                aspect_ratio: None,
            }],
        }
    }

    #[test]
    fn exactly_one_filter_is_active() {
        for state in NavigationState::REACHABLE {
            let view = GalleryView::assemble(state, &[], &others(), None);
            assert_eq!(view.filters.iter().filter(|b| b.active).count(), 1);
            assert_eq!(view.active_filter(), Some(state.filter()));
        }
    }

    #[test]
    fn caption_only_for_personal_and_webtoon() {
        let view = GalleryView::assemble(NavigationState::All, &[], &others(), None);
        assert_eq!(view.caption, None);
        let view = GalleryView::assemble(
            NavigationState::Others(OthersTab::Lineart),
            &[],
            &others(),
            None,
        );
        assert_eq!(view.caption, None);
        let view = GalleryView::assemble(NavigationState::Personal, &[], &others(), None);
        assert_eq!(view.caption, Filter::Personal.caption());
    }

    #[test]
    fn grid_cards_distinguish_webtoon_and_artwork() {
        let art = CatalogItem::image_only("Moonlit", "/img/moonlit.webp", "personal, illustration");
        let toon = webtoon(None);
        let view = GalleryView::assemble(NavigationState::All, &[&art, &toon], &others(), None);
        let GalleryBody::Grid(cards) = view.body else {
            panic!("expected grid body");
        };
        assert!(matches!(
            &cards[0],
            Card::Artwork { primary_tag, tags_label, .. }
                if primary_tag == "personal" && tags_label == "personal, illustration"
        ));
        assert!(matches!(
            &cards[1],
            Card::Webtoon { platform_label: "Originals", platform_class: "platform-originals", .. }
        ));
    }

    #[test]
    fn others_body_follows_active_tab() {
        let view = GalleryView::assemble(
            NavigationState::Others(OthersTab::Lineart),
            &[],
            &others(),
            None,
        );
        let GalleryBody::Others(others_view) = view.body else {
            panic!("expected others body");
        };
        assert_eq!(others_view.tabs.iter().filter(|t| t.active).count(), 1);
        let OthersContent::Breakdown(rows) = others_view.content else {
            panic!("expected breakdown");
        };
        let crops: Vec<_> = rows[0].panels.iter().map(|p| p.crop_src.as_str()).collect();
        assert_eq!(
            crops,
            [
                "/img/others/process/crop/fox_lineart.webp",
                "/img/others/process/crop/fox_flat.webp",
                "/img/others/process/crop/fox_rendered.webp",
            ]
        );

        let view = OthersView::assemble(&others(), OthersTab::CharacterDesign);
        let OthersContent::CharacterDesign { items, .. } = view.content else {
            panic!("expected character design");
        };
        assert_eq!(items[0].category, CHARACTER_DESIGN_CATEGORY);

        let view = OthersView::assemble(&others(), OthersTab::ArtProcess);
        assert_eq!(
            view.content,
            OthersContent::ArtProcess {
                caption: ART_PROCESS_CAPTION,
                slots: vec![MediaSlot {
                    entry_id: "speedpaint".into(),
                    mount_id: "art-player-speedpaint".into(),
                }],
            }
        );
    }

    #[test]
    fn detail_for_webtoon_has_action_and_no_categories() {
        let detail = DetailView::from_item(&webtoon(Some("https://www.webtoons.com/x")));
        assert_eq!(detail.image.as_deref(), Some("/img/webtoon/ashen.webp"));
        assert_eq!(detail.image_class, "webtoon-detail-image");
        let info = detail.info.unwrap();
        assert_eq!(
            info.action,
            Some(("https://www.webtoons.com/x".to_string(), READ_ACTION_LABEL))
        );
        assert!(info.categories.is_none());
        assert_eq!(info.genres, vec!["Fantasy".to_string()]);
    }

    #[test]
    fn detail_for_samples_is_image_only() {
        let sample = derived_sample("/img/others/process/crop/fox_flat.webp", SampleKind::Flat);
        let detail = DetailView::from_item(&sample);
        assert!(detail.is_image_only());
        assert_eq!(detail.image_class, "lineart-full-image");

        let sheet = CatalogItem::image_only("Sheet", "/img/cd/sheet.webp", CHARACTER_DESIGN_CATEGORY);
        assert!(DetailView::from_item(&sheet).is_image_only());
    }

    #[test]
    fn detail_lists_categories_for_other_items() {
        let item = CatalogItem {
            url: Some("https://example.com".into()),
            ..CatalogItem::image_only("Study", "/img/study.webp", "fanart, study")
        };
        let info = DetailView::from_item(&item).info.unwrap();
        let (tags, platform) = info.categories.unwrap();
        assert_eq!(tags, ["fanart", "study"]);
        assert_eq!(platform, None);
        assert_eq!(info.action, None);
    }

    #[test]
    fn overlay_model_present_iff_selected() {
        let item = CatalogItem::image_only("Moonlit", "/img/moonlit.webp", "personal");
        assert!(GalleryView::assemble(NavigationState::All, &[], &others(), None).detail.is_none());
        let view = GalleryView::assemble(NavigationState::All, &[], &others(), Some(&item));
        assert_eq!(view.detail.map(|d| d.title), Some("Moonlit".to_string()));
    }
}
