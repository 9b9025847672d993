//! Top-level gallery filters and the category rules that back them.

use crate::catalog::{Catalog, CatalogItem};

/// Top-level filter shown in the gallery's button row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Personal,
    Webtoon,
    Others,
}

/// How a filter selects catalog items by their category string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryRule {
    Everything,
    /// Rendered through the others-group path instead of the catalog.
    Nothing,
    /// Substring test, so multi-tag items such as `"personal, illustration"` match.
    Contains(&'static str),
    Exact(&'static str),
}

impl CategoryRule {
    #[must_use]
    pub fn matches(self, item: &CatalogItem) -> bool {
        match self {
            Self::Everything => true,
            Self::Nothing => false,
            Self::Contains(tag) => item.category.contains(tag),
            Self::Exact(tag) => item.category == tag,
        }
    }
}

impl Filter {
    pub const ALL: [Self; 4] = [Self::All, Self::Personal, Self::Webtoon, Self::Others];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Personal => "personal",
            Self::Webtoon => "webtoon",
            Self::Others => "others",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|filter| filter.slug() == slug)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Personal => "Personal",
            Self::Webtoon => "Webtoon",
            Self::Others => "Others",
        }
    }

    /// Personal is a substring test while every other tag is an exact match.
    /// The asymmetry is kept on purpose; multi-tag items are only ever personal.
    #[must_use]
    pub const fn rule(self) -> CategoryRule {
        match self {
            Self::All => CategoryRule::Everything,
            Self::Others => CategoryRule::Nothing,
            Self::Personal => CategoryRule::Contains("personal"),
            Self::Webtoon => CategoryRule::Exact("webtoon"),
        }
    }

    /// Short description of what the filter lists.
    #[must_use]
    pub const fn caption(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Personal => Some("List of personal art illustrations."),
            Self::Webtoon => Some(
                "List of webtoon titles where I contributed as an assistant artist.",
            ),
            Self::Others => Some("Collection of linearts and character design sheets"),
        }
    }

    /// Whether the grid shows the caption line above the items.
    #[must_use]
    pub const fn shows_caption(self) -> bool {
        !matches!(self, Self::All | Self::Others)
    }
}

/// Visible subset of the catalog for `filter`, in catalog order.
#[must_use]
pub fn resolve(catalog: &Catalog, filter: Filter) -> Vec<&CatalogItem> {
    let rule = filter.rule();
    catalog
        .items()
        .iter()
        .filter(|item| rule.matches(item))
        .collect()
}
