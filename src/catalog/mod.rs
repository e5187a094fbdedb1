//! Project catalog: record type, category set, and the showcase filter.

use serde::Serialize;

/// Sentinel selector that passes the whole catalog through unfiltered.
pub const ALL_CATEGORY: &str = "All";

/// The closed set of project categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    #[serde(rename = "Web Design")]
    WebDesign,
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Mobile App")]
    MobileApp,
    Branding,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::WebDesign, Self::UiUx, Self::MobileApp, Self::Branding];

    /// Display label, also the value matched by the category filter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WebDesign => "Web Design",
            Self::UiUx => "UI/UX",
            Self::MobileApp => "Mobile App",
            Self::Branding => "Branding",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Filter button labels in display order, `"All"` first.
#[must_use]
pub fn category_labels() -> Vec<&'static str> {
    std::iter::once(ALL_CATEGORY)
        .chain(Category::ALL.iter().map(|c| c.label()))
        .collect()
}

/// One showcased project. The catalog is compiled in and never mutated;
/// ids are unique by construction.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
    /// Accent color pair for the card, kept as the original gradient name.
    pub color: &'static str,
}

/// Narrow the catalog to the selected category label.
///
/// `"All"` returns the full catalog in original order. Any other label keeps
/// exactly the records whose category label matches, preserving relative
/// order. Unknown labels yield an empty result rather than an error.
#[must_use]
pub fn filter_by_category<'a>(
    catalog: &'a [ProjectRecord],
    selected: &str,
) -> Vec<&'a ProjectRecord> {
    if selected == ALL_CATEGORY {
        return catalog.iter().collect();
    }
    catalog
        .iter()
        .filter(|project| project.category.label() == selected)
        .collect()
}
