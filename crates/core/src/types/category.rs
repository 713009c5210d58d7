//! Product categories.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Product category.
///
/// The catalog stores categories by display label (`"Cow Ghee"`), while
/// navigation links and filters refer to them by slug (`cow-ghee`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Cow Ghee")]
    CowGhee,
    #[serde(rename = "Cow Dung Crafts")]
    CowDungCrafts,
    #[serde(rename = "Organic Farming")]
    OrganicFarming,
    #[serde(rename = "Soaps")]
    Soaps,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Self; 4] = [
        Self::CowGhee,
        Self::CowDungCrafts,
        Self::OrganicFarming,
        Self::Soaps,
    ];

    /// URL slug used by category links and filters.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::CowGhee => "cow-ghee",
            Self::CowDungCrafts => "cow-dung-crafts",
            Self::OrganicFarming => "organic-farming",
            Self::Soaps => "soaps",
        }
    }

    /// Display label as stored in the catalog.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CowGhee => "Cow Ghee",
            Self::CowDungCrafts => "Cow Dung Crafts",
            Self::OrganicFarming => "Organic Farming",
            Self::Soaps => "Soaps",
        }
    }

    /// Look up a category by slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
