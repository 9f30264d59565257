// SPDX-License-Identifier: MPL-2.0
//! Static catalog of portfolio works grouped by category.
//!
//! The catalog is a total mapping: every [`CategoryId`] has a (possibly empty)
//! ordered list of [`WorkItem`]s, and every item is stored under its own
//! category. It is built once at startup from the embedded definitions in
//! [`artworks`] and never mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use iced_folio::catalog::{Catalog, CategoryId};
//!
//! let catalog = Catalog::build();
//! assert_eq!(catalog.items(CategoryId::Characters).len(), 18);
//! assert_eq!(catalog.flatten().len(), catalog.len());
//! assert!(catalog.items_for("paintings").is_empty());
//! ```

mod artworks;

use crate::error::CatalogError;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Category
// =============================================================================

/// Closed set of gallery categories, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryId {
    Full,
    Characters,
    Comics,
    Sketches,
}

impl CategoryId {
    /// Every category in declaration order.
    pub const ALL: [CategoryId; 4] = [
        CategoryId::Full,
        CategoryId::Characters,
        CategoryId::Comics,
        CategoryId::Sketches,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable string key, as used in config files and on the command line.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            CategoryId::Full => "full",
            CategoryId::Characters => "characters",
            CategoryId::Comics => "comics",
            CategoryId::Sketches => "sketches",
        }
    }

    /// Looks up a category by its string key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    /// Fluent message id of the category label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            CategoryId::Full => "category-full",
            CategoryId::Characters => "category-characters",
            CategoryId::Comics => "category-comics",
            CategoryId::Sketches => "category-sketches",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CategoryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("unknown category: {}", s))
    }
}

// =============================================================================
// Work Item
// =============================================================================

/// A single displayable work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    source: String,
    title: String,
    category: CategoryId,
}

impl WorkItem {
    #[must_use]
    pub fn new(source: impl Into<String>, title: impl Into<String>, category: CategoryId) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
            category,
        }
    }

    /// Image locator, relative to the assets root.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Display label. Not guaranteed to be ASCII.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn category(&self) -> CategoryId {
        self.category
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable mapping from every category to its ordered works.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    groups: [Vec<WorkItem>; CategoryId::COUNT],
}

impl Catalog {
    /// Builds the catalog from the embedded artwork definitions.
    #[must_use]
    pub fn build() -> Self {
        let mut groups: [Vec<WorkItem>; CategoryId::COUNT] = Default::default();
        for category in CategoryId::ALL {
            groups[category.slot()] = artworks::items(category);
        }
        Self { groups }
    }

    /// Assembles a catalog from explicit groups.
    ///
    /// Categories that are not mentioned map to an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if an item is filed under a foreign category or if a
    /// category appears twice.
    pub fn from_groups<I>(groups: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (CategoryId, Vec<WorkItem>)>,
    {
        let mut slots: [Option<Vec<WorkItem>>; CategoryId::COUNT] = Default::default();

        for (category, items) in groups {
            if let Some(stray) = items.iter().find(|item| item.category != category) {
                return Err(CatalogError::CategoryMismatch {
                    stored_under: category,
                    item_category: stray.category,
                    source: stray.source.clone(),
                });
            }
            let slot = &mut slots[category.slot()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateCategory(category));
            }
            *slot = Some(items);
        }

        Ok(Self {
            groups: slots.map(Option::unwrap_or_default),
        })
    }

    /// Items of one category, in declaration order.
    #[must_use]
    pub fn items(&self, category: CategoryId) -> &[WorkItem] {
        &self.groups[category.slot()]
    }

    /// Items for a category given by string key.
    ///
    /// Unrecognized keys yield an empty slice rather than an error, so legacy
    /// or mistyped filter keys simply show nothing.
    #[must_use]
    pub fn items_for(&self, key: &str) -> &[WorkItem] {
        match CategoryId::from_key(key) {
            Some(category) => self.items(category),
            None => &[],
        }
    }

    /// All items: categories in declaration order, items in declaration
    /// order within each category.
    #[must_use]
    pub fn flatten(&self) -> Vec<&WorkItem> {
        self.groups.iter().flatten().collect()
    }

    /// Number of items in one category.
    #[must_use]
    pub fn category_len(&self, category: CategoryId) -> usize {
        self.items(category).len()
    }

    /// Total number of items across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
