// SPDX-License-Identifier: MPL-2.0
//! Gallery filter selection.

use crate::catalog::{Catalog, CategoryId, WorkItem};
use std::fmt;

/// Key selecting every category.
pub const ALL_KEY: &str = "all";

/// Which part of the catalog is shown and navigable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// The whole catalog, flattened.
    #[default]
    All,
    /// A single category.
    Category(CategoryId),
    /// A key that names no known category. Selects nothing.
    Unrecognized(String),
}

impl Filter {
    /// Parses a filter key. Never fails: unknown keys are kept as
    /// [`Filter::Unrecognized`] and resolve to an empty list.
    #[must_use]
    pub fn parse(key: &str) -> Self {
        if key == ALL_KEY {
            return Self::All;
        }
        match CategoryId::from_key(key) {
            Some(category) => Self::Category(category),
            None => Self::Unrecognized(key.to_string()),
        }
    }

    /// The filters offered by the filter bar, in display order.
    pub fn choices() -> impl Iterator<Item = Filter> {
        std::iter::once(Self::All).chain(CategoryId::ALL.into_iter().map(Self::Category))
    }

    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::All => ALL_KEY,
            Self::Category(category) => category.key(),
            Self::Unrecognized(key) => key,
        }
    }

    /// Fluent message id of the filter button label.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::All => "filter-all",
            Self::Category(category) => category.i18n_key(),
            Self::Unrecognized(_) => "filter-unknown",
        }
    }

    /// Resolves the filter against a catalog, preserving catalog order.
    #[must_use]
    pub fn select<'a>(&self, catalog: &'a Catalog) -> Vec<&'a WorkItem> {
        match self {
            Self::All => catalog.flatten(),
            Self::Category(category) => catalog.items(*category).iter().collect(),
            Self::Unrecognized(key) => catalog.items_for(key).iter().collect(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<CategoryId> for Filter {
    fn from(category: CategoryId) -> Self {
        Self::Category(category)
    }
}
