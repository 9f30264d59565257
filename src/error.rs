// SPDX-License-Identifier: MPL-2.0
use crate::catalog::CategoryId;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
}

/// Violations of the catalog invariant detected while assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An item was filed under a category other than its own.
    CategoryMismatch {
        stored_under: CategoryId,
        item_category: CategoryId,
        source: String,
    },
    /// The same category appeared in more than one group.
    DuplicateCategory(CategoryId),
}

/// Precondition failures of the gallery controller.
///
/// None of these are surfaced to the user: the rejected operation leaves the
/// viewer untouched and produces no render effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// `open` was asked for an index outside the filtered list.
    InvalidIndex { index: usize, len: usize },
    /// The filtered list is empty, so there is nothing to show.
    EmptyFilterResult,
    /// Navigation was requested while the viewer is closed.
    ViewerClosed,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::CategoryMismatch {
                stored_under,
                item_category,
                source,
            } => write!(
                f,
                "item {} belongs to {} but was stored under {}",
                source,
                item_category.key(),
                stored_under.key()
            ),
            CatalogError::DuplicateCategory(category) => {
                write!(f, "category {} declared twice", category.key())
            }
        }
    }
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::InvalidIndex { index, len } => {
                write!(f, "index {} out of range for {} items", index, len)
            }
            GalleryError::EmptyFilterResult => write!(f, "filtered list is empty"),
            GalleryError::ViewerClosed => write!(f, "viewer is closed"),
        }
    }
}

impl std::error::Error for GalleryError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_error_wraps_into_error() {
        let err: Error = CatalogError::DuplicateCategory(CategoryId::Comics).into();
        assert_eq!(
            format!("{}", err),
            "Catalog Error: category comics declared twice"
        );
    }

    #[test]
    fn category_mismatch_names_both_categories() {
        let err = CatalogError::CategoryMismatch {
            stored_under: CategoryId::Sketches,
            item_category: CategoryId::Full,
            source: "a.jpg".into(),
        };
        let message = err.to_string();
        assert!(message.contains("sketches"));
        assert!(message.contains("full"));
        assert!(message.contains("a.jpg"));
    }

    #[test]
    fn gallery_error_display() {
        let err = GalleryError::InvalidIndex { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index 5 out of range for 3 items");
        assert_eq!(
            GalleryError::EmptyFilterResult.to_string(),
            "filtered list is empty"
        );
    }
}
