// SPDX-License-Identifier: MPL-2.0
//! Gallery and lightbox state machine.
//!
//! The controller owns the active filter, the filtered item list and the
//! viewer state (`Closed` or `Open(index)`). Every operation runs to
//! completion and reports an [`Effect`] telling the render layer what to
//! refresh. Rejected operations return a [`GalleryError`] and leave the state
//! untouched.
//!
//! Navigation wraps in both directions, so there is no dead end at the first
//! or last image.

use super::filter::Filter;
use crate::catalog::{Catalog, WorkItem};
use crate::error::GalleryError;
use std::sync::Arc;

/// Formats the lightbox position indicator, e.g. `"3 / 18"`.
#[must_use]
pub fn format_counter(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}

/// Open/closed state of the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewer {
    #[default]
    Closed,
    Open(usize),
}

impl Viewer {
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Open(index) => Some(index),
            Self::Closed => None,
        }
    }
}

/// Commands the input adapters map keyboard, click and swipe input onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Close,
    Previous,
    Next,
}

/// What the render layer has to refresh after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Rebuild the grid with one tile per filtered item.
    RebuildGrid { count: usize },
    /// Show the item at `index` in the lightbox.
    ShowItem { index: usize, total: usize },
    /// Hide the lightbox.
    HideViewer,
}

impl Effect {
    /// Position indicator for [`Effect::ShowItem`].
    #[must_use]
    pub fn counter(&self) -> Option<String> {
        match *self {
            Self::ShowItem { index, total } => Some(format_counter(index, total)),
            _ => None,
        }
    }
}

/// Read-only view of the open lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerSnapshot<'a> {
    pub item: &'a WorkItem,
    pub index: usize,
    pub total: usize,
}

impl ViewerSnapshot<'_> {
    #[must_use]
    pub fn counter(&self) -> String {
        format_counter(self.index, self.total)
    }
}

/// Filter, filtered list and viewer position.
///
/// Invariant: when `viewer` is `Open(i)`, `filtered_items` is non-empty and
/// `i < filtered_items.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewerState {
    active_filter: Filter,
    filtered_items: Vec<WorkItem>,
    viewer: Viewer,
}

impl ViewerState {
    #[must_use]
    pub fn active_filter(&self) -> &Filter {
        &self.active_filter
    }

    #[must_use]
    pub fn filtered_items(&self) -> &[WorkItem] {
        &self.filtered_items
    }

    #[must_use]
    pub fn viewer(&self) -> Viewer {
        self.viewer
    }
}

/// Sole owner of the [`ViewerState`].
#[derive(Debug, Clone)]
pub struct GalleryController {
    catalog: Arc<Catalog>,
    state: ViewerState,
}

impl GalleryController {
    /// Creates a controller showing the whole catalog with the viewer closed.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let filtered_items = catalog.flatten().into_iter().cloned().collect();
        Self {
            catalog,
            state: ViewerState {
                active_filter: Filter::All,
                filtered_items,
                viewer: Viewer::Closed,
            },
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    #[must_use]
    pub fn active_filter(&self) -> &Filter {
        &self.state.active_filter
    }

    #[must_use]
    pub fn filtered_items(&self) -> &[WorkItem] {
        &self.state.filtered_items
    }

    #[must_use]
    pub fn viewer(&self) -> Viewer {
        self.state.viewer
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.viewer.is_open()
    }

    /// Changes the active filter and recomputes the filtered list.
    ///
    /// An open viewer stays open with its index clamped into the new list,
    /// or closes when the new list is empty.
    pub fn set_filter(&mut self, filter: Filter) -> Effect {
        let items: Vec<WorkItem> = filter
            .select(&self.catalog)
            .into_iter()
            .cloned()
            .collect();

        if let Viewer::Open(index) = self.state.viewer {
            self.state.viewer = match items.len() {
                0 => Viewer::Closed,
                len => Viewer::Open(index.min(len - 1)),
            };
        }

        let count = items.len();
        self.state.active_filter = filter;
        self.state.filtered_items = items;
        Effect::RebuildGrid { count }
    }

    /// Opens the viewer at `index` of the filtered list.
    ///
    /// # Errors
    ///
    /// Fails without touching the state if the list is empty or `index` is
    /// out of range.
    pub fn open(&mut self, index: usize) -> Result<Effect, GalleryError> {
        let len = self.state.filtered_items.len();
        if len == 0 {
            return Err(GalleryError::EmptyFilterResult);
        }
        if index >= len {
            return Err(GalleryError::InvalidIndex { index, len });
        }
        self.state.viewer = Viewer::Open(index);
        Ok(Effect::ShowItem { index, total: len })
    }

    /// Closes the viewer. Closing a closed viewer does nothing.
    pub fn close(&mut self) -> Effect {
        match self.state.viewer {
            Viewer::Open(_) => {
                self.state.viewer = Viewer::Closed;
                Effect::HideViewer
            }
            Viewer::Closed => Effect::None,
        }
    }

    /// Advances to the next item, wrapping to the first.
    ///
    /// # Errors
    ///
    /// Fails if the viewer is closed or the filtered list is empty.
    pub fn next(&mut self) -> Result<Effect, GalleryError> {
        self.step(|index, len| (index + 1) % len)
    }

    /// Goes back to the previous item, wrapping to the last.
    ///
    /// # Errors
    ///
    /// Fails if the viewer is closed or the filtered list is empty.
    pub fn prev(&mut self) -> Result<Effect, GalleryError> {
        self.step(|index, len| (index + len - 1) % len)
    }

    /// Dispatches an input command onto the matching operation.
    ///
    /// # Errors
    ///
    /// Propagates the precondition failure of `next`/`prev`.
    pub fn apply(&mut self, command: ViewerCommand) -> Result<Effect, GalleryError> {
        match command {
            ViewerCommand::Close => Ok(self.close()),
            ViewerCommand::Previous => self.prev(),
            ViewerCommand::Next => self.next(),
        }
    }

    /// The item shown by the open viewer.
    #[must_use]
    pub fn current_item(&self) -> Option<&WorkItem> {
        self.state
            .viewer
            .index()
            .and_then(|index| self.state.filtered_items.get(index))
    }

    /// Position indicator of the open viewer.
    #[must_use]
    pub fn counter(&self) -> Option<String> {
        self.snapshot().map(|snapshot| snapshot.counter())
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<ViewerSnapshot<'_>> {
        let index = self.state.viewer.index()?;
        let item = self.state.filtered_items.get(index)?;
        Some(ViewerSnapshot {
            item,
            index,
            total: self.state.filtered_items.len(),
        })
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) -> Result<Effect, GalleryError> {
        let len = self.state.filtered_items.len();
        if len == 0 {
            return Err(GalleryError::EmptyFilterResult);
        }
        let Viewer::Open(index) = self.state.viewer else {
            return Err(GalleryError::ViewerClosed);
        };
        let index = advance(index, len);
        self.state.viewer = Viewer::Open(index);
        Ok(Effect::ShowItem { index, total: len })
    }
}
