// SPDX-License-Identifier: MPL-2.0
//! Gallery core: filter selection, the lightbox state machine and swipe
//! recognition.
//!
//! Nothing in here depends on the GUI toolkit. The `ui` layer translates
//! toolkit events into [`ViewerCommand`]s and renders from the controller's
//! state.

pub mod controller;
pub mod filter;
pub mod swipe;

pub use controller::{
    format_counter, Effect, GalleryController, Viewer, ViewerCommand, ViewerSnapshot, ViewerState,
};
pub use filter::Filter;
