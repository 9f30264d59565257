// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `ViewContext` and a `view` function, and the application maps
//! their messages into its own.
//!
//! # Components
//!
//! - [`navbar`] - Title and theme toggle
//! - [`filter_bar`] - Category filter buttons
//! - [`gallery_grid`] - Wrapping thumbnail grid with staggered reveal
//! - [`lightbox`] - Modal viewer and its keyboard/touch bindings
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Presentation-only state (reveal animation)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod filter_bar;
pub mod gallery_grid;
pub mod lightbox;
pub mod navbar;
pub mod state;
pub mod styles;
pub mod theming;
