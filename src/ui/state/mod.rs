// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Presentation-only state kept out of the gallery controller.

pub mod reveal;

pub use reveal::RevealState;
