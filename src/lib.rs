// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is an illustrated portfolio gallery built with the Iced GUI
//! framework.
//!
//! A fixed catalog of works is browsed through category filters, a wrapping
//! thumbnail grid and a modal lightbox with circular navigation. The
//! catalog and gallery controller are plain Rust and usable without the UI.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod catalog;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;

pub use app::config;
