// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::Filter;
use crate::ui::{lightbox, navbar};
use iced::{window, Event};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    /// A filter button was pressed.
    FilterSelected(Filter),
    /// A grid tile was pressed; carries its position in the filtered list.
    OpenItem(usize),
    /// A lightbox control was pressed or the backdrop released.
    Lightbox(lightbox::Message),
    /// Uncaptured window event (keyboard, touch).
    RawEvent {
        window: window::Id,
        event: Event,
    },
    Tick(Instant), // Periodic tick for the grid reveal
    /// Hide the config load warning banner.
    DismissWarning,
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP 47 format (e.g. `ru`).
    pub lang: Option<String>,
    /// Optional initial filter key, overriding `gallery.default_filter`.
    pub filter: Option<String>,
}
