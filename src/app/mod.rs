// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the gallery screen.
//!
//! The `App` struct wires together the gallery controller, localization,
//! theme preference and the presentation-only reveal and swipe state, and
//! translates messages into controller operations.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::gallery::swipe::{SwipeThreshold, SwipeTracker};
use crate::gallery::{Filter, GalleryController};
use crate::i18n::fluent::I18n;
use crate::ui::state::RevealState;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    controller: GalleryController,
    theme_mode: ThemeMode,
    reveal: RevealState,
    swipe: SwipeTracker,
    swipe_threshold: SwipeThreshold,
    /// Directory catalog image locators are resolved against.
    assets_root: PathBuf,
    /// Warning key from loading the settings file, shown until dismissed.
    config_warning: Option<String>,
    /// Time of the last reveal tick; the grid renders against it.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("filter", self.controller.active_filter())
            .field("viewer", &self.controller.viewer())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences, builds the catalog and applies the initial filter.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let catalog = Arc::new(Catalog::build());
        let assets_root = paths::get_assets_root(config.gallery.assets_dir.as_deref());
        tracing::info!(
            items = catalog.len(),
            assets_root = %assets_root.display(),
            "gallery catalog ready"
        );

        let initial_filter = flags
            .filter
            .as_deref()
            .map(Filter::parse)
            .unwrap_or_else(|| config.gallery.filter());

        let now = Instant::now();
        let mut app = App {
            i18n,
            controller: GalleryController::new(catalog),
            theme_mode: config.general.theme_mode,
            reveal: RevealState::new(config.gallery.reveal_stagger()),
            swipe: SwipeTracker::default(),
            swipe_threshold: config.gallery.swipe_threshold(),
            assets_root,
            config_warning,
            now,
        };

        let task = update::handle_filter_selected(&mut app.update_context(), initial_filter);
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            controller: &mut self.controller,
            reveal: &mut self.reveal,
            swipe: &mut self.swipe,
            swipe_threshold: self.swipe_threshold,
            theme_mode: &mut self.theme_mode,
            now: &mut self.now,
            config_warning: &mut self.config_warning,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.controller.snapshot() {
            Some(snapshot) => format!(
                "{} ({}) - {app_name}",
                snapshot.item.title(),
                snapshot.counter()
            ),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.controller.is_open());
        let tick_sub =
            subscription::create_tick_subscription(self.reveal.is_running(Instant::now()));

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::FilterSelected(filter) => update::handle_filter_selected(&mut ctx, filter),
            Message::OpenItem(index) => update::handle_open_item(&mut ctx, index),
            Message::Lightbox(message) => update::handle_lightbox_message(&mut ctx, message),
            Message::RawEvent { event, .. } => update::handle_raw_event(&mut ctx, &event),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::DismissWarning => update::handle_dismiss_warning(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controller: &self.controller,
            reveal: &self.reveal,
            theme_mode: self.theme_mode,
            assets_root: &self.assets_root,
            config_warning: self.config_warning.as_deref(),
            now: self.now,
        })
    }
}
