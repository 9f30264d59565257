// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler funnels into the gallery controller and then applies the
//! returned [`Effect`] to the presentation state.

use super::{persistence, Message};
use crate::error::GalleryError;
use crate::gallery::swipe::{SwipeThreshold, SwipeTracker};
use crate::gallery::{Effect, Filter, GalleryController, ViewerCommand};
use crate::ui::lightbox;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::state::RevealState;
use crate::ui::theming::ThemeMode;
use iced::{Event, Task};
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub controller: &'a mut GalleryController,
    pub reveal: &'a mut RevealState,
    pub swipe: &'a mut SwipeTracker,
    pub swipe_threshold: SwipeThreshold,
    pub theme_mode: &'a mut ThemeMode,
    pub now: &'a mut Instant,
    pub config_warning: &'a mut Option<String>,
}

/// Applies a controller effect to the presentation state.
fn apply_effect(ctx: &mut UpdateContext<'_>, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::RebuildGrid { count } => {
            let now = Instant::now();
            *ctx.now = now;
            ctx.reveal.restart(count, now);
        }
        Effect::ShowItem { .. } => {
            if let Some(counter) = effect.counter() {
                tracing::debug!(%counter, "showing item");
            }
        }
        Effect::HideViewer => ctx.swipe.cancel(),
    }
}

/// Rejected operations are expected (e.g. navigating an empty filter) and
/// never reach the user.
fn apply_result(ctx: &mut UpdateContext<'_>, result: Result<Effect, GalleryError>) {
    match result {
        Ok(effect) => apply_effect(ctx, effect),
        Err(error) => tracing::debug!(%error, "gallery operation rejected"),
    }
}

pub fn handle_filter_selected(ctx: &mut UpdateContext<'_>, filter: Filter) -> Task<Message> {
    tracing::debug!(filter = %filter, "filter selected");
    let effect = ctx.controller.set_filter(filter);
    apply_effect(ctx, effect);
    if !ctx.controller.is_open() {
        ctx.swipe.cancel();
    }
    Task::none()
}

pub fn handle_open_item(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    let result = ctx.controller.open(index);
    apply_result(ctx, result);
    Task::none()
}

pub fn handle_lightbox_command(
    ctx: &mut UpdateContext<'_>,
    command: ViewerCommand,
) -> Task<Message> {
    let result = ctx.controller.apply(command);
    apply_result(ctx, result);
    Task::none()
}

pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    match message {
        lightbox::Message::Command(command) => handle_lightbox_command(ctx, command),
        lightbox::Message::BackdropPressed => {
            ctx.swipe.press_outside_gesture();
            Task::none()
        }
        lightbox::Message::BackdropReleased => handle_backdrop_released(ctx),
    }
}

/// Closes the viewer unless the release ends a swipe.
fn handle_backdrop_released(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.swipe.absorb_release(ctx.swipe_threshold) {
        return Task::none();
    }
    handle_lightbox_command(ctx, ViewerCommand::Close)
}

/// Maps keyboard and touch input onto viewer commands while the viewer is open.
pub fn handle_raw_event(ctx: &mut UpdateContext<'_>, event: &Event) -> Task<Message> {
    if !ctx.controller.is_open() {
        ctx.swipe.cancel();
        return Task::none();
    }

    match lightbox::command_for_event(event, ctx.swipe, ctx.swipe_threshold) {
        Some(command) => handle_lightbox_command(ctx, command),
        None => Task::none(),
    }
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.now = now;
    ctx.reveal.settle(now);
    Task::none()
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, *ctx.theme_mode) {
        NavbarEvent::ThemeChanged(mode) => {
            *ctx.theme_mode = mode;
            tracing::info!(?mode, "theme changed");
            persistence::persist_theme(mode)
        }
    }
}

pub fn handle_dismiss_warning(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.config_warning = None;
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CategoryId};
    use crate::gallery::Viewer;
    use iced::{touch, Point};
    use std::sync::Arc;
    use std::time::Duration;

    struct Fixture {
        controller: GalleryController,
        reveal: RevealState,
        swipe: SwipeTracker,
        theme_mode: ThemeMode,
        now: Instant,
        config_warning: Option<String>,
    }

    impl Fixture {
        fn new() -> Self {
            let mut controller = GalleryController::new(Arc::new(Catalog::build()));
            controller.set_filter(Filter::All);
            Self {
                controller,
                reveal: RevealState::new(Duration::from_millis(60)),
                swipe: SwipeTracker::default(),
                theme_mode: ThemeMode::Dark,
                now: Instant::now(),
                config_warning: Some("notification-config-load-error".to_string()),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                controller: &mut self.controller,
                reveal: &mut self.reveal,
                swipe: &mut self.swipe,
                swipe_threshold: SwipeThreshold::default(),
                theme_mode: &mut self.theme_mode,
                now: &mut self.now,
                config_warning: &mut self.config_warning,
            }
        }
    }

    fn touch(pressed: bool, x: f32) -> Event {
        let id = touch::Finger(1);
        let position = Point::new(x, 240.0);
        Event::Touch(if pressed {
            touch::Event::FingerPressed { id, position }
        } else {
            touch::Event::FingerLifted { id, position }
        })
    }

    fn touch_moved(x: f32) -> Event {
        Event::Touch(touch::Event::FingerMoved {
            id: touch::Finger(1),
            position: Point::new(x, 240.0),
        })
    }

    fn backdrop_released(fixture: &mut Fixture) {
        let _ = handle_lightbox_message(&mut fixture.ctx(), lightbox::Message::BackdropReleased);
    }

    fn backdrop_clicked(fixture: &mut Fixture) {
        let _ = handle_lightbox_message(&mut fixture.ctx(), lightbox::Message::BackdropPressed);
        backdrop_released(fixture);
    }

    #[test]
    fn filter_selection_restarts_reveal() {
        let mut fixture = Fixture::new();
        let _ = handle_filter_selected(
            &mut fixture.ctx(),
            Filter::Category(CategoryId::Characters),
        );

        assert_eq!(fixture.controller.filtered_items().len(), 18);
        assert!(fixture.reveal.is_running(fixture.now));
    }

    #[test]
    fn open_out_of_range_is_ignored() {
        let mut fixture = Fixture::new();
        let _ = handle_open_item(&mut fixture.ctx(), 10_000);
        assert_eq!(fixture.controller.viewer(), Viewer::Closed);
    }

    #[test]
    fn lightbox_controls_wrap_around() {
        let mut fixture = Fixture::new();
        let _ = handle_open_item(&mut fixture.ctx(), 0);

        let _ = handle_lightbox_command(&mut fixture.ctx(), ViewerCommand::Previous);
        let last = fixture.controller.filtered_items().len() - 1;
        assert_eq!(fixture.controller.viewer(), Viewer::Open(last));

        let _ = handle_lightbox_command(&mut fixture.ctx(), ViewerCommand::Next);
        assert_eq!(fixture.controller.viewer(), Viewer::Open(0));
    }

    #[test]
    fn swipe_left_advances_open_viewer() {
        let mut fixture = Fixture::new();
        let _ = handle_open_item(&mut fixture.ctx(), 4);

        let _ = handle_raw_event(&mut fixture.ctx(), &touch(true, 300.0));
        let _ = handle_raw_event(&mut fixture.ctx(), &touch(false, 200.0));

        assert_eq!(fixture.controller.viewer(), Viewer::Open(5));
    }

    #[test]
    fn swipe_across_backdrop_keeps_viewer_open() {
        let mut fixture = Fixture::new();
        let _ = handle_open_item(&mut fixture.ctx(), 4);

        let _ = handle_raw_event(&mut fixture.ctx(), &touch(true, 300.0));
        let _ = handle_raw_event(&mut fixture.ctx(), &touch(false, 200.0));
        backdrop_released(&mut fixture);

        assert_eq!(fixture.controller.viewer(), Viewer::Open(5));
    }

    #[test]
    fn backdrop_release_before_lift_keeps_swipe() {
        let mut fixture = Fixture::new();
        let _ = handle_open_item(&mut fixture.ctx(), 4);

        let _ = handle_raw_event(&mut fixture.ctx(), &touch(true, 300.0));
        let _ = handle_raw_event(&mut fixture.ctx(), &touch_moved(200.0));
        backdrop_released(&mut fixture);
        let _ = handle_raw_event(&mut fixture.ctx(), &touch(false, 200.0));

        assert_eq!(fixture.controller.viewer(), Viewer::Open(5));
    }

    #[test]
    fn backdrop_tap_closes() {
        let mut fixture = Fixture::new();
        let _ = handle_open_item(&mut fixture.ctx(), 4);

        let _ = handle_raw_event(&mut fixture.ctx(), &touch(true, 300.0));
        let _ = handle_raw_event(&mut fixture.ctx(), &touch(false, 305.0));
        backdrop_released(&mut fixture);

        assert!(!fixture.controller.is_open());
    }

    #[test]
    fn backdrop_click_closes() {
        let mut fixture = Fixture::new();
        let _ = handle_open_item(&mut fixture.ctx(), 2);
        backdrop_clicked(&mut fixture);
        assert!(!fixture.controller.is_open());
    }

    #[test]
    fn backdrop_click_after_swipe_over_image_closes() {
        let mut fixture = Fixture::new();
        let _ = handle_open_item(&mut fixture.ctx(), 4);

        // The lift lands on the image, so no backdrop release follows it.
        let _ = handle_raw_event(&mut fixture.ctx(), &touch(true, 300.0));
        let _ = handle_raw_event(&mut fixture.ctx(), &touch(false, 200.0));
        assert_eq!(fixture.controller.viewer(), Viewer::Open(5));

        backdrop_clicked(&mut fixture);
        assert!(!fixture.controller.is_open());
    }

    #[test]
    fn backdrop_click_after_swipe_closes() {
        let mut fixture = Fixture::new();
        let _ = handle_open_item(&mut fixture.ctx(), 4);

        let _ = handle_raw_event(&mut fixture.ctx(), &touch(true, 300.0));
        let _ = handle_raw_event(&mut fixture.ctx(), &touch(false, 200.0));
        backdrop_released(&mut fixture);
        backdrop_released(&mut fixture);

        assert!(!fixture.controller.is_open());
    }

    #[test]
    fn touch_does_nothing_while_closed() {
        let mut fixture = Fixture::new();
        let _ = handle_raw_event(&mut fixture.ctx(), &touch(true, 300.0));
        let _ = handle_raw_event(&mut fixture.ctx(), &touch(false, 100.0));

        assert_eq!(fixture.controller.viewer(), Viewer::Closed);
        assert!(!fixture.swipe.is_tracking());
    }

    #[test]
    fn lightbox_close_control_closes() {
        let mut fixture = Fixture::new();
        let _ = handle_open_item(&mut fixture.ctx(), 3);
        let _ = handle_lightbox_command(&mut fixture.ctx(), ViewerCommand::Close);
        assert!(!fixture.controller.is_open());
    }

    #[test]
    fn navbar_toggle_flips_theme() {
        let mut fixture = Fixture::new();
        let _ = handle_navbar_message(&mut fixture.ctx(), navbar::Message::ToggleTheme);
        assert_eq!(fixture.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn tick_settles_finished_reveal() {
        let mut fixture = Fixture::new();
        let _ = handle_filter_selected(&mut fixture.ctx(), Filter::Category(CategoryId::Comics));
        let later = fixture.now + Duration::from_secs(60);

        let _ = handle_tick(&mut fixture.ctx(), later);

        assert_eq!(fixture.now, later);
        assert!(!fixture.reveal.is_running(later));
    }

    #[test]
    fn dismiss_clears_warning() {
        let mut fixture = Fixture::new();
        let _ = handle_dismiss_warning(&mut fixture.ctx());
        assert!(fixture.config_warning.is_none());
    }
}
