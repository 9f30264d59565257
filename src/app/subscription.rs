// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard and touch events are only routed while the lightbox is open;
//! the reveal tick only runs while tiles are still fading in.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval between reveal animation frames.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Routes uncaptured keyboard and touch events while the viewer is open.
pub fn create_event_subscription(viewer_open: bool) -> Subscription<Message> {
    if !viewer_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, window_id| {
        if !matches!(event, event::Event::Keyboard(..) | event::Event::Touch(..)) {
            return None;
        }

        match status {
            event::Status::Ignored => Some(Message::RawEvent {
                window: window_id,
                event: event.clone(),
            }),
            // A lift captured by a button still has to end the swipe.
            event::Status::Captured if matches!(event, event::Event::Touch(..)) => {
                Some(Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                })
            }
            event::Status::Captured => None,
        }
    })
}

/// Creates a periodic tick subscription while the grid reveal is running.
pub fn create_tick_subscription(reveal_running: bool) -> Subscription<Message> {
    if reveal_running {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
