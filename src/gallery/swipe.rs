// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe recognition for the lightbox.
//!
//! A swipe is a press/release pair whose horizontal displacement exceeds the
//! threshold. Swiping right (positive displacement) goes back, swiping left
//! goes forward.

use super::controller::ViewerCommand;
use crate::config::{DEFAULT_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD, MIN_SWIPE_THRESHOLD};

/// Minimum horizontal travel, in logical pixels, for a gesture to count as a
/// swipe.
///
/// # Example
///
/// ```
/// use iced_folio::gallery::swipe::SwipeThreshold;
///
/// assert_eq!(SwipeThreshold::default().value(), 50.0);
/// assert_eq!(SwipeThreshold::new(1.0).value(), 10.0); // clamped
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a threshold, clamping to the supported range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD)
    }
}

/// Maps a horizontal displacement onto a navigation command.
///
/// Displacements whose magnitude does not exceed the threshold are ignored.
#[must_use]
pub fn classify(displacement: f32, threshold: SwipeThreshold) -> Option<ViewerCommand> {
    if displacement.abs() <= threshold.value() {
        return None;
    }
    if displacement > 0.0 {
        Some(ViewerCommand::Previous)
    } else {
        Some(ViewerCommand::Next)
    }
}

/// How the backdrop release of the current gesture should be treated.
///
/// A touch lift over the lightbox backdrop reaches the app twice: as the
/// backdrop's release message and as a raw touch event. Their order is not
/// fixed, so whichever arrives first leaves a note for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Release {
    #[default]
    None,
    /// The backdrop release already arrived and was absorbed as a swipe.
    Absorbed,
    /// The gesture finished; the backdrop release may still follow.
    Pending { swiped: bool },
}

/// Tracks a touch gesture from press to release.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    last_x: Option<f32>,
    release: Release,
}

impl SwipeTracker {
    /// Records where the gesture started.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
        self.last_x = Some(x);
        self.release = Release::None;
    }

    /// Follows the finger while the gesture is down.
    pub fn track(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.last_x = Some(x);
        }
    }

    /// Ends the gesture and returns the command it maps to, if any.
    ///
    /// A release without a recorded start yields nothing.
    pub fn finish(&mut self, x: f32, threshold: SwipeThreshold) -> Option<ViewerCommand> {
        let start = self.start_x.take()?;
        self.last_x = None;
        let command = classify(x - start, threshold);
        self.release = match self.release {
            Release::Absorbed => Release::None,
            _ => Release::Pending {
                swiped: command.is_some(),
            },
        };
        command
    }

    /// A press over the backdrop outside a touch gesture (a mouse click)
    /// drops the note left by an earlier swipe.
    pub fn press_outside_gesture(&mut self) {
        if self.start_x.is_none() {
            self.release = Release::None;
        }
    }

    /// Decides whether a release over the backdrop belongs to a swipe.
    ///
    /// Returns `true` when the release must not close the viewer. A mouse
    /// click or a plain tap returns `false`.
    pub fn absorb_release(&mut self, threshold: SwipeThreshold) -> bool {
        if let Some(start) = self.start_x {
            let moved = self.last_x.unwrap_or(start) - start;
            let swiping = classify(moved, threshold).is_some();
            if swiping {
                self.release = Release::Absorbed;
            }
            return swiping;
        }

        match std::mem::take(&mut self.release) {
            Release::Pending { swiped } => swiped,
            Release::None | Release::Absorbed => false,
        }
    }

    /// Drops a gesture that will not complete (e.g. a lost touch).
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_displacement_goes_back() {
        assert_eq!(
            classify(60.0, SwipeThreshold::default()),
            Some(ViewerCommand::Previous)
        );
    }

    #[test]
    fn negative_displacement_goes_forward() {
        assert_eq!(
            classify(-60.0, SwipeThreshold::default()),
            Some(ViewerCommand::Next)
        );
    }

    #[test]
    fn short_displacement_is_ignored() {
        assert_eq!(classify(30.0, SwipeThreshold::default()), None);
        assert_eq!(classify(-30.0, SwipeThreshold::default()), None);
        // The threshold itself is not enough.
        assert_eq!(classify(50.0, SwipeThreshold::default()), None);
    }

    #[test]
    fn tracker_measures_from_start() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(200.0);
        assert!(tracker.is_tracking());

        let command = tracker.finish(120.0, SwipeThreshold::default());

        assert_eq!(command, Some(ViewerCommand::Next));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn release_without_start_does_nothing() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.finish(500.0, SwipeThreshold::default()), None);
    }

    #[test]
    fn cancel_forgets_start() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(0.0);
        tracker.cancel();
        assert_eq!(tracker.finish(100.0, SwipeThreshold::default()), None);
    }

    #[test]
    fn release_after_swipe_is_absorbed_once() {
        let mut tracker = SwipeTracker::default();
        let threshold = SwipeThreshold::default();
        tracker.begin(300.0);
        assert_eq!(tracker.finish(200.0, threshold), Some(ViewerCommand::Next));

        assert!(tracker.absorb_release(threshold));
        assert!(!tracker.absorb_release(threshold));
    }

    #[test]
    fn release_during_swipe_is_absorbed() {
        let mut tracker = SwipeTracker::default();
        let threshold = SwipeThreshold::default();
        tracker.begin(300.0);
        tracker.track(200.0);

        assert!(tracker.absorb_release(threshold));
        assert_eq!(tracker.finish(200.0, threshold), Some(ViewerCommand::Next));
        // The release was already handled; a later click closes again.
        assert!(!tracker.absorb_release(threshold));
    }

    #[test]
    fn tap_release_is_not_absorbed() {
        let mut tracker = SwipeTracker::default();
        let threshold = SwipeThreshold::default();

        tracker.begin(300.0);
        tracker.track(305.0);
        assert!(!tracker.absorb_release(threshold));

        tracker.begin(300.0);
        assert_eq!(tracker.finish(310.0, threshold), None);
        assert!(!tracker.absorb_release(threshold));
    }

    #[test]
    fn click_after_swipe_off_backdrop_is_not_absorbed() {
        let mut tracker = SwipeTracker::default();
        let threshold = SwipeThreshold::default();
        tracker.begin(300.0);
        tracker.finish(200.0, threshold);

        tracker.press_outside_gesture();
        assert!(!tracker.absorb_release(threshold));
    }

    #[test]
    fn press_during_gesture_keeps_it() {
        let mut tracker = SwipeTracker::default();
        let threshold = SwipeThreshold::default();
        tracker.begin(300.0);
        tracker.press_outside_gesture();
        tracker.track(200.0);

        assert!(tracker.absorb_release(threshold));
    }

    #[test]
    fn mouse_click_release_is_not_absorbed() {
        let mut tracker = SwipeTracker::default();
        assert!(!tracker.absorb_release(SwipeThreshold::default()));
    }

    #[test]
    fn track_ignored_without_gesture() {
        let mut tracker = SwipeTracker::default();
        tracker.track(500.0);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(SwipeThreshold::new(0.0).value(), MIN_SWIPE_THRESHOLD);
        assert_eq!(SwipeThreshold::new(9999.0).value(), MAX_SWIPE_THRESHOLD);
        assert_eq!(SwipeThreshold::new(f32::NAN), SwipeThreshold::default());
        assert_eq!(SwipeThreshold::new(80.0).value(), 80.0);
    }

    #[test]
    fn custom_threshold_changes_sensitivity() {
        let wide = SwipeThreshold::new(100.0);
        assert_eq!(classify(60.0, wide), None);
        assert_eq!(classify(101.0, wide), Some(ViewerCommand::Previous));
    }
}
