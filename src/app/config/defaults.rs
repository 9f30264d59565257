// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: initial filter
//! - **Reveal**: staggered fade-in of grid tiles
//! - **Swipe**: lightbox gesture sensitivity

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Filter selected on startup.
pub const DEFAULT_FILTER_KEY: &str = "all";

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Delay between the fade-in start of consecutive grid tiles (milliseconds).
pub const DEFAULT_REVEAL_STAGGER_MS: u64 = 60;

/// Maximum allowed stagger delay (milliseconds).
pub const MAX_REVEAL_STAGGER_MS: u64 = 500;

/// Duration of a single tile's fade-in (milliseconds).
pub const REVEAL_DURATION_MS: u64 = 600;

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Horizontal travel a touch gesture needs to count as a swipe (logical px).
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Minimum allowed swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = 10.0;

/// Maximum allowed swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = 400.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_bounds_contain_default() {
        let (min, default, max) = (
            MIN_SWIPE_THRESHOLD,
            DEFAULT_SWIPE_THRESHOLD,
            MAX_SWIPE_THRESHOLD,
        );
        assert!(min <= default && default <= max);
    }

    #[test]
    fn reveal_stagger_default_within_bounds() {
        let (default, max) = (DEFAULT_REVEAL_STAGGER_MS, MAX_REVEAL_STAGGER_MS);
        assert!(default <= max);
    }
}
