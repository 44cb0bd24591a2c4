//! Engine configuration — window behavior and motion constants.
//!
//! All values are read once at construction and never change afterwards.
//! The stack window size itself is the const generic `N` on
//! [`CardStack`](crate::CardStack); everything runtime-tunable lives here.

/// Window size used by the [`DefaultStack`](crate::DefaultStack) alias.
pub const DEFAULT_STACK_SIZE: usize = 4;

/// Default vertical offset between consecutive ranks, in pixels.
pub const DEFAULT_Y_MULTIPLIER: i32 = 12;

/// Default duration of entry-placement and reflow transitions, in
/// milliseconds.
pub const SWIPE_DURATION_MS: u32 = 300;

/// Easing curve the host animation runtime should apply to a transition.
///
/// The engine never evaluates the curve itself; it only tags each
/// [`Animate`](crate::StackEvent::Animate) event so the host can pick the
/// matching interpolator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Pulls back slightly, accelerates, then overshoots the target before
    /// settling — the classic card-stack reflow curve.
    AnticipateOvershoot,
}

/// How a card travels to a target transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Motion {
    /// Transition duration in milliseconds.
    pub duration_ms: u32,
    /// Easing curve for the transition.
    pub easing: Easing,
}

impl Motion {
    /// Motion used when none is configured: 300 ms, anticipate-overshoot.
    pub const DEFAULT: Self = Self {
        duration_ms: SWIPE_DURATION_MS,
        easing: Easing::AnticipateOvershoot,
    };

    /// Create a motion with an explicit duration and easing.
    #[must_use]
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Immutable engine configuration.
///
/// Built with the defaults and adjusted builder-style:
///
/// ```
/// use cardstack::{Easing, Motion, StackConfig};
///
/// let config = StackConfig::new()
///     .repeat(true)
///     .y_multiplier(8)
///     .motion(Motion::new(200, Easing::Linear));
/// assert!(config.repeat);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StackConfig {
    /// Wrap the adapter cursor back to zero once the source is exhausted,
    /// looping the data source indefinitely.
    pub repeat: bool,
    /// Vertical offset applied per rank below the top card, in pixels.
    pub y_multiplier: i32,
    /// Transition used for entry placements and reflow targets.
    pub motion: Motion,
}

impl StackConfig {
    /// Configuration with all defaults (`repeat` off).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            repeat: false,
            y_multiplier: DEFAULT_Y_MULTIPLIER,
            motion: Motion::DEFAULT,
        }
    }

    /// Set whether the adapter cursor wraps on exhaustion.
    #[must_use]
    pub const fn repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// Set the per-rank vertical offset in pixels.
    #[must_use]
    pub const fn y_multiplier(mut self, pixels: i32) -> Self {
        self.y_multiplier = pixels;
        self
    }

    /// Set the transition motion.
    #[must_use]
    pub const fn motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = StackConfig::new();
        assert!(!config.repeat);
        assert_eq!(config.y_multiplier, DEFAULT_Y_MULTIPLIER);
        assert_eq!(config.motion.duration_ms, SWIPE_DURATION_MS);
        assert_eq!(config.motion.easing, Easing::AnticipateOvershoot);
    }

    #[test]
    fn test_config_builder_chain() {
        let config = StackConfig::new()
            .repeat(true)
            .y_multiplier(-4)
            .motion(Motion::new(120, Easing::Linear));
        assert!(config.repeat);
        assert_eq!(config.y_multiplier, -4);
        assert_eq!(config.motion, Motion::new(120, Easing::Linear));
    }

    #[test]
    fn test_motion_default_matches_const() {
        assert_eq!(Motion::default(), Motion::DEFAULT);
    }
}
