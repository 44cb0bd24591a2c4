//! Rank-derived card geometry.
//!
//! Every card's resting place is a pure function of its depth below the
//! front card: [`card_transform`]. Keeping this free of engine state makes
//! the geometry testable without a rendering host, and guarantees the
//! entry-placement and reflow paths agree on where a given depth sits.

/// Divisor of the per-depth scale taper: every step down the stack shrinks
/// a card by 1/50 of its natural size.
pub const SCALE_TAPER: f32 = 50.0;

/// Target transform for one card, in the host's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CardTransform {
    /// Horizontal translation in pixels.
    pub x: i32,
    /// Vertical translation in pixels.
    pub y: i32,
    /// Uniform scale factor (1.0 = natural size).
    pub scale: f32,
    /// Rotation in degrees.
    pub rotation: f32,
}

impl CardTransform {
    /// The front seat: no translation, natural size, no rotation.
    pub const IDENTITY: Self = Self {
        x: 0,
        y: 0,
        scale: 1.0,
        rotation: 0.0,
    };
}

/// Transform that seats a card `depth` positions below the front card.
///
/// Depth 0 is the front seat (identity). Deeper cards shift down by
/// `y_multiplier` pixels per step and shrink by [`SCALE_TAPER`]ths per step.
///
/// The scale taper is deliberately unclamped: a depth past 50 yields a zero
/// or negative scale. Callers that materialize windows that deep must clamp
/// on their side.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn card_transform(depth: usize, y_multiplier: i32) -> CardTransform {
    CardTransform {
        x: 0,
        y: (depth as i32).saturating_mul(y_multiplier),
        scale: 1.0 - depth as f32 / SCALE_TAPER,
        rotation: 0.0,
    }
}
