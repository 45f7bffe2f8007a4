//! Easing functions for smooth animations.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value that creates smoother, more natural-looking motion.

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
    /// Cubic ease-in (more pronounced than quadratic).
    EaseInCubic,
    /// Cubic ease-out (more pronounced than quadratic).
    EaseOutCubic,
    /// Cubic ease-in-out (more pronounced than quadratic).
    EaseInOutCubic,
}

impl Easing {
    /// Apply this easing function to a progress value.
    ///
    /// The input is clamped to `[0.0, 1.0]` before the curve is applied, so
    /// every curve maps 0.0 to 0.0 and 1.0 to 1.0 exactly.
    ///
    /// # Example
    ///
    /// ```
    /// use prism_transit::animation::Easing;
    ///
    /// // Linear: output equals input
    /// assert_eq!(Easing::Linear.apply(0.5), 0.5);
    ///
    /// // Ease-in: slower at start
    /// assert!(Easing::EaseIn.apply(0.5) < 0.5);
    ///
    /// // Ease-out: slower at end
    /// assert!(Easing::EaseOut.apply(0.5) > 0.5);
    /// ```
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Interpolate between two values using an easing function.
///
/// Returns `start + (end - start) * easing(t)`.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * easing.apply(t)
}
