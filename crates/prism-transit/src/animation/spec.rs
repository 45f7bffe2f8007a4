//! Animation timing configuration.

use crate::animation::Easing;
use crate::error::MotionError;

/// The fixed duration, in milliseconds, used by every transition in the demo.
pub const DEFAULT_DURATION_MS: f32 = 500.0;

/// Immutable timing configuration for one transition instance.
///
/// A spec pairs a duration with an easing curve. It is validated on
/// construction and never changes afterwards; a transition that needs
/// different timing is built with a new spec.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    duration_ms: f32,
    easing: Easing,
}

impl AnimationSpec {
    /// Create a spec with the given duration and linear easing.
    ///
    /// Fails with [`MotionError::InvalidDuration`] if `duration_ms` is not a
    /// positive finite number. A zero or negative duration is a configuration
    /// error and is rejected rather than clamped.
    pub fn new(duration_ms: f32) -> Result<Self, MotionError> {
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(MotionError::InvalidDuration { duration_ms });
        }
        Ok(Self {
            duration_ms,
            easing: Easing::Linear,
        })
    }

    /// Set the easing curve, builder style.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Get the duration in milliseconds.
    #[inline]
    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Get the easing curve.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }
}

impl Default for AnimationSpec {
    /// The demo-wide default: 500 ms, linear easing.
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::Linear,
        }
    }
}
