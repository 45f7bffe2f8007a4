//! The visibility-transition state machine.
//!
//! A [`VisibilityTransition`] drives a boolean flag (visible/hidden,
//! expanded/collapsed) from its current settled value toward a target value
//! over a fixed duration, producing an interpolated [`StyleFrame`] for the
//! renderer on every tick.
//!
//! The controller is time-delta-driven, not frame-count-driven: the caller
//! advances it with `tick(delta_ms)` once per rendering tick, and the math is
//! robust to variable frame rates. It holds no clock of its own and knows
//! nothing about any rendering framework.

use crate::animation::{AnimationSpec, StyleFrame};
use crate::error::MotionError;

/// Where a transition currently is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Mid-flight toward the visible/on state.
    Entering,
    /// Mid-flight toward the hidden/off state.
    Exiting,
    /// At rest on the contained value.
    Settled(bool),
}

impl TransitionPhase {
    /// Check if the transition is mid-flight.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Entering | Self::Exiting)
    }
}

/// The result of advancing a transition by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickFrame {
    /// The interpolated style values for this tick.
    pub frame: StyleFrame,
    /// Whether the transition has settled on its target.
    pub finished: bool,
}

/// A boolean-visibility animation controller.
///
/// The controller owns a `(target, current)` flag pair and an elapsed clock,
/// and interpolates between two endpoint frames: `start` is the appearance of
/// the region when the flag is `false`, `end` when it is `true`.
///
/// # State machine
///
/// `Settled(x)` moves to `Entering`/`Exiting` when the target is set to `!x`;
/// the mid-flight states settle once the elapsed clock reaches the spec
/// duration, at which point `current` is updated to match `target`. Setting
/// the opposite target mid-flight reverses the animation from its current
/// progress rather than snapping to an extreme. The machine has no terminal
/// state.
///
/// # Ownership
///
/// Each controller instance is owned exclusively by the widget or screen that
/// created it and is discarded with it; no animation state outlives its
/// visual element. A widget may own several controllers (and a child widget
/// its own, with an independent spec); they compose by being advanced with
/// the same wall-clock deltas, never by feeding one controller's progress
/// into another.
///
/// # Example
///
/// ```
/// use prism_transit::animation::{AnimationSpec, StyleFrame, VisibilityTransition};
///
/// let spec = AnimationSpec::new(500.0).unwrap();
/// let start = StyleFrame::HIDDEN.with_size(100.0);
/// let end = StyleFrame::VISIBLE.with_size(200.0);
/// let mut transition = VisibilityTransition::new(spec, start, end);
///
/// transition.set_target(true);
/// let halfway = transition.tick(250.0).unwrap();
/// assert_eq!(halfway.frame.size, 150.0);
/// assert!(!halfway.finished);
///
/// let done = transition.tick(250.0).unwrap();
/// assert_eq!(done.frame.size, 200.0);
/// assert!(done.finished);
/// ```
#[derive(Debug, Clone)]
pub struct VisibilityTransition {
    /// Timing configuration, fixed for the lifetime of the controller.
    spec: AnimationSpec,
    /// Appearance of the region when the flag is `false`.
    start: StyleFrame,
    /// Appearance of the region when the flag is `true`.
    end: StyleFrame,
    /// The value the transition is animating toward.
    target: bool,
    /// The last fully-settled value.
    current: bool,
    /// Time spent in the current direction, clamped to `[0, duration]`.
    elapsed_ms: f32,
}

impl VisibilityTransition {
    /// Create a controller settled on the hidden/off state.
    pub fn new(spec: AnimationSpec, start: StyleFrame, end: StyleFrame) -> Self {
        Self::with_initial(spec, start, end, false)
    }

    /// Create a controller settled on an explicit initial value.
    pub fn with_initial(
        spec: AnimationSpec,
        start: StyleFrame,
        end: StyleFrame,
        visible: bool,
    ) -> Self {
        Self {
            spec,
            start,
            end,
            target: visible,
            current: visible,
            // A settled controller has completed its (notional) last run.
            elapsed_ms: spec.duration_ms(),
        }
    }

    /// Set the value the transition should animate toward.
    ///
    /// Calling with the in-flight target is a no-op. Otherwise the direction
    /// flips and the clock is mirrored (`elapsed = duration - elapsed`): from
    /// a settled state that restarts the clock at zero, and mid-flight it
    /// continues from the current progress instead of snapping back to an
    /// extreme.
    ///
    /// Returns `true` if the target changed.
    pub fn set_target(&mut self, new_target: bool) -> bool {
        if new_target == self.target {
            return false;
        }

        self.target = new_target;
        self.elapsed_ms = self.spec.duration_ms() - self.elapsed_ms;
        tracing::trace!(
            target: "prism_transit::animation",
            new_target,
            elapsed_ms = self.elapsed_ms,
            "transition retargeted"
        );
        true
    }

    /// Advance the transition by `delta_ms` milliseconds.
    ///
    /// Fails with [`MotionError::InvalidDelta`] if `delta_ms` is negative or
    /// non-finite, leaving the controller untouched. An arbitrarily large
    /// delta simply clamps to completion. O(1) in the number of animated
    /// properties.
    pub fn tick(&mut self, delta_ms: f32) -> Result<TickFrame, MotionError> {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            return Err(MotionError::InvalidDelta { delta_ms });
        }

        let duration = self.spec.duration_ms();
        self.elapsed_ms = (self.elapsed_ms + delta_ms).min(duration);
        if self.elapsed_ms >= duration {
            self.current = self.target;
        }

        Ok(TickFrame {
            frame: self.current_frame(),
            finished: self.is_finished(),
        })
    }

    /// Get the interpolated frame for the current elapsed time.
    ///
    /// Pure read; does not advance the clock.
    pub fn current_frame(&self) -> StyleFrame {
        StyleFrame::lerp(&self.start, &self.end, self.fraction_toward_end())
    }

    /// Get the current phase of the state machine.
    pub fn phase(&self) -> TransitionPhase {
        if self.is_finished() {
            TransitionPhase::Settled(self.target)
        } else if self.target {
            TransitionPhase::Entering
        } else {
            TransitionPhase::Exiting
        }
    }

    /// Eased progress toward the target, 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        self.spec
            .easing()
            .apply(self.elapsed_ms / self.spec.duration_ms())
    }

    /// Check if the transition has settled on its target.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.spec.duration_ms()
    }

    /// The value the transition is animating toward.
    #[inline]
    pub fn target(&self) -> bool {
        self.target
    }

    /// The last fully-settled value.
    #[inline]
    pub fn current(&self) -> bool {
        self.current
    }

    /// The timing configuration.
    #[inline]
    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Replace the frame shown when the flag is `false`.
    ///
    /// Supports transitions whose hidden appearance depends on the direction
    /// of travel (enter from one transform, exit to another). The clock and
    /// flag state are untouched.
    pub fn set_start_frame(&mut self, start: StyleFrame) {
        self.start = start;
    }

    /// Fraction of the way from the `start` frame to the `end` frame.
    ///
    /// Progress is measured along the direction of travel, so it maps to the
    /// start→end axis directly when entering and inverted when exiting. This
    /// is what makes mid-flight reversal seamless: mirroring the clock in
    /// [`set_target`](Self::set_target) leaves this fraction unchanged.
    fn fraction_toward_end(&self) -> f32 {
        let eased = self.progress();
        if self.target { eased } else { 1.0 - eased }
    }
}

static_assertions::assert_impl_all!(VisibilityTransition: Send, Sync);
