//! Asymmetric enter/exit transitions.
//!
//! Screen navigation in the demo uses different transforms per direction:
//! the main screen expands into view but slides out of it. An
//! [`EnterExitTransition`] wraps a [`VisibilityTransition`] and swaps the
//! hidden endpoint frame whenever the direction of travel changes, so the
//! appearing and disappearing halves of the cycle each use their own
//! transform while sharing one clock and one state machine.

use crate::animation::{
    AnimationSpec, StyleFrame, TickFrame, TransitionPhase, VisibilityTransition,
};
use crate::error::MotionError;

/// A visibility transition with direction-dependent hidden frames.
///
/// While entering, the region interpolates `enter_from → resident`; while
/// exiting, `resident → exit_to`. Reversing mid-flight keeps the clock's
/// progress (no snap-back) but switches to the new direction's transform.
#[derive(Debug, Clone)]
pub struct EnterExitTransition {
    inner: VisibilityTransition,
    enter_from: StyleFrame,
    exit_to: StyleFrame,
}

impl EnterExitTransition {
    /// Create a controller settled hidden, parked on the `enter_from` frame.
    ///
    /// `resident` is the region's settled visible appearance.
    pub fn new(
        spec: AnimationSpec,
        enter_from: StyleFrame,
        resident: StyleFrame,
        exit_to: StyleFrame,
    ) -> Self {
        Self {
            inner: VisibilityTransition::new(spec, enter_from, resident),
            enter_from,
            exit_to,
        }
    }

    /// Set the value the transition should animate toward.
    ///
    /// Idempotent for the in-flight target. On a direction change the hidden
    /// endpoint is swapped to the new direction's transform.
    pub fn set_target(&mut self, visible: bool) -> bool {
        if !self.inner.set_target(visible) {
            return false;
        }
        let hidden = if visible {
            self.enter_from
        } else {
            self.exit_to
        };
        self.inner.set_start_frame(hidden);
        true
    }

    /// Advance by `delta_ms` milliseconds. See [`VisibilityTransition::tick`].
    pub fn tick(&mut self, delta_ms: f32) -> Result<TickFrame, MotionError> {
        self.inner.tick(delta_ms)
    }

    /// Get the interpolated frame for the current elapsed time.
    pub fn current_frame(&self) -> StyleFrame {
        self.inner.current_frame()
    }

    /// Get the current phase of the state machine.
    pub fn phase(&self) -> TransitionPhase {
        self.inner.phase()
    }

    /// Check if the transition has settled on its target.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// The value the transition is animating toward.
    pub fn target(&self) -> bool {
        self.inner.target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: f32 = 800.0;

    fn screen_transition() -> EnterExitTransition {
        let resident = StyleFrame::VISIBLE.with_size(PANEL);
        EnterExitTransition::new(
            AnimationSpec::new(500.0).unwrap(),
            // Enter: expand from nothing.
            StyleFrame::HIDDEN,
            resident,
            // Exit: slide out to the right at full size.
            StyleFrame::offscreen_x(1000.0).with_size(PANEL),
        )
    }

    #[test]
    fn test_enter_expands() {
        let mut t = screen_transition();
        t.set_target(true);

        let halfway = t.tick(250.0).unwrap();
        assert_eq!(halfway.frame.size, PANEL / 2.0);
        assert_eq!(halfway.frame.offset_x, 0.0);

        let done = t.tick(250.0).unwrap();
        assert!(done.finished);
        assert_eq!(done.frame.size, PANEL);
    }

    #[test]
    fn test_exit_slides() {
        let mut t = screen_transition();
        t.set_target(true);
        t.tick(500.0).unwrap();

        t.set_target(false);
        let halfway = t.tick(250.0).unwrap();
        // Sliding, not shrinking: size holds while the offset grows.
        assert_eq!(halfway.frame.size, PANEL);
        assert_eq!(halfway.frame.offset_x, 500.0);

        let done = t.tick(250.0).unwrap();
        assert!(done.finished);
        assert_eq!(done.frame.offset_x, 1000.0);
        assert_eq!(t.phase(), TransitionPhase::Settled(false));
    }

    #[test]
    fn test_reversal_keeps_clock_progress() {
        let mut t = screen_transition();
        t.set_target(true);
        t.tick(400.0).unwrap();

        // Interrupt the enter; the exit picks up at the same clock progress,
        // 80% of the way along its own slide track.
        t.set_target(false);
        assert_eq!(t.phase(), TransitionPhase::Exiting);
        assert_eq!(t.current_frame().offset_x, 200.0);

        let done = t.tick(400.0).unwrap();
        assert!(done.finished);
        assert_eq!(done.frame.offset_x, 1000.0);
    }

    #[test]
    fn test_set_target_idempotent() {
        let mut t = screen_transition();
        assert!(t.set_target(true));
        assert!(!t.set_target(true));
    }
}
