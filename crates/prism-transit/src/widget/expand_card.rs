//! Expandable card widget.
//!
//! A card that toggles between a collapsed and an expanded appearance on
//! click. Expansion animates three coupled properties (height, elevation,
//! padding) over 500 ms, and simultaneously slides a hidden content column
//! (a button and a caption) in from below on its own 500 ms clock. The two
//! animations share wall-clock time but nothing else: each has its own
//! controller, endpoints and spec.
//!
//! Collapsing reverses both. A click mid-animation reverses from the current
//! progress.

use prism_transit_core::Signal;

use crate::animation::{AnimationSpec, StyleFrame, TransitionPhase, VisibilityTransition};
use crate::error::MotionError;
use crate::render::{DrawCommand, Renderer};

/// Collapsed card appearance: height 100, elevation 1, padding 16.
const COLLAPSED: StyleFrame = StyleFrame {
    size: 100.0,
    elevation: 1.0,
    padding: 16.0,
    offset_x: 0.0,
    offset_y: 0.0,
    alpha: 1.0,
};

/// Expanded card appearance: height 200, elevation 5, padding 8.
const EXPANDED: StyleFrame = StyleFrame {
    size: 200.0,
    elevation: 5.0,
    padding: 8.0,
    offset_x: 0.0,
    offset_y: 0.0,
    alpha: 1.0,
};

/// How far below its resting position the content column starts.
const CONTENT_DROP: f32 = 1000.0;

/// An expandable card with a nested slide-in content column.
///
/// # Signals
///
/// - `toggled(bool)`: Emitted when a click flips the card's target state.
///   The payload is the new target (`true` = expanding).
/// - `action_requested(())`: Emitted when the revealed inner button is
///   pressed. The card does not know what the action is; the application
///   wires this to navigation.
pub struct ExpandCard {
    /// Outer expansion: three coupled properties on one clock.
    card: VisibilityTransition,
    /// Nested content slide; independent spec, same wall-clock deltas.
    content: VisibilityTransition,

    /// Signal emitted when a click flips the expansion target.
    pub toggled: Signal<bool>,
    /// Signal emitted when the revealed inner button is pressed.
    pub action_requested: Signal<()>,
}

impl ExpandCard {
    /// Create a collapsed card.
    pub fn new() -> Self {
        let spec = AnimationSpec::default();
        Self {
            card: VisibilityTransition::new(spec, COLLAPSED, EXPANDED),
            content: VisibilityTransition::new(
                spec,
                StyleFrame::offscreen_y(CONTENT_DROP),
                StyleFrame::VISIBLE,
            ),
            toggled: Signal::new(),
            action_requested: Signal::new(),
        }
    }

    /// Handle a click on the card body: flip the expansion target.
    ///
    /// Both the outer expansion and the content slide retarget in the same
    /// call; the content does not wait for the card to finish expanding.
    pub fn toggle(&mut self) {
        let expand = !self.card.target();
        self.set_expanded(expand);
    }

    /// Set the expansion target directly. Idempotent.
    pub fn set_expanded(&mut self, expand: bool) {
        if !self.card.set_target(expand) {
            return;
        }
        self.content.set_target(expand);
        tracing::debug!(target: "prism_transit::widget", expand, "card retargeted");
        self.toggled.emit(expand);
    }

    /// Handle a press on the inner button.
    ///
    /// The button exists only while the content column is present; a press
    /// is ignored (and `false` returned) when the content is fully hidden.
    pub fn press_inner_button(&mut self) -> bool {
        if self.content.phase() == TransitionPhase::Settled(false) {
            tracing::debug!(
                target: "prism_transit::widget",
                "inner button press ignored, content hidden"
            );
            return false;
        }
        self.action_requested.emit(());
        true
    }

    /// Advance both animations by the same wall-clock delta.
    pub fn tick(&mut self, delta_ms: f32) -> Result<(), MotionError> {
        self.card.tick(delta_ms)?;
        self.content.tick(delta_ms)?;
        Ok(())
    }

    /// The card body's interpolated frame.
    pub fn card_frame(&self) -> StyleFrame {
        self.card.current_frame()
    }

    /// The content column's interpolated frame.
    pub fn content_frame(&self) -> StyleFrame {
        self.content.current_frame()
    }

    /// The last settled expansion state.
    pub fn is_expanded(&self) -> bool {
        self.card.current()
    }

    /// Whether both animations have settled.
    pub fn is_settled(&self) -> bool {
        self.card.is_finished() && self.content.is_finished()
    }

    /// Submit this card's regions for the current tick.
    ///
    /// The content column is omitted while fully hidden, mirroring a
    /// widget tree that only contains the column while it is visible.
    pub fn paint(&self, region: &str, renderer: &mut dyn Renderer) {
        renderer.submit(DrawCommand::new(region, self.card_frame()));
        if self.content.phase() != TransitionPhase::Settled(false) {
            renderer.submit(DrawCommand::new(
                format!("{region}/content"),
                self.content_frame(),
            ));
        }
    }
}

impl Default for ExpandCard {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(ExpandCard: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingRenderer;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_new_card_is_collapsed() {
        let card = ExpandCard::new();
        assert!(!card.is_expanded());
        assert!(card.is_settled());
        assert_eq!(card.card_frame(), COLLAPSED);
        assert_eq!(card.content_frame().offset_y, CONTENT_DROP);
    }

    #[test]
    fn test_expansion_animates_coupled_properties() {
        let mut card = ExpandCard::new();
        card.toggle();
        card.tick(250.0).unwrap();

        let frame = card.card_frame();
        assert_eq!(frame.size, 150.0);
        assert_eq!(frame.elevation, 3.0);
        assert_eq!(frame.padding, 12.0);
        // Mid-flight: the settled state is still collapsed.
        assert!(!card.is_expanded());

        card.tick(250.0).unwrap();
        assert_eq!(card.card_frame(), EXPANDED);
        assert!(card.is_expanded());
    }

    #[test]
    fn test_content_starts_with_expansion_not_after() {
        let mut card = ExpandCard::new();
        card.toggle();
        card.tick(250.0).unwrap();

        // Halfway through the expansion the content is already halfway up.
        assert_eq!(card.content_frame().offset_y, CONTENT_DROP / 2.0);
    }

    #[test]
    fn test_collapse_reverses_both() {
        let mut card = ExpandCard::new();
        card.toggle();
        card.tick(500.0).unwrap();
        assert!(card.is_expanded());

        card.toggle();
        card.tick(250.0).unwrap();
        assert_eq!(card.card_frame().size, 150.0);
        assert_eq!(card.content_frame().offset_y, CONTENT_DROP / 2.0);

        card.tick(250.0).unwrap();
        assert_eq!(card.card_frame(), COLLAPSED);
        assert!(!card.is_expanded());
    }

    #[test]
    fn test_click_mid_flight_reverses_from_progress() {
        let mut card = ExpandCard::new();
        card.toggle();
        card.tick(125.0).unwrap();
        let size_at_interrupt = card.card_frame().size;

        card.toggle();
        // No snap: the collapse starts where the expansion was interrupted.
        assert_eq!(card.card_frame().size, size_at_interrupt);
    }

    #[test]
    fn test_toggled_signal_carries_new_target() {
        let mut card = ExpandCard::new();
        let seen = Arc::new(AtomicU32::new(0));

        let seen_clone = seen.clone();
        card.toggled.connect(move |&expand| {
            seen_clone.store(if expand { 1 } else { 2 }, Ordering::SeqCst);
        });

        card.toggle();
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        card.toggle();
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_set_expanded_idempotent() {
        let mut card = ExpandCard::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = count.clone();
        card.toggled.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        card.set_expanded(true);
        card.set_expanded(true);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_inner_button_ignored_while_hidden() {
        let mut card = ExpandCard::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = count.clone();
        card.action_requested.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!card.press_inner_button());
        assert_eq!(count.load(Ordering::SeqCst), 0);

        card.toggle();
        card.tick(500.0).unwrap();
        assert!(card.press_inner_button());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_paint_omits_hidden_content() {
        let mut card = ExpandCard::new();
        let mut renderer = RecordingRenderer::new();

        renderer.begin_frame();
        card.paint("Main/card0", &mut renderer);
        renderer.end_frame();
        assert_eq!(renderer.last_frame().len(), 1);

        card.toggle();
        card.tick(100.0).unwrap();
        renderer.begin_frame();
        card.paint("Main/card0", &mut renderer);
        renderer.end_frame();
        assert_eq!(renderer.last_frame().len(), 2);
        assert!(renderer.find("Main/card0/content").is_some());
    }
}
