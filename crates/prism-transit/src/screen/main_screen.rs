//! The main screen: a column of expandable cards.

use prism_transit_core::EventQueue;

use crate::animation::{AnimationSpec, EnterExitTransition, StyleFrame, TransitionPhase};
use crate::app::AppEvent;
use crate::error::MotionError;
use crate::render::{DrawCommand, Renderer};
use crate::router::routes;
use crate::screen::{PANEL_SIZE, SLIDE_DISTANCE, Screen};
use crate::widget::ExpandCard;

/// Number of cards in the column.
const CARD_COUNT: usize = 5;

/// The start destination: five [`ExpandCard`]s in a column.
///
/// The screen itself enters by expanding from nothing and exits by sliding
/// out horizontally at full size — the two directions use different
/// transforms. Pressing a card's revealed inner button requests navigation
/// to `"dest1"`.
pub struct MainScreen {
    panel: EnterExitTransition,
    cards: Vec<ExpandCard>,
}

impl MainScreen {
    /// Create the screen, settled hidden, cards collapsed.
    pub fn new() -> Self {
        let resident = StyleFrame::VISIBLE.with_size(PANEL_SIZE);
        Self {
            panel: EnterExitTransition::new(
                AnimationSpec::default(),
                // Enter: expand from nothing.
                StyleFrame::HIDDEN,
                resident,
                // Exit: slide out to the right at full size.
                StyleFrame::offscreen_x(SLIDE_DISTANCE).with_size(PANEL_SIZE),
            ),
            cards: (0..CARD_COUNT).map(|_| ExpandCard::new()).collect(),
        }
    }

    /// Borrow a card by index (tests and the demo script).
    pub fn card(&self, index: usize) -> Option<&ExpandCard> {
        self.cards.get(index)
    }

    /// Borrow a card mutably by index.
    pub fn card_mut(&mut self, index: usize) -> Option<&mut ExpandCard> {
        self.cards.get_mut(index)
    }

    /// Split a click region like `"Main/card3"` or `"Main/card3/button"`
    /// into the card index and whether the inner button was hit.
    fn parse_card_region(region: &str) -> Option<(usize, bool)> {
        let rest = region.strip_prefix("Main/card")?;
        let (index, button) = match rest.split_once('/') {
            Some((index, "button")) => (index, true),
            Some(_) => return None,
            None => (rest, false),
        };
        index.parse().ok().map(|index| (index, button))
    }
}

impl Default for MainScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MainScreen {
    fn name(&self) -> &'static str {
        routes::MAIN
    }

    fn on_mount(&mut self) {
        self.panel.set_target(true);
    }

    fn request_exit(&mut self) {
        self.panel.set_target(false);
    }

    fn handle_click(&mut self, region: &str, events: &mut EventQueue<AppEvent>) {
        let Some((index, button)) = Self::parse_card_region(region) else {
            tracing::trace!(target: "prism_transit::app", region, "click on unknown region ignored");
            return;
        };
        let Some(card) = self.cards.get_mut(index) else {
            return;
        };

        if button {
            if card.press_inner_button() {
                let _ = events.post(AppEvent::Navigate {
                    route: routes::DEST1.to_string(),
                });
            }
        } else {
            card.toggle();
        }
    }

    fn tick(&mut self, delta_ms: f32) -> Result<(), MotionError> {
        self.panel.tick(delta_ms)?;
        for card in &mut self.cards {
            card.tick(delta_ms)?;
        }
        Ok(())
    }

    fn paint(&self, renderer: &mut dyn Renderer) {
        renderer.submit(DrawCommand::new("Main/panel", self.panel.current_frame()));
        for (index, card) in self.cards.iter().enumerate() {
            card.paint(&format!("Main/card{index}"), renderer);
        }
    }

    fn is_settled_hidden(&self) -> bool {
        self.panel.phase() == TransitionPhase::Settled(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_card_region() {
        assert_eq!(MainScreen::parse_card_region("Main/card0"), Some((0, false)));
        assert_eq!(
            MainScreen::parse_card_region("Main/card4/button"),
            Some((4, true))
        );
        assert_eq!(MainScreen::parse_card_region("Main/panel"), None);
        assert_eq!(MainScreen::parse_card_region("Main/card4/other"), None);
        assert_eq!(MainScreen::parse_card_region("dest1/button"), None);
    }

    #[test]
    fn test_mount_starts_enter() {
        let mut screen = MainScreen::new();
        assert!(screen.is_settled_hidden());

        screen.on_mount();
        screen.tick(250.0).unwrap();
        assert!(!screen.is_settled_hidden());
        assert_eq!(screen.panel.current_frame().size, PANEL_SIZE / 2.0);
    }

    #[test]
    fn test_card_click_toggles_only_that_card() {
        let mut screen = MainScreen::new();
        let mut events = EventQueue::new();
        screen.on_mount();

        screen.handle_click("Main/card2", &mut events);
        screen.tick(500.0).unwrap();

        assert!(screen.card(2).unwrap().is_expanded());
        assert!(!screen.card(0).unwrap().is_expanded());
        assert!(events.is_empty());
    }

    #[test]
    fn test_button_click_requests_navigation() {
        let mut screen = MainScreen::new();
        let mut events = EventQueue::new();
        screen.on_mount();

        // Expand first so the button exists.
        screen.handle_click("Main/card1", &mut events);
        screen.tick(500.0).unwrap();

        screen.handle_click("Main/card1/button", &mut events);
        assert!(matches!(
            events.take(),
            Some(AppEvent::Navigate { route }) if route == routes::DEST1
        ));
    }

    #[test]
    fn test_button_click_on_collapsed_card_is_ignored() {
        let mut screen = MainScreen::new();
        let mut events = EventQueue::new();
        screen.on_mount();

        screen.handle_click("Main/card1/button", &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_exit_settles_hidden() {
        let mut screen = MainScreen::new();
        screen.on_mount();
        screen.tick(500.0).unwrap();

        screen.request_exit();
        screen.tick(500.0).unwrap();
        assert!(screen.is_settled_hidden());
    }
}
