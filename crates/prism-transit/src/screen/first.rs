//! The first destination screen.

use prism_transit_core::EventQueue;

use crate::animation::{AnimationSpec, StyleFrame, TransitionPhase, VisibilityTransition};
use crate::app::AppEvent;
use crate::error::MotionError;
use crate::render::{DrawCommand, Renderer};
use crate::router::routes;
use crate::screen::{PANEL_SIZE, SLIDE_DISTANCE, Screen};

/// A full-size panel that slides in from the right and slides back out the
/// same way. Its single button returns to the main screen, starting the exit
/// before the navigation request is posted.
pub struct FirstScreen {
    panel: VisibilityTransition,
}

impl FirstScreen {
    /// Create the screen, settled hidden off-screen.
    pub fn new() -> Self {
        Self {
            panel: VisibilityTransition::new(
                AnimationSpec::default(),
                StyleFrame::offscreen_x(SLIDE_DISTANCE).with_size(PANEL_SIZE),
                StyleFrame::VISIBLE.with_size(PANEL_SIZE),
            ),
        }
    }
}

impl Default for FirstScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for FirstScreen {
    fn name(&self) -> &'static str {
        routes::DEST1
    }

    fn on_mount(&mut self) {
        self.panel.set_target(true);
    }

    fn request_exit(&mut self) {
        self.panel.set_target(false);
    }

    fn handle_click(&mut self, region: &str, events: &mut EventQueue<AppEvent>) {
        if region != "dest1/button" {
            tracing::trace!(target: "prism_transit::app", region, "click on unknown region ignored");
            return;
        }

        // Exit starts before the navigation request is posted, so the
        // slide-out is already in flight when the router parks this screen.
        self.request_exit();
        let _ = events.post(AppEvent::Navigate {
            route: routes::MAIN.to_string(),
        });
    }

    fn tick(&mut self, delta_ms: f32) -> Result<(), MotionError> {
        self.panel.tick(delta_ms)?;
        Ok(())
    }

    fn paint(&self, renderer: &mut dyn Renderer) {
        renderer.submit(DrawCommand::new("dest1/panel", self.panel.current_frame()));
    }

    fn is_settled_hidden(&self) -> bool {
        self.panel.phase() == TransitionPhase::Settled(false)
    }
}
