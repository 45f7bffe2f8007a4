//! The second destination screen.

use prism_transit_core::EventQueue;

use crate::animation::StyleFrame;
use crate::app::AppEvent;
use crate::error::MotionError;
use crate::render::{DrawCommand, Renderer};
use crate::router::routes;
use crate::screen::{PANEL_SIZE, Screen};

/// A static full-size panel with no transition animation; its button
/// navigates to `"dest1"`. Nothing in the demo links here, but the route
/// stays registered and reachable by a direct navigation request.
pub struct SecondScreen {
    exited: bool,
}

impl SecondScreen {
    pub fn new() -> Self {
        Self { exited: false }
    }
}

impl Default for SecondScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SecondScreen {
    fn name(&self) -> &'static str {
        routes::DEST2
    }

    fn on_mount(&mut self) {}

    fn request_exit(&mut self) {
        self.exited = true;
    }

    fn handle_click(&mut self, region: &str, events: &mut EventQueue<AppEvent>) {
        if region != "dest2/button" {
            return;
        }
        let _ = events.post(AppEvent::Navigate {
            route: routes::DEST1.to_string(),
        });
    }

    fn tick(&mut self, _delta_ms: f32) -> Result<(), MotionError> {
        Ok(())
    }

    fn paint(&self, renderer: &mut dyn Renderer) {
        renderer.submit(DrawCommand::new(
            "dest2/panel",
            StyleFrame::VISIBLE.with_size(PANEL_SIZE),
        ));
    }

    fn is_settled_hidden(&self) -> bool {
        // No exit animation: the screen is droppable as soon as it is asked
        // to leave.
        self.exited
    }
}
