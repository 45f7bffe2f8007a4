//! Screens and their enter/exit transitions.
//!
//! Each screen owns its controller instances outright; nothing animated is
//! shared between screens, and a screen's state is discarded with it when
//! the router drops it. Mounting a route therefore always starts from a
//! fresh, settled-hidden state.

mod first;
mod main_screen;
mod second;

pub use first::FirstScreen;
pub use main_screen::MainScreen;
pub use second::SecondScreen;

use crate::app::AppEvent;
use crate::error::MotionError;
use crate::render::Renderer;
use prism_transit_core::EventQueue;

/// Logical size of a full-screen panel, in logical pixels.
pub const PANEL_SIZE: f32 = 800.0;

/// How far off-screen the slide transitions park a panel.
pub const SLIDE_DISTANCE: f32 = 1000.0;

/// A routed screen.
///
/// The router constructs screens from factories, mounts them (starting their
/// enter transition), forwards clicks to the active one, ticks every live
/// one, and drops an exiting screen once it reports itself settled hidden.
pub trait Screen {
    /// The route name this screen is registered under.
    fn name(&self) -> &'static str;

    /// Called once when the screen becomes active; starts the enter
    /// transition.
    fn on_mount(&mut self);

    /// Start the exit transition. Idempotent.
    fn request_exit(&mut self);

    /// Handle a click on one of this screen's regions.
    ///
    /// Follow-up work (navigation) is posted to the event queue, not
    /// performed re-entrantly. Clicks for unknown regions are ignored.
    fn handle_click(&mut self, region: &str, events: &mut EventQueue<AppEvent>);

    /// Advance all of this screen's controllers by the same wall-clock delta.
    fn tick(&mut self, delta_ms: f32) -> Result<(), MotionError>;

    /// Submit this screen's regions for the current tick.
    fn paint(&self, renderer: &mut dyn Renderer);

    /// Whether the exit transition has settled; the router drops the screen
    /// once this reports `true`.
    fn is_settled_hidden(&self) -> bool;
}
