//! Named-route navigation host.
//!
//! The router owns a table mapping route names to screen factories. A
//! navigation mounts a freshly constructed screen — never a cached one — so
//! a route's animation state can never leak across visits. The previously
//! active screen is parked as the *outgoing* screen and kept alive, still
//! ticking, until its exit transition settles hidden, at which point it is
//! dropped.

use std::collections::HashMap;

use prism_transit_core::{EventQueue, Signal};

use crate::app::AppEvent;
use crate::error::{MotionError, RouterError};
use crate::render::Renderer;
use crate::screen::Screen;

/// The route names used by the demo.
pub mod routes {
    /// The start destination.
    pub const MAIN: &str = "Main";
    /// The first destination.
    pub const DEST1: &str = "dest1";
    /// The second destination.
    pub const DEST2: &str = "dest2";
}

/// Builds a fresh screen instance for a route.
pub type ScreenFactory = Box<dyn Fn() -> Box<dyn Screen>>;

/// A named-route table and the screens currently alive under it.
///
/// # Signals
///
/// - `route_changed(String)`: Emitted after a successful navigation with the
///   new route name.
pub struct Router {
    routes: HashMap<String, ScreenFactory>,
    /// The screen receiving input and entering (or resident).
    active: Option<Box<dyn Screen>>,
    /// At most one previously active screen, playing out its exit.
    outgoing: Option<Box<dyn Screen>>,

    /// Signal emitted after a successful navigation.
    pub route_changed: Signal<String>,
}

impl Router {
    /// Create a router with an empty route table.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            active: None,
            outgoing: None,
            route_changed: Signal::new(),
        }
    }

    /// Register a route under a name, replacing any previous registration.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Screen> + 'static,
    {
        self.routes.insert(name.into(), Box::new(factory));
    }

    /// Navigate to a named route.
    ///
    /// The current screen (if any) is asked to exit and parked as the
    /// outgoing screen; a still-exiting predecessor is dropped on the spot.
    /// The new screen is constructed fresh from its factory and mounted.
    ///
    /// Fails with [`RouterError::UnknownRoute`] if the name is not in the
    /// table; the caller treats navigation as fire-and-forget, so a miss is
    /// a programming error, not a recoverable condition.
    pub fn navigate(&mut self, name: &str) -> Result<(), RouterError> {
        let factory = self.routes.get(name).ok_or_else(|| RouterError::UnknownRoute {
            name: name.to_string(),
        })?;

        let mut next = factory();
        next.on_mount();

        if let Some(mut old) = self.active.take() {
            old.request_exit();
            if let Some(dropped) = self.outgoing.replace(old) {
                tracing::debug!(
                    target: "prism_transit::router",
                    route = dropped.name(),
                    "outgoing screen dropped before its exit settled"
                );
            }
        }

        tracing::info!(target: "prism_transit::router", route = name, "navigating");
        self.active = Some(next);
        self.route_changed.emit(name.to_string());
        Ok(())
    }

    /// The route name of the active screen, if any.
    pub fn active_route(&self) -> Option<&'static str> {
        self.active.as_deref().map(Screen::name)
    }

    /// Mutable access to the active screen.
    pub fn active_screen_mut(&mut self) -> Option<&mut (dyn Screen + 'static)> {
        self.active.as_deref_mut()
    }

    /// Whether a previously active screen is still playing out its exit.
    pub fn has_outgoing(&self) -> bool {
        self.outgoing.is_some()
    }

    /// Forward a click to the active screen.
    pub fn dispatch_click(&mut self, region: &str, events: &mut EventQueue<AppEvent>) {
        if let Some(screen) = self.active.as_deref_mut() {
            screen.handle_click(region, events);
        }
    }

    /// Advance every live screen by the same wall-clock delta, dropping the
    /// outgoing screen once its exit has settled.
    pub fn tick(&mut self, delta_ms: f32) -> Result<(), MotionError> {
        if let Some(screen) = self.active.as_deref_mut() {
            screen.tick(delta_ms)?;
        }

        if let Some(outgoing) = self.outgoing.as_deref_mut() {
            outgoing.tick(delta_ms)?;
            if outgoing.is_settled_hidden() {
                let route = outgoing.name();
                tracing::debug!(target: "prism_transit::router", route, "outgoing screen settled, dropping");
                self.outgoing = None;
            }
        }

        Ok(())
    }

    /// Submit every live screen's regions, outgoing screen first so the
    /// entering screen draws over it.
    pub fn paint(&self, renderer: &mut dyn Renderer) {
        if let Some(outgoing) = self.outgoing.as_deref() {
            outgoing.paint(renderer);
        }
        if let Some(active) = self.active.as_deref() {
            active.paint(renderer);
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
