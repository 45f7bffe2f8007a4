//! The application shell: event pump and tick loop.
//!
//! One [`App::advance`] call is one rendering tick: pending events are
//! drained and dispatched, every live controller is advanced by the supplied
//! wall-clock delta, and the resulting frames are painted. Everything runs
//! on the caller's thread and nothing blocks; the loop is delta-driven, so a
//! late frame simply hands in a larger delta.

use prism_transit_core::{EventPriority, EventQueue, QueueError, QueueEvent};

use crate::error::TransitError;
use crate::render::Renderer;
use crate::router::Router;

/// Events processed by the application between ticks.
///
/// Input is never delivered as a re-entrant callback: the rendering backend
/// posts clicks here, screens post navigation requests here, and the pump
/// dispatches them in priority order before the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The pointer was released over a named region.
    Click {
        /// The region that was hit, e.g. `"Main/card2/button"`.
        region: String,
    },
    /// Request to show a named route.
    Navigate {
        /// The route name to show.
        route: String,
    },
    /// Request to stop the application.
    Quit,
}

impl QueueEvent for AppEvent {
    fn priority(&self) -> EventPriority {
        match self {
            Self::Click { .. } => EventPriority::High,
            Self::Navigate { .. } => EventPriority::Normal,
            Self::Quit => EventPriority::Critical,
        }
    }
}

/// The demo application: a router, an event queue and a renderer.
pub struct App<R: Renderer> {
    router: Router,
    events: EventQueue<AppEvent>,
    renderer: R,
    running: bool,
}

impl<R: Renderer> App<R> {
    /// Create an application around a configured router and a renderer.
    pub fn new(router: Router, renderer: R) -> Self {
        Self {
            router,
            events: EventQueue::new(),
            renderer,
            running: true,
        }
    }

    /// Post an event for the next pump.
    pub fn post(&mut self, event: AppEvent) -> Result<(), QueueError> {
        self.events.post(event)
    }

    /// Run one tick: pump events, advance animations, paint.
    pub fn advance(&mut self, delta_ms: f32) -> Result<(), TransitError> {
        self.pump_events()?;
        self.router.tick(delta_ms)?;

        self.renderer.begin_frame();
        self.router.paint(&mut self.renderer);
        self.renderer.end_frame();
        Ok(())
    }

    /// Dispatch queued events until the queue is empty.
    ///
    /// Events posted by a handler (a click posting a navigation) are
    /// dispatched in the same pump, so a click's follow-up work lands before
    /// the tick that follows it.
    fn pump_events(&mut self) -> Result<(), TransitError> {
        while let Some(event) = self.events.take() {
            tracing::trace!(target: "prism_transit::app", ?event, "dispatching");
            match event {
                AppEvent::Click { region } => {
                    self.router.dispatch_click(&region, &mut self.events);
                }
                AppEvent::Navigate { route } => {
                    self.router.navigate(&route)?;
                }
                AppEvent::Quit => {
                    tracing::info!(target: "prism_transit::app", "quit requested");
                    self.running = false;
                    self.events.close();
                }
            }
        }
        Ok(())
    }

    /// Whether the application is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The router.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Mutable access to the router.
    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    /// The renderer backend.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingRenderer;
    use crate::router::routes;
    use crate::screen::{FirstScreen, MainScreen, SecondScreen};

    fn demo_app() -> App<RecordingRenderer> {
        let mut router = Router::new();
        router.register(routes::MAIN, || Box::new(MainScreen::new()));
        router.register(routes::DEST1, || Box::new(FirstScreen::new()));
        router.register(routes::DEST2, || Box::new(SecondScreen::new()));
        App::new(router, RecordingRenderer::new())
    }

    #[test]
    fn test_advance_paints_active_screen() {
        let mut app = demo_app();
        app.post(AppEvent::Navigate {
            route: routes::MAIN.to_string(),
        })
        .unwrap();

        app.advance(16.0).unwrap();
        assert!(app.renderer().find("Main/panel").is_some());
    }

    #[test]
    fn test_click_is_dispatched_before_tick() {
        let mut app = demo_app();
        app.post(AppEvent::Navigate {
            route: routes::MAIN.to_string(),
        })
        .unwrap();
        app.advance(500.0).unwrap();

        app.post(AppEvent::Click {
            region: "Main/card0".to_string(),
        })
        .unwrap();
        app.advance(250.0).unwrap();

        // The card had already been retargeted when the tick ran.
        let card = app.renderer().find("Main/card0").unwrap();
        assert_eq!(card.frame.size, 150.0);
    }

    #[test]
    fn test_unknown_route_surfaces_error() {
        let mut app = demo_app();
        app.post(AppEvent::Navigate {
            route: "nope".to_string(),
        })
        .unwrap();

        assert!(matches!(
            app.advance(16.0),
            Err(TransitError::Router(_))
        ));
    }

    #[test]
    fn test_quit_stops_the_app_and_closes_the_queue() {
        let mut app = demo_app();
        app.post(AppEvent::Quit).unwrap();
        app.advance(16.0).unwrap();

        assert!(!app.is_running());
        assert_eq!(app.post(AppEvent::Quit), Err(QueueError::Closed));
    }

    #[test]
    fn test_quit_outranks_pending_clicks() {
        let mut app = demo_app();
        app.post(AppEvent::Navigate {
            route: routes::MAIN.to_string(),
        })
        .unwrap();
        app.advance(500.0).unwrap();

        app.post(AppEvent::Click {
            region: "Main/card0".to_string(),
        })
        .unwrap();
        app.post(AppEvent::Quit).unwrap();
        app.advance(16.0).unwrap();

        // The quit was drained first; the click still ran afterwards in the
        // same pump.
        assert!(!app.is_running());
    }
}
