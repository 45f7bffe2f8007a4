//! Prism Transit - entry/exit screen transitions and an expandable card.
//!
//! A demonstration of tick-driven visibility animations: screens slide and
//! expand in and out of view under a named-route router, and an expandable
//! card animates three coupled style properties while revealing nested
//! content. The animation engine ([`animation`]) is the core; everything
//! else is presentation glue around it.
//!
//! The engine is owned by the caller and advanced explicitly: no rendering
//! framework, no hidden clock, no reactive re-render loop. Each tick the
//! application drains queued input events, advances every live controller by
//! a wall-clock delta, and hands interpolated frames to a renderer.
//!
//! # Example
//!
//! ```
//! use prism_transit::app::{App, AppEvent};
//! use prism_transit::render::RecordingRenderer;
//! use prism_transit::router::{Router, routes};
//! use prism_transit::screen::MainScreen;
//!
//! let mut router = Router::new();
//! router.register(routes::MAIN, || Box::new(MainScreen::new()));
//!
//! let mut app = App::new(router, RecordingRenderer::new());
//! app.post(AppEvent::Navigate { route: routes::MAIN.to_string() }).unwrap();
//!
//! // Half of the 500 ms enter transition.
//! app.advance(250.0).unwrap();
//! let panel = app.renderer().find("Main/panel").unwrap();
//! assert_eq!(panel.frame.size, 400.0);
//! ```

pub mod animation;
pub mod app;
pub mod error;
pub mod render;
pub mod router;
pub mod screen;
pub mod widget;

pub use error::{MotionError, RouterError, TransitError};

/// Prelude module for Prism Transit.
///
/// Re-exports the most commonly used types for convenient importing:
///
/// ```ignore
/// use prism_transit::prelude::*;
/// ```
pub mod prelude {
    // ========================================================================
    // Animation Engine
    // ========================================================================

    pub use crate::animation::{
        AnimationSpec, Easing, EnterExitTransition, StyleFrame, TickFrame, TransitionPhase,
        VisibilityTransition,
    };

    // ========================================================================
    // Application Shell
    // ========================================================================

    pub use crate::app::{App, AppEvent};
    pub use crate::error::{MotionError, RouterError, TransitError};
    pub use crate::render::{DrawCommand, RecordingRenderer, Renderer, TracingRenderer};
    pub use crate::router::{Router, routes};
    pub use crate::screen::{FirstScreen, MainScreen, Screen, SecondScreen};
    pub use crate::widget::ExpandCard;

    // ========================================================================
    // Core Plumbing
    // ========================================================================

    pub use prism_transit_core::{EventPriority, EventQueue, QueueEvent, Signal};
}
