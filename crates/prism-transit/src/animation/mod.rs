//! The transition animation engine.
//!
//! This module is the core of Prism Transit: a tick-driven state machine
//! ([`VisibilityTransition`]) that animates a boolean flag between two
//! endpoint [`StyleFrame`]s over a fixed [`AnimationSpec`], with an easing
//! curve applied to progress.
//!
//! # Example
//!
//! ```
//! use prism_transit::animation::{AnimationSpec, StyleFrame, VisibilityTransition};
//!
//! let mut fade = VisibilityTransition::new(
//!     AnimationSpec::new(500.0).unwrap(),
//!     StyleFrame::HIDDEN,
//!     StyleFrame::VISIBLE,
//! );
//!
//! fade.set_target(true);
//! let frame = fade.tick(250.0).unwrap();
//! assert_eq!(frame.frame.alpha, 0.5);
//! ```

mod easing;
mod enter_exit;
mod frame;
mod spec;
mod visibility;

pub use easing::{Easing, lerp_eased};
pub use enter_exit::EnterExitTransition;
pub use frame::StyleFrame;
pub use spec::{AnimationSpec, DEFAULT_DURATION_MS};
pub use visibility::{TickFrame, TransitionPhase, VisibilityTransition};
