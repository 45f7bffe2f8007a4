//! Error types for Prism Transit.
//!
//! The taxonomy is deliberately small: the animation engine has no I/O and no
//! external resources, so every failure here is a programming or
//! configuration error and is surfaced synchronously to the caller, never
//! clamped or retried.

use thiserror::Error;

/// Errors from the animation engine.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MotionError {
    /// An [`AnimationSpec`](crate::animation::AnimationSpec) was configured
    /// with a non-positive or non-finite duration.
    #[error("animation duration must be positive and finite, got {duration_ms} ms")]
    InvalidDuration {
        /// The rejected duration.
        duration_ms: f32,
    },

    /// A negative or non-finite time delta was passed to `tick`.
    #[error("tick delta must be non-negative and finite, got {delta_ms} ms")]
    InvalidDelta {
        /// The rejected delta.
        delta_ms: f32,
    },
}

/// Errors from the navigation router.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// The requested route name is not in the route table.
    #[error("no route registered under {name:?}")]
    UnknownRoute {
        /// The unresolved route name.
        name: String,
    },
}

/// The main error type for application-level operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitError {
    /// Animation engine error.
    #[error("animation error: {0}")]
    Motion(#[from] MotionError),

    /// Navigation error.
    #[error("router error: {0}")]
    Router(#[from] RouterError),

    /// Event queue error.
    #[error("event queue error: {0}")]
    Queue(#[from] prism_transit_core::QueueError),
}
