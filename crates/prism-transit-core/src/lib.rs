//! Core systems for Prism Transit.
//!
//! This crate provides the plumbing under the Prism Transit demo application:
//!
//! - **Event Queue**: A single-threaded, priority-ordered queue. User input
//!   and navigation requests are posted as discrete events and drained by the
//!   application between animation ticks.
//! - **Signal/Slot System**: Type-safe change notification between widgets
//!   and the application shell.
//! - **Logging**: `tracing` target constants for per-subsystem filtering.
//!
//! # Event Queue Example
//!
//! ```
//! use prism_transit_core::{EventPriority, EventQueue, QueueEvent};
//!
//! enum AppEvent {
//!     Click,
//!     Quit,
//! }
//!
//! impl QueueEvent for AppEvent {
//!     fn priority(&self) -> EventPriority {
//!         match self {
//!             Self::Click => EventPriority::High,
//!             Self::Quit => EventPriority::Critical,
//!         }
//!     }
//! }
//!
//! let mut queue = EventQueue::new();
//! queue.post(AppEvent::Click).unwrap();
//! queue.post(AppEvent::Quit).unwrap();
//!
//! // Quit is drained first, then the click.
//! let events = queue.drain();
//! assert!(matches!(events[0], AppEvent::Quit));
//! ```
//!
//! # Signal Example
//!
//! ```
//! use prism_transit_core::Signal;
//!
//! let route_changed = Signal::<String>::new();
//!
//! route_changed.connect(|route| {
//!     println!("now showing: {route}");
//! });
//!
//! route_changed.emit("Main".to_string());
//! ```

mod error;
mod event;
pub mod logging;
pub mod signal;

pub use error::QueueError;
pub use event::{EventPriority, EventQueue, QueueEvent};
pub use signal::{ConnectionId, Signal};
