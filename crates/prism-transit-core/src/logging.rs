//! Logging facilities for Prism Transit.
//!
//! Prism Transit uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "prism_transit_core";
    /// Event queue target.
    pub const EVENT: &str = "prism_transit_core::event";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "prism_transit_core::signal";
    /// Animation engine target.
    pub const ANIMATION: &str = "prism_transit::animation";
    /// Widget target.
    pub const WIDGET: &str = "prism_transit::widget";
    /// Renderer backend target.
    pub const RENDER: &str = "prism_transit::render";
    /// Router target.
    pub const ROUTER: &str = "prism_transit::router";
    /// Application shell target.
    pub const APP: &str = "prism_transit::app";
}
