//! Signal/slot system for Prism Transit.
//!
//! A type-safe, Qt-inspired signal/slot mechanism for in-process change
//! notification. Widgets emit signals when their state settles or flips
//! (`toggled`, `route_changed`), and connected slots are invoked in response.
//!
//! Delivery is direct: slots run synchronously in the emitting thread. The
//! application is single-threaded and cooperative, so there is no queued or
//! cross-thread connection type.
//!
//! # Example
//!
//! ```
//! use prism_transit_core::Signal;
//!
//! let toggled = Signal::<bool>::new();
//!
//! let conn_id = toggled.connect(|&expanded| {
//!     println!("card expanded: {expanded}");
//! });
//!
//! toggled.emit(true);
//! toggled.disconnect(conn_id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot function to invoke.
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked synchronously
/// with a reference to the provided arguments, in connection order.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for
///   signals with no arguments.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Connection {
            slot: Arc::new(slot),
        })
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing. Useful during batch
    /// updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// If the signal is blocked, this does nothing.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "prism_transit_core::signal", "signal blocked, skipping emit");
            return;
        }

        // Clone the slot handles out so a slot may connect/disconnect on this
        // same signal without deadlocking on the connection table.
        let slots: Vec<_> = {
            let connections = self.connections.lock();
            tracing::trace!(
                target: "prism_transit_core::signal",
                connection_count = connections.len(),
                "emitting signal"
            );
            connections.iter().map(|(_, c)| c.slot.clone()).collect()
        };

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}

// Signals are shared between widgets and the application shell.
static_assertions::assert_impl_all!(Signal<bool>: Send, Sync);
static_assertions::assert_impl_all!(Signal<String>: Send, Sync);
