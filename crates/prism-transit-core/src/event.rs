//! Single-threaded event queue for Prism Transit.
//!
//! User input and navigation requests are not delivered as re-entrant
//! callbacks; they are posted here as discrete events and drained by the
//! application between animation ticks. Within one drain, higher-priority
//! events come out first, and events of equal priority come out in the order
//! they were posted.

use std::collections::BinaryHeap;

use crate::error::QueueError;

/// Priority levels for queued events.
/// Higher priority events are processed first within the same drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum EventPriority {
    /// Lowest priority - idle work.
    Low = 0,
    /// Normal priority - most application events.
    Normal = 1,
    /// High priority - user input.
    High = 2,
    /// Critical priority - shutdown.
    Critical = 3,
}

impl Default for EventPriority {
    fn default() -> Self {
        Self::Normal
    }
}

/// An event that can be posted to an [`EventQueue`].
pub trait QueueEvent {
    /// The priority class this event is drained in.
    fn priority(&self) -> EventPriority {
        EventPriority::Normal
    }
}

/// A wrapper for prioritized events used in the internal heap.
#[derive(Debug)]
struct PrioritizedEvent<E> {
    event: E,
    priority: EventPriority,
    /// Sequence number for stable ordering of same-priority events.
    sequence: u64,
}

impl<E> PartialEq for PrioritizedEvent<E> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<E> Eq for PrioritizedEvent<E> {}

impl<E> PartialOrd for PrioritizedEvent<E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for PrioritizedEvent<E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Higher priority first, then lower sequence (older) first.
        // Note: BinaryHeap is a max-heap, so we want higher priority to be "greater".
        match self.priority.cmp(&other.priority) {
            std::cmp::Ordering::Equal => other.sequence.cmp(&self.sequence),
            ord => ord,
        }
    }
}

/// A priority-ordered event queue with stable FIFO order per priority class.
///
/// The queue is owned by a single thread; posting and taking are both O(log n)
/// and never block.
///
/// # Example
///
/// ```
/// use prism_transit_core::{EventPriority, EventQueue, QueueEvent};
///
/// enum DemoEvent {
///     Input,
///     Idle,
/// }
///
/// impl QueueEvent for DemoEvent {
///     fn priority(&self) -> EventPriority {
///         match self {
///             Self::Input => EventPriority::High,
///             Self::Idle => EventPriority::Low,
///         }
///     }
/// }
///
/// let mut queue = EventQueue::new();
/// queue.post(DemoEvent::Idle).unwrap();
/// queue.post(DemoEvent::Input).unwrap();
///
/// // Input outranks idle work even though it was posted later.
/// assert!(matches!(queue.take(), Some(DemoEvent::Input)));
/// ```
#[derive(Debug)]
pub struct EventQueue<E> {
    heap: BinaryHeap<PrioritizedEvent<E>>,
    next_sequence: u64,
    closed: bool,
}

impl<E: QueueEvent> EventQueue<E> {
    /// Create a new, empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            closed: false,
        }
    }

    /// Post an event to the queue.
    ///
    /// Fails with [`QueueError::Closed`] once [`close`](Self::close) has been
    /// called; events already in the queue remain drainable.
    pub fn post(&mut self, event: E) -> Result<(), QueueError> {
        if self.closed {
            tracing::debug!(target: "prism_transit_core::event", "dropping event posted to closed queue");
            return Err(QueueError::Closed);
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        let priority = event.priority();
        self.heap.push(PrioritizedEvent {
            event,
            priority,
            sequence,
        });
        Ok(())
    }

    /// Take the highest-priority pending event, if any.
    pub fn take(&mut self) -> Option<E> {
        self.heap.pop().map(|p| p.event)
    }

    /// Drain all pending events in processing order.
    pub fn drain(&mut self) -> Vec<E> {
        let mut events = Vec::with_capacity(self.heap.len());
        while let Some(event) = self.take() {
            events.push(event);
        }
        events
    }

    /// Close the queue. Subsequent posts fail; pending events stay drainable.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Check whether the queue has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Get the number of pending events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if the queue has no pending events.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<E: QueueEvent> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}
