//! Stack events — typed, bounded fan-out to the host.
//!
//! The engine never calls back into the host. Every externally visible
//! consequence of a signal is queued as a [`StackEvent`] that the host
//! drains after the signal returns; any number of downstream consumers can
//! be fed from the drained events.

use heapless::Deque;

use crate::config::Motion;
use crate::slot::SlotId;
use crate::transform::CardTransform;

/// Capacity of the pending-event queue.
///
/// Sized for a full window refill (one `Added` plus one `Animate` per slot)
/// with generous headroom. Hosts are expected to drain between signals.
pub const EVENT_CAPACITY: usize = 64;

/// Notification emitted by the engine for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StackEvent {
    /// A card entered the window; payload is the new slot count.
    ///
    /// Intentionally inert: no recycling side effect is tied to adds.
    Added {
        /// Slot count after the add.
        count: usize,
    },
    /// The front card left the window via
    /// [`remove_top`](crate::CardStack::remove_top); payload is the
    /// remaining count. The incremental-replace pull runs directly after
    /// this emission.
    Removed {
        /// Slot count after the removal.
        count: usize,
    },
    /// The front card moved under drag. Fires on every move signal,
    /// threshold reached or not.
    Moved {
        /// The dragged (topmost) slot.
        slot: SlotId,
    },
    /// The front card was released.
    Released {
        /// The released (topmost) slot.
        slot: SlotId,
    },
    /// The host animation runtime should drive `slot` to `transform`.
    Animate {
        /// Slot to animate.
        slot: SlotId,
        /// Target transform.
        transform: CardTransform,
        /// Duration and easing of the transition.
        motion: Motion,
    },
}

/// Bounded FIFO of pending [`StackEvent`]s.
///
/// Emitting into a full queue silently drops the event (bounded-buffer
/// contract); [`EVENT_CAPACITY`] leaves ample headroom for any single
/// signal, so a drop means the host stopped draining.
#[derive(Debug)]
pub struct EventQueue {
    queue: Deque<StackEvent, EVENT_CAPACITY>,
}

impl EventQueue {
    /// Create an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: Deque::new(),
        }
    }

    /// Queue an event. Silent no-op when full.
    pub(crate) fn emit(&mut self, event: StackEvent) {
        self.queue.push_back(event).ok();
    }

    /// Pop the oldest pending event.
    pub fn poll(&mut self) -> Option<StackEvent> {
        self.queue.pop_front()
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_drain_in_emission_order() {
        let mut queue = EventQueue::new();
        queue.emit(StackEvent::Added { count: 1 });
        queue.emit(StackEvent::Removed { count: 0 });
        assert_eq!(queue.poll(), Some(StackEvent::Added { count: 1 }));
        assert_eq!(queue.poll(), Some(StackEvent::Removed { count: 0 }));
        assert_eq!(queue.poll(), None);
    }

    #[test]
    fn test_overflow_drops_newest_silently() {
        let mut queue = EventQueue::new();
        for i in 0..EVENT_CAPACITY + 5 {
            queue.emit(StackEvent::Added { count: i });
        }
        assert_eq!(queue.len(), EVENT_CAPACITY);
        // The first emission survived; the overflowing ones were dropped.
        assert_eq!(queue.poll(), Some(StackEvent::Added { count: 0 }));
    }
}
