//! Swipeable card-stack engine — a bounded window of materialized cards over
//! a lazily-consumed data source.
//!
//! # Modules
//!
//! - [`config`] — `StackConfig`, `Motion`, `Easing` and their defaults
//! - [`source`] — the `DataSource` contract
//! - [`slot`] — `SlotId` and `CardSlot`
//! - [`state`] — `StackState<C, N>`: slot window + adapter cursor
//! - [`transform`] — rank-derived card geometry
//! - [`events`] — `StackEvent` and the bounded event queue
//! - [`stack`] — `CardStack`, the engine facade
//!
//! The engine is `no_std` and allocation-free: the slot window is a
//! `heapless::Vec` bounded by a const generic, and emitted events sit in a
//! bounded queue the host drains. Rendering, gesture detection and the
//! animation runtime are host concerns; the engine only decides *what* the
//! stack holds and *where* each card should animate to.
//!
//! # Example
//!
//! ```
//! use cardstack::{CardStack, DataSource, StackConfig, StackEvent};
//!
//! struct Numbers(usize);
//!
//! impl DataSource for Numbers {
//!     type Card = usize;
//!     fn count(&self) -> usize {
//!         self.0
//!     }
//!     fn produce(&mut self, index: usize) -> usize {
//!         index
//!     }
//! }
//!
//! let mut stack: CardStack<Numbers, 3> = CardStack::new(StackConfig::new());
//! stack.set_source(Numbers(10));
//! assert_eq!(stack.len(), 3);
//!
//! // Host drains the queue and applies the entry placements.
//! while let Some(event) = stack.poll_event() {
//!     if let StackEvent::Animate { slot, transform, .. } = event {
//!         let _ = (slot, transform);
//!     }
//! }
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]
#![warn(missing_docs)]

pub mod config;
pub mod events;
pub mod slot;
pub mod source;
pub mod stack;
pub mod state;
pub mod transform;

mod movement;
mod recycle;

// Top-level re-exports for convenience
pub use config::{
    Easing, Motion, StackConfig, DEFAULT_STACK_SIZE, DEFAULT_Y_MULTIPLIER, SWIPE_DURATION_MS,
};
pub use events::{EventQueue, StackEvent, EVENT_CAPACITY};
pub use slot::{CardSlot, SlotId};
pub use source::DataSource;
pub use stack::{CardStack, DefaultStack};
pub use state::{StackError, StackState};
pub use transform::{card_transform, CardTransform, SCALE_TAPER};
