//! Card-stack testing utilities.
//!
//! Headless fixtures for exercising the engine without a rendering host:
//!
//! - [`ScriptedSource`] — an in-memory [`DataSource`] over string labels
//!   that records every `produce`/`rebind` call, so tests can assert both
//!   *what* the window holds and *how* the engine consumed the source.
//! - [`drain`] — pull every pending [`StackEvent`] into a `Vec`.
//! - [`reflow_targets`] — extract `Animate` payloads from drained events.
//!
//! # Quick start
//!
//! ```
//! use cardstack::{CardStack, StackConfig};
//! use cardstack_testing::{drain, ScriptedSource};
//!
//! let mut stack: CardStack<ScriptedSource, 2> = CardStack::new(StackConfig::new());
//! stack.set_source(ScriptedSource::with_items(5));
//! assert_eq!(stack.len(), 2);
//!
//! let events = drain(&mut stack);
//! assert_eq!(events.len(), 4); // Added + Animate per filled card
//! ```

#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]

use cardstack::{CardStack, CardTransform, DataSource, SlotId, StackEvent};

/// In-memory data source over string labels with call recording.
///
/// Item `i` produces the card `"item-{i}"` (or a caller-supplied label).
/// Every `produce` and `rebind` call is logged by index; hosts mutate the
/// item list through [`CardStack::source_mut`] and then deliver
/// `source_changed` / `source_invalidated`.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    items: Vec<String>,
    /// Indices passed to `produce`, in call order.
    pub produced: Vec<usize>,
    /// Indices passed to `rebind`, in call order.
    pub rebound: Vec<usize>,
}

impl ScriptedSource {
    /// Source with `count` items labelled `item-0` … `item-{count-1}`.
    #[must_use]
    pub fn with_items(count: usize) -> Self {
        Self {
            items: (0..count).map(|i| format!("item-{i}")).collect(),
            produced: Vec::new(),
            rebound: Vec::new(),
        }
    }

    /// Source with explicit labels.
    #[must_use]
    pub fn from_labels(labels: &[&str]) -> Self {
        Self {
            items: labels.iter().map(|label| (*label).to_owned()).collect(),
            produced: Vec::new(),
            rebound: Vec::new(),
        }
    }

    /// Replace the item list with `count` fresh labels (call
    /// `source_changed` afterwards to reconcile).
    pub fn reset_items(&mut self, count: usize) {
        self.items = (0..count).map(|i| format!("item-{i}")).collect();
    }

    /// Relabel the item at `index` in place.
    pub fn relabel(&mut self, index: usize, label: &str) {
        if let Some(item) = self.items.get_mut(index) {
            label.clone_into(item);
        }
    }

    /// Current item count.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl DataSource for ScriptedSource {
    type Card = String;

    fn count(&self) -> usize {
        self.items.len()
    }

    fn produce(&mut self, index: usize) -> String {
        self.produced.push(index);
        self.items.get(index).cloned().unwrap_or_default()
    }

    fn rebind(&mut self, index: usize, card: &mut String) {
        self.rebound.push(index);
        if let Some(item) = self.items.get(index) {
            card.clone_from(item);
        }
    }
}

/// Drain every pending event from `stack` into a `Vec`, oldest first.
pub fn drain<S, const N: usize>(stack: &mut CardStack<S, N>) -> Vec<StackEvent>
where
    S: DataSource,
{
    let mut events = Vec::new();
    while let Some(event) = stack.poll_event() {
        events.push(event);
    }
    events
}

/// Extract the `Animate` payloads from drained events, in emission order.
#[must_use]
pub fn reflow_targets(events: &[StackEvent]) -> Vec<(SlotId, CardTransform)> {
    events
        .iter()
        .filter_map(|event| match event {
            StackEvent::Animate {
                slot, transform, ..
            } => Some((*slot, *transform)),
            _ => None,
        })
        .collect()
}

/// The window's cards front-first, cloned out for assertions.
#[must_use]
pub fn window_cards<S, const N: usize>(stack: &CardStack<S, N>) -> Vec<S::Card>
where
    S: DataSource,
    S::Card: Clone,
{
    stack.state().iter().map(|slot| slot.card().clone()).collect()
}
