//! `CardStack` — the engine facade.
//!
//! Owns the slot window, the bound data source, the one-shot layout width,
//! the configuration and the pending-event queue, and exposes the signals a
//! host delivers: layout measurement, drag move/release, front-card removal,
//! manual pushes, and data-source change notifications.
//!
//! Everything runs synchronously on the caller's thread in delivery order;
//! the engine spawns nothing and never calls back into the host.

use crate::config::{StackConfig, DEFAULT_STACK_SIZE};
use crate::events::{EventQueue, StackEvent};
use crate::movement;
use crate::recycle;
use crate::slot::SlotId;
use crate::source::DataSource;
use crate::state::{StackError, StackState};

/// A card stack with the default window size.
pub type DefaultStack<S> = CardStack<S, DEFAULT_STACK_SIZE>;

/// Swipeable card-stack engine over a data source `S`, holding at most `N`
/// materialized cards.
///
/// Attach a source with [`set_source`](Self::set_source), deliver input
/// signals as they happen, and drain [`StackEvent`]s with
/// [`poll_event`](Self::poll_event) after each signal.
#[derive(Debug)]
pub struct CardStack<S: DataSource, const N: usize = DEFAULT_STACK_SIZE> {
    config: StackConfig,
    state: StackState<S::Card, N>,
    source: Option<S>,
    layout_width: Option<u32>,
    events: EventQueue,
}

impl<S: DataSource, const N: usize> CardStack<S, N> {
    /// Create an empty, detached stack.
    #[must_use]
    pub const fn new(config: StackConfig) -> Self {
        Self {
            config,
            state: StackState::new(),
            source: None,
            layout_width: None,
            events: EventQueue::new(),
        }
    }

    /// The configuration this stack was built with.
    #[must_use]
    pub const fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Bind `source`, returning the previously bound one.
    ///
    /// Tears down the old binding first: the window is cleared, the cursor
    /// reset, and the new source's front items fill the window (up to
    /// `min(N, count)`), firing `Added` plus an entry placement per card.
    pub fn set_source(&mut self, source: S) -> Option<S> {
        let previous = self.source.take();
        self.state.clear();
        self.state.set_cursor(0);
        self.source = Some(source);
        if let Some(bound) = self.source.as_mut() {
            recycle::fill(&mut self.state, bound, &self.config, &mut self.events);
        }
        previous
    }

    /// Detach and return the bound source.
    ///
    /// Materialized cards stay in the window; with no source bound, removal
    /// backfills and change notifications become silent no-ops.
    pub fn take_source(&mut self) -> Option<S> {
        self.source.take()
    }

    /// Returns `true` while a source is bound.
    #[must_use]
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Shared access to the bound source.
    #[must_use]
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Mutable access to the bound source, for hosts that mutate the
    /// backing items before signalling [`source_changed`](Self::source_changed).
    pub fn source_mut(&mut self) -> Option<&mut S> {
        self.source.as_mut()
    }

    /// One-shot layout signal: record the measured width used by the
    /// release threshold. Later calls are ignored — the width is consumed
    /// exactly once, even if the host re-measures.
    pub fn layout_measured(&mut self, width: u32) {
        if self.layout_width.is_none() {
            self.layout_width = Some(width);
        }
    }

    /// The measured layout width, once [`layout_measured`](Self::layout_measured)
    /// has fired.
    #[must_use]
    pub fn layout_width(&self) -> Option<u32> {
        self.layout_width
    }

    /// Drag-move signal for the front card with the current horizontal
    /// offset in pixels. See the movement rules on
    /// [`StackEvent::Moved`] / [`StackEvent::Animate`]: reflow targets are
    /// computed only at exact threshold equality, and `Moved` always fires.
    /// No-op while the window is empty.
    pub fn card_moved(&mut self, offset: i32) {
        movement::card_moved(
            &self.state,
            &self.config,
            self.layout_width,
            offset,
            &mut self.events,
        );
    }

    /// Drag-release signal for the front card. Fires
    /// [`StackEvent::Released`]; no-op while the window is empty.
    pub fn card_released(&mut self) {
        if let Some(top) = self.state.top() {
            let slot = top.id();
            self.events.emit(StackEvent::Released { slot });
        }
    }

    /// Remove the front card (it was swiped away) and return its card value
    /// to the host.
    ///
    /// Fires [`StackEvent::Removed`] with the remaining count, then runs the
    /// incremental-replace pull: one item from the cursor, or a wrap to item
    /// 0 under `repeat`, or nothing once the source is exhausted. Detached
    /// stacks shrink without backfill.
    ///
    /// Returns `Err(StackError::Empty)` when there is no card to remove.
    pub fn remove_top(&mut self) -> Result<S::Card, StackError> {
        let slot = self.state.pop_front()?;
        self.events.emit(StackEvent::Removed {
            count: self.state.len(),
        });
        if let Some(source) = self.source.as_mut() {
            recycle::replace_removed(&mut self.state, source, &self.config, &mut self.events);
        }
        Ok(slot.into_card())
    }

    /// Manually seat `card` at the front of the window, bypassing the data
    /// source. Fires `Added` and an entry placement like the recycling
    /// paths do.
    ///
    /// Returns `Err(StackError::Capacity)` when the window already holds
    /// `N` cards.
    pub fn push_card(&mut self, card: S::Card) -> Result<SlotId, StackError> {
        recycle::push_with_events(&mut self.state, &self.config, &mut self.events, card)
    }

    /// The source's item set was replaced or updated in place: run a full
    /// reconciliation (re-bind kept slots, append growth at the back, drop
    /// shrunk slots from the back). Silent no-op while detached.
    pub fn source_changed(&mut self) {
        if let Some(source) = self.source.as_mut() {
            recycle::reconcile(&mut self.state, source, &mut self.events);
        }
    }

    /// The source's items are gone: drop every materialized card. No events
    /// fire; the cursor is unspecified until the next
    /// [`set_source`](Self::set_source). Silent no-op while detached.
    pub fn source_invalidated(&mut self) {
        if self.source.is_some() {
            self.state.clear();
        }
    }

    /// Number of materialized cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns `true` when no cards are materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Slot id of the front card, if any.
    #[must_use]
    pub fn top_id(&self) -> Option<SlotId> {
        self.state.top().map(|slot| slot.id())
    }

    /// 0-based distance of `id` from the top, or `None` when not
    /// materialized.
    #[must_use]
    pub fn rank_of(&self, id: SlotId) -> Option<usize> {
        self.state.rank_of(id)
    }

    /// Read-only view of the slot window and cursor.
    #[must_use]
    pub fn state(&self) -> &StackState<S::Card, N> {
        &self.state
    }

    /// Pop the oldest pending event.
    pub fn poll_event(&mut self) -> Option<StackEvent> {
        self.events.poll()
    }

    /// Number of events waiting to be drained.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}
