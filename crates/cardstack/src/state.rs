//! `StackState` — the authoritative window of materialized slots plus the
//! adapter read cursor.
//!
//! The window is ordered front-first: the slot at index 0 is the topmost
//! (front) card, so a slot's index *is* its rank. `push` seats a new card at
//! the front; reconciliation appends reveal-last cards at the back. The
//! window never exceeds the const capacity `N`.

use heapless::Vec;
use thiserror_no_std::Error;

use crate::slot::{CardSlot, SlotId};

/// Errors for direct window mutation.
///
/// Both variants mark a broken caller contract: the engine's own paths gate
/// on capacity and emptiness before calling in, so surfacing one of these
/// means the host drove the stack outside its documented flow.
#[derive(Debug, Error, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StackError {
    /// `push` on a window already holding `N` slots.
    #[error("stack window is at capacity")]
    Capacity,
    /// `pop_front` on an empty window.
    #[error("stack window is empty")]
    Empty,
}

/// Materialized card window (front-first) plus the adapter cursor.
///
/// `N` is the maximum number of simultaneously materialized cards. The
/// cursor is the next adapter index to consume; it only moves through the
/// recycling paths and is meaningless after an invalidation until the next
/// source attach.
#[derive(Debug)]
pub struct StackState<C, const N: usize> {
    slots: Vec<CardSlot<C>, N>,
    cursor: usize,
    next_id: u32,
}

impl<C, const N: usize> StackState<C, N> {
    /// Create an empty window with the cursor at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            cursor: 0,
            next_id: 0,
        }
    }

    /// Seat `card` at the front (top) of the window and return its slot id.
    ///
    /// Returns `Err(StackError::Capacity)` when the window already holds `N`
    /// slots — callers gate on capacity first; this push does not
    /// self-throttle.
    pub fn push(&mut self, card: C) -> Result<SlotId, StackError> {
        let id = self.allocate_id();
        self.slots
            .insert(0, CardSlot { id, card })
            .map_err(|_| StackError::Capacity)?;
        Ok(id)
    }

    /// Remove and return the topmost slot.
    ///
    /// Returns `Err(StackError::Empty)` when the window is empty.
    pub fn pop_front(&mut self) -> Result<CardSlot<C>, StackError> {
        if self.slots.is_empty() {
            return Err(StackError::Empty);
        }
        Ok(self.slots.remove(0))
    }

    /// Seat `card` at the back (deepest position) of the window.
    ///
    /// Used by full reconciliation, where grown items reveal last instead of
    /// covering the front card.
    pub fn append_back(&mut self, card: C) -> Result<SlotId, StackError> {
        let id = self.allocate_id();
        self.slots
            .push(CardSlot { id, card })
            .map_err(|_| StackError::Capacity)?;
        Ok(id)
    }

    /// Drop every slot deeper than `len`, keeping the front `len` cards.
    pub fn truncate_back(&mut self, len: usize) {
        self.slots.truncate(len);
    }

    /// Number of materialized slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when no cards are materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 0-based distance of the slot from the top, or `None` when the id is
    /// not materialized. The topmost slot has rank 0.
    #[must_use]
    pub fn rank_of(&self, id: SlotId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.id == id)
    }

    /// The topmost slot, if any.
    #[must_use]
    pub fn top(&self) -> Option<&CardSlot<C>> {
        self.slots.first()
    }

    /// The slot at `rank`, if materialized.
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&CardSlot<C>> {
        self.slots.get(rank)
    }

    /// Mutable slot at `rank`, if materialized (used for in-place re-binds).
    pub fn get_mut(&mut self, rank: usize) -> Option<&mut CardSlot<C>> {
        self.slots.get_mut(rank)
    }

    /// Iterate slots front-first (the iteration index is the rank).
    pub fn iter(&self) -> core::slice::Iter<'_, CardSlot<C>> {
        self.slots.iter()
    }

    /// Drop every materialized slot. The cursor is left untouched and must
    /// be treated as unspecified until the next source attach.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Next adapter index to consume.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub(crate) fn advance_cursor(&mut self) {
        self.cursor = self.cursor.saturating_add(1);
    }

    fn allocate_id(&mut self) -> SlotId {
        let id = SlotId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}

impl<C, const N: usize> Default for StackState<C, N> {
    fn default() -> Self {
        Self::new()
    }
}
