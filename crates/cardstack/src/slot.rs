//! Slot handles — the engine's opaque link to a host-side card visual.

/// Opaque identifier of one materialized card slot.
///
/// Ids are allocated by [`StackState`](crate::StackState) when a card is
/// materialized and never reused for the lifetime of that state. Hosts key
/// their visual containers by it; emitted events reference slots by id so
/// the host never needs to borrow into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotId(pub(crate) u32);

impl SlotId {
    /// Raw id value, for host-side keying.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// One materialized card: a slot id plus the host card value bound to one
/// data-source item.
///
/// Owned exclusively by [`StackState`](crate::StackState); rank is derived
/// from the slot's position in the window, never stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSlot<C> {
    pub(crate) id: SlotId,
    pub(crate) card: C,
}

impl<C> CardSlot<C> {
    /// The slot's id.
    #[must_use]
    pub const fn id(&self) -> SlotId {
        self.id
    }

    /// The bound card value.
    #[must_use]
    pub const fn card(&self) -> &C {
        &self.card
    }

    /// Mutable access to the bound card value (used for in-place re-binds).
    pub fn card_mut(&mut self) -> &mut C {
        &mut self.card
    }

    /// Consume the slot, returning the card value to the host.
    #[must_use]
    pub fn into_card(self) -> C {
        self.card
    }
}
