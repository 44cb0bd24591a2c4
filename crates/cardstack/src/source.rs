//! Data-source contract — item count plus card production and recycling.

/// Provider of card content for a [`CardStack`](crate::CardStack).
///
/// The engine consumes items lazily through a monotonically advancing
/// cursor; it never reads more than one item per signal outside the initial
/// fill. Sources signal mutations through the host, which forwards them as
/// [`source_changed`](crate::CardStack::source_changed) /
/// [`source_invalidated`](crate::CardStack::source_invalidated) calls.
pub trait DataSource {
    /// Host card value bound to each materialized slot.
    type Card;

    /// Number of items currently available.
    fn count(&self) -> usize;

    /// Produce a fresh card for the item at `index`.
    fn produce(&mut self, index: usize) -> Self::Card;

    /// Re-bind an existing card to the item at `index`, reusing its
    /// resources where possible.
    ///
    /// Called during full reconciliation for slots that keep their position.
    /// The default implementation replaces the card wholesale via
    /// [`produce`](Self::produce); sources with expensive cards should
    /// override it to update in place.
    fn rebind(&mut self, index: usize, card: &mut Self::Card) {
        *card = self.produce(index);
    }
}
