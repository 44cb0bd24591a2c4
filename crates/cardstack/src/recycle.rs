//! Recycling engine — keeps the slot window consistent with the bound data
//! source under its three triggers: initial fill, incremental replace after
//! a removal, and full reconciliation after a bulk change.

use crate::config::StackConfig;
use crate::events::{EventQueue, StackEvent};
use crate::slot::SlotId;
use crate::source::DataSource;
use crate::state::{StackError, StackState};
use crate::transform::card_transform;

/// Seat `card` at the front of the window, firing `Added` and the
/// entry-placement `Animate` for the new slot.
///
/// The entry placement seats the incoming card at the window's depth before
/// the push, so a fill lays cards out in a visible cascade.
pub(crate) fn push_with_events<C, const N: usize>(
    state: &mut StackState<C, N>,
    config: &StackConfig,
    events: &mut EventQueue,
    card: C,
) -> Result<SlotId, StackError> {
    let depth = state.len();
    let id = state.push(card)?;
    events.emit(StackEvent::Added { count: state.len() });
    events.emit(StackEvent::Animate {
        slot: id,
        transform: card_transform(depth, config.y_multiplier),
        motion: config.motion,
    });
    Ok(id)
}

/// Initial fill: consume items from the front of the source until the
/// window holds `min(N, count)` cards.
///
/// Expects the cursor at 0 (a fresh attach). A zero-count source leaves the
/// window empty; the window is never padded past `count`.
pub(crate) fn fill<S, const N: usize>(
    state: &mut StackState<S::Card, N>,
    source: &mut S,
    config: &StackConfig,
    events: &mut EventQueue,
) where
    S: DataSource,
{
    while state.cursor() < N.min(source.count()) {
        let card = source.produce(state.cursor());
        // Always succeeds: the loop is bounded by the window capacity N.
        push_with_events(state, config, events, card).ok();
        state.advance_cursor();
    }
}

/// Incremental replace: backfill exactly one card after a removal.
///
/// Pulls the item at the cursor when the source still has one; otherwise
/// wraps the cursor to 0 when `repeat` is configured (and the source is
/// non-empty); otherwise does nothing — the terminal exhausted state, where
/// the window shrinks by one permanently.
pub(crate) fn replace_removed<S, const N: usize>(
    state: &mut StackState<S::Card, N>,
    source: &mut S,
    config: &StackConfig,
    events: &mut EventQueue,
) where
    S: DataSource,
{
    let count = source.count();
    if state.cursor() < count {
        let card = source.produce(state.cursor());
        // Always succeeds: a slot was just popped, so the window is below N.
        push_with_events(state, config, events, card).ok();
        state.advance_cursor();
    } else if config.repeat && count > 0 {
        state.set_cursor(0);
        let card = source.produce(0);
        // Always succeeds: same headroom as above.
        push_with_events(state, config, events, card).ok();
        state.set_cursor(1);
    }
}

/// Full reconciliation: bring the window back in sync after the source's
/// item set was replaced or updated in place.
///
/// Slots that keep their position are re-bound in place — no movement, no
/// events, no animation. When the source grew, new cards are appended at
/// the back of the window (they reveal last, not cover the front card),
/// each firing `Added` but no entry placement. When it shrank, the deepest
/// excess slots are dropped without `Removed` events — which is also why
/// reconciliation never triggers the incremental-replace or repeat-wrap
/// paths. The cursor is deliberately left untouched.
pub(crate) fn reconcile<S, const N: usize>(
    state: &mut StackState<S::Card, N>,
    source: &mut S,
    events: &mut EventQueue,
) where
    S: DataSource,
{
    let new_count = source.count();
    let current = state.len();
    let reuse = current.min(new_count);

    for index in 0..reuse {
        if let Some(slot) = state.get_mut(index) {
            source.rebind(index, slot.card_mut());
        }
    }

    if new_count > current {
        // Growth is capped by the window capacity.
        for index in current..new_count.min(N) {
            let card = source.produce(index);
            // Always succeeds: the loop is bounded by N.
            state.append_back(card).ok();
            events.emit(StackEvent::Added { count: state.len() });
        }
    } else if new_count < current {
        state.truncate_back(new_count);
    }
}
