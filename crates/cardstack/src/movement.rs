//! Movement controller — release-threshold detection and reflow targets for
//! the cards left behind when the front card is dragged out.

use crate::config::StackConfig;
use crate::events::{EventQueue, StackEvent};
use crate::state::StackState;
use crate::transform::card_transform;

/// Handle a drag-move signal for the front card.
///
/// The release threshold is boundary equality, not greater-or-equal: reflow
/// targets are computed only when `|offset|` equals the measured layout
/// width exactly. Until the layout has been measured the width is unknown
/// and the threshold can never be met.
///
/// At the threshold, every remaining slot below the dragged card is sent an
/// `Animate` toward its post-removal seat: the slot at rank `r` moves to
/// depth `r - 1`. The raw `Moved` notification always fires afterwards,
/// threshold reached or not.
pub(crate) fn card_moved<C, const N: usize>(
    state: &StackState<C, N>,
    config: &StackConfig,
    layout_width: Option<u32>,
    offset: i32,
    events: &mut EventQueue,
) {
    let Some(top) = state.top() else {
        return;
    };

    if layout_width.is_some_and(|width| offset.unsigned_abs() == width) {
        for (rank, slot) in state.iter().enumerate().skip(1) {
            events.emit(StackEvent::Animate {
                slot: slot.id(),
                transform: card_transform(rank.saturating_sub(1), config.y_multiplier),
                motion: config.motion,
            });
        }
    }

    events.emit(StackEvent::Moved { slot: top.id() });
}
