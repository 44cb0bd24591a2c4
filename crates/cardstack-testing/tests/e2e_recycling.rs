//! End-to-end recycling tests: attach → fill → swipe-remove → backfill,
//! across exhaustion, repeat-wrap and detached states.

use cardstack::{CardStack, StackConfig, StackEvent};
use cardstack_testing::{drain, window_cards, ScriptedSource};

fn stack_with<const N: usize>(config: StackConfig, items: usize) -> CardStack<ScriptedSource, N> {
    let mut stack = CardStack::new(config);
    stack.set_source(ScriptedSource::with_items(items));
    drain(&mut stack);
    stack
}

#[test]
fn e2e_initial_fill_is_min_of_window_and_count() {
    let plenty = stack_with::<3>(StackConfig::new(), 10);
    assert_eq!(plenty.len(), 3);
    assert_eq!(plenty.state().cursor(), 3);

    let short = stack_with::<5>(StackConfig::new(), 2);
    assert_eq!(short.len(), 2);
    assert_eq!(short.state().cursor(), 2);

    let empty = stack_with::<4>(StackConfig::new(), 0);
    assert!(empty.is_empty());
    assert_eq!(empty.state().cursor(), 0);
}

#[test]
fn e2e_fill_consumes_items_from_the_front() {
    let stack = stack_with::<3>(StackConfig::new(), 10);
    let source = stack.source().expect("bound");
    assert_eq!(source.produced, vec![0, 1, 2]);
    // Newest push sits on top.
    assert_eq!(
        window_cards(&stack),
        vec!["item-2".to_owned(), "item-1".to_owned(), "item-0".to_owned()]
    );
}

#[test]
fn e2e_exhaustion_without_repeat_shrinks_to_zero() {
    // Window of 2 over 3 items: sizes after each remove are 2, 1, 0.
    let mut stack = stack_with::<2>(StackConfig::new(), 3);
    assert_eq!(stack.len(), 2);

    stack.remove_top().expect("first remove");
    assert_eq!(stack.len(), 2); // item-2 backfilled

    stack.remove_top().expect("second remove");
    assert_eq!(stack.len(), 1); // exhausted, no backfill

    stack.remove_top().expect("third remove");
    assert_eq!(stack.len(), 0);

    // Terminal state: nothing left to remove.
    assert!(stack.remove_top().is_err());
}

#[test]
fn e2e_cursor_never_exceeds_count_without_repeat() {
    let mut stack = stack_with::<2>(StackConfig::new(), 3);
    for _ in 0..3 {
        let cursor = stack.state().cursor();
        assert!(cursor <= 3, "cursor {cursor} ran past the source");
        stack.remove_top().expect("remove");
    }
    assert_eq!(stack.state().cursor(), 3);
}

#[test]
fn e2e_repeat_wraps_and_never_drains_the_window() {
    let mut stack = stack_with::<2>(StackConfig::new().repeat(true), 3);

    // Far more removes than items: the wrap path keeps refilling forever.
    for _ in 0..20 {
        stack.remove_top().expect("remove");
        assert_eq!(stack.len(), 2);
    }
}

#[test]
fn e2e_repeat_wrap_restarts_at_item_zero() {
    let mut stack = stack_with::<2>(StackConfig::new().repeat(true), 2);
    // cursor == count: the next remove wraps.
    stack.remove_top().expect("remove");
    assert_eq!(stack.state().cursor(), 1);
    let source = stack.source().expect("bound");
    assert_eq!(source.produced.last(), Some(&0));
    // The wrapped item covers the front.
    assert_eq!(window_cards(&stack).first().map(String::as_str), Some("item-0"));
}

#[test]
fn e2e_repeat_only_wraps_once_exhausted() {
    let mut stack = stack_with::<2>(StackConfig::new().repeat(true), 4);
    stack.remove_top().expect("remove");
    // Items remained, so the cursor advanced instead of wrapping.
    assert_eq!(stack.state().cursor(), 3);
    let source = stack.source().expect("bound");
    assert_eq!(source.produced.last(), Some(&2));
}

#[test]
fn e2e_remove_fires_removed_then_added_then_placement() {
    let mut stack = stack_with::<2>(StackConfig::new(), 5);

    stack.remove_top().expect("remove");
    let events = drain(&mut stack);
    assert!(matches!(events[0], StackEvent::Removed { count: 1 }));
    assert!(matches!(events[1], StackEvent::Added { count: 2 }));
    assert!(matches!(events[2], StackEvent::Animate { .. }));
}

#[test]
fn e2e_detached_stack_shrinks_silently() {
    let mut stack = stack_with::<3>(StackConfig::new(), 5);
    stack.take_source();

    stack.remove_top().expect("remove");
    assert_eq!(stack.len(), 2);
    let events = drain(&mut stack);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], StackEvent::Removed { count: 2 }));
}

#[test]
fn e2e_reattach_restarts_from_item_zero() {
    let mut stack = stack_with::<2>(StackConfig::new(), 5);
    stack.remove_top().expect("remove");
    drain(&mut stack);

    let old = stack.set_source(ScriptedSource::with_items(4));
    assert!(old.is_some());
    assert_eq!(stack.state().cursor(), 2);
    assert_eq!(
        window_cards(&stack),
        vec!["item-1".to_owned(), "item-0".to_owned()]
    );
}

#[test]
fn e2e_manual_push_coexists_with_source_window() {
    let mut stack = stack_with::<3>(StackConfig::new(), 2);

    let id = stack.push_card("wildcard".to_owned()).expect("push");
    assert_eq!(stack.top_id(), Some(id));
    assert_eq!(stack.len(), 3);
    // The manual card did not consume the source.
    assert_eq!(stack.source().expect("bound").produced, vec![0, 1]);
}
