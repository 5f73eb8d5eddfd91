//! Property-based tests for placement and popover state
//!
//! Uses proptest to check the geometry bounds, the flip rule, toggling,
//! exclusive-open and listener hygiene over arbitrary inputs.

use std::rc::Rc;

use gearhire_core::geometry::{self, EDGE_MARGIN, FLIP_CLEARANCE};
use gearhire_core::{
    HeadlessAnchor, HeadlessViewport, OwnerId, PopoverController, RecordingNavigator, Rect,
    Region, RegionSettings, Size,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Viewports at least wide enough for the popover plus both margins
fn viewport_strategy() -> impl Strategy<Value = Size> {
    (480.0..2560.0f64, 320.0..1600.0f64).prop_map(|(w, h)| Size::new(w, h))
}

fn popover_strategy() -> impl Strategy<Value = Size> {
    (220.0..=240.0f64, 84.0..=96.0f64).prop_map(|(w, h)| Size::new(w, h))
}

/// Trigger rects inside a viewport of the given size
fn rect_in(viewport: Size) -> impl Strategy<Value = Rect> {
    (0.0..viewport.width, 0.0..viewport.height, 0.0..120.0f64, 0.0..80.0f64).prop_map(
        move |(left, top, w, h)| {
            Rect::new(top, left, (left + w).min(viewport.width), (top + h).min(viewport.height))
        },
    )
}

fn scene_strategy() -> impl Strategy<Value = (Size, Size, Rect)> {
    (viewport_strategy(), popover_strategy())
        .prop_flat_map(|(viewport, popover)| (Just(viewport), Just(popover), rect_in(viewport)))
}

/// Operations a user can perform on a region
#[derive(Debug, Clone)]
enum Op {
    Activate(usize),
    Close,
    Escape,
    OutsideClick,
    Scroll,
    SelectAction(usize),
}

fn ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            4 => (0..4usize).prop_map(Op::Activate),
            1 => Just(Op::Close),
            1 => Just(Op::Escape),
            1 => Just(Op::OutsideClick),
            1 => Just(Op::Scroll),
            1 => (0..2usize).prop_map(Op::SelectAction),
        ],
        0..max_ops,
    )
}

fn region_with_triggers(count: usize) -> (HeadlessViewport, PopoverController<HeadlessViewport>) {
    let port = HeadlessViewport::new(Size::new(1280.0, 800.0));
    let controller = PopoverController::new(
        Region::EventGrid,
        port.clone(),
        RegionSettings::defaults_for(Region::EventGrid),
        Rc::new(RecordingNavigator::new()),
    );
    for i in 0..count {
        let left = 40.0 + i as f64 * 280.0;
        controller.register_trigger(
            OwnerId::new(format!("event-{i}")),
            Rc::new(HeadlessAnchor::new(
                format!("trigger-event-{i}"),
                Some(Rect::new(300.0, left, left + 36.0, 336.0)),
            )),
        );
    }
    (port, controller)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Horizontal position always stays inside the margins
    #[test]
    fn left_is_clamped((viewport, popover, rect) in scene_strategy()) {
        let placement = geometry::resolve(rect, popover, viewport);
        prop_assert!(placement.left >= EDGE_MARGIN);
        prop_assert!(placement.left <= viewport.width - popover.width - EDGE_MARGIN);
    }

    /// Flip decision matches the rule exactly
    #[test]
    fn flip_rule_holds((viewport, popover, rect) in scene_strategy()) {
        let placement = geometry::resolve(rect, popover, viewport);
        let space_above = rect.top;
        let space_below = viewport.height - rect.bottom;
        prop_assert_eq!(
            placement.place_above,
            space_above > popover.height + FLIP_CLEARANCE && space_above > space_below
        );
        if placement.place_above {
            prop_assert!(placement.top + popover.height <= rect.top);
        } else {
            prop_assert!(placement.top >= rect.bottom);
        }
    }

    /// Centered fallback is always inside the margins
    #[test]
    fn fallback_is_bounded(viewport in viewport_strategy(), popover in popover_strategy()) {
        let placement = geometry::centered(popover, viewport);
        prop_assert!(placement.top >= EDGE_MARGIN);
        prop_assert!(placement.left >= EDGE_MARGIN);
        prop_assert!(placement.left <= viewport.width - popover.width - EDGE_MARGIN);
        prop_assert!(!placement.place_above);
    }

    /// activate twice closes, a third time reopens with a fresh placement
    #[test]
    fn double_activate_is_idempotent_toggle(index in 0..4usize) {
        let (port, controller) = region_with_triggers(4);
        let id = OwnerId::new(format!("event-{index}"));

        controller.activate(id.clone());
        let first = controller.placement();
        controller.activate(id.clone());
        prop_assert!(!controller.is_open());
        prop_assert_eq!(port.total_listeners(), 0);

        controller.activate(id.clone());
        prop_assert!(controller.is_open_for(&id));
        prop_assert_eq!(controller.placement(), first);
    }

    /// At most one owner is open, and listeners exist iff something is open
    #[test]
    fn exclusivity_and_listener_hygiene(ops in ops_strategy(40)) {
        let (port, controller) = region_with_triggers(4);
        let owners: Vec<OwnerId> = (0..4).map(|i| OwnerId::new(format!("event-{i}"))).collect();

        for op in ops {
            match op {
                Op::Activate(i) => { controller.activate(owners[i].clone()); }
                Op::Close => { controller.close(); }
                Op::Escape => port.key_up("Escape"),
                Op::OutsideClick => port.pointer_down(["page-body"]),
                Op::Scroll => port.scroll(),
                Op::SelectAction(i) => { controller.select_action(i).unwrap(); }
            }

            let open: Vec<_> = owners.iter().filter(|o| controller.is_open_for(o)).collect();
            prop_assert!(open.len() <= 1);

            let expected = if controller.is_open() { 4 } else { 0 };
            prop_assert_eq!(port.total_listeners(), expected);
            prop_assert_eq!(controller.placement().is_some(), controller.is_open());
        }

        controller.close();
        prop_assert_eq!(port.total_listeners(), 0);
    }
}
