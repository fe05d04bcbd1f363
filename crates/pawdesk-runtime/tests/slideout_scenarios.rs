#![forbid(unsafe_code)]

//! End-to-end slideout scenarios through the public controller API.
//!
//! Run:
//!   cargo test -p pawdesk-runtime --test slideout_scenarios

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pawdesk_runtime::core::{CacheKey, PanelProps, PanelTypeId, ReturnTo};
use pawdesk_runtime::{PanelController, QueryCache, SuccessOptions, Transition};
use serde_json::{Value, json};

fn controller() -> (PanelController, Rc<QueryCache>) {
    let cache = Rc::new(QueryCache::new());
    (PanelController::new(cache.clone()), cache)
}

fn open_n(ctl: &PanelController, n: usize) {
    for i in 0..n {
        ctl.open(
            PanelTypeId::ALL[i % PanelTypeId::ALL.len()],
            PanelProps::new().with("seq", i),
        );
    }
}

// ============================================================================
// Opening
// ============================================================================

#[test]
fn each_open_adds_exactly_one_and_becomes_top() {
    let (ctl, _) = controller();
    for i in 0..6 {
        let id = ctl.open(PanelTypeId::ALL[i], PanelProps::new());
        assert_eq!(ctl.store().depth(), i + 1);
        assert_eq!(ctl.store().peek().unwrap().id, id);
    }
}

#[test]
fn unknown_panel_type_opens_with_fallback_title() {
    let (ctl, _) = controller();
    ctl.open("unknown-type", PanelProps::new());
    let top = ctl.store().peek().unwrap();
    assert_eq!(top.title, "Panel");
    assert_eq!(top.panel_type.to_string(), "unknown-type");
}

// ============================================================================
// Close and back
// ============================================================================

#[test]
fn close_empties_from_any_depth() {
    for depth in [1, 2, 5] {
        let (ctl, _) = controller();
        open_n(&ctl, depth);
        assert_eq!(ctl.close(), Transition::Cleared);
        assert_eq!(ctl.store().depth(), 0);
    }
}

#[test]
fn back_at_depth_one_without_return_closes() {
    let (ctl, _) = controller();
    open_n(&ctl, 1);
    ctl.go_back();
    assert_eq!(ctl.store().depth(), 0);
}

#[test]
fn back_pops_to_second_from_top() {
    for depth in [2, 3, 7] {
        let (ctl, _) = controller();
        open_n(&ctl, depth);
        let below = ctl.store().peek_below_top().unwrap();

        assert_eq!(ctl.go_back(), Transition::Popped);
        assert_eq!(ctl.store().depth(), depth - 1);
        assert_eq!(ctl.store().peek().unwrap(), below);
    }
}

#[test]
fn back_with_return_to_clears_at_any_depth_and_calls_once() {
    for depth in [0, 1, 4] {
        let (ctl, _) = controller();
        open_n(&ctl, depth);

        let calls = Rc::new(Cell::new(0u32));
        let depth_seen = Rc::new(Cell::new(usize::MAX));
        let (c, d, store) = (Rc::clone(&calls), Rc::clone(&depth_seen), ctl.store().clone());
        ctl.open(
            PanelTypeId::TaskCreate,
            PanelProps::new().return_to(ReturnTo::new("Booking", move || {
                c.set(c.get() + 1);
                d.set(store.depth());
            })),
        );

        assert_eq!(ctl.go_back(), Transition::Escaped);
        assert_eq!(ctl.store().depth(), 0);
        assert_eq!(calls.get(), 1);
        assert_eq!(depth_seen.get(), 0);

        // Nothing left to go back to; the callback is not run again.
        assert_eq!(ctl.go_back(), Transition::None);
        assert_eq!(calls.get(), 1);
    }
}

#[test]
fn return_callback_may_reopen_a_panel() {
    let (ctl, _) = controller();
    let handle = ctl.clone();
    ctl.open(PanelTypeId::BookingEdit, PanelProps::new());
    ctl.open(
        PanelTypeId::TaskCreate,
        PanelProps::new().return_to(ReturnTo::new("Booking", move || {
            handle.open(PanelTypeId::BookingEdit, PanelProps::new().with("bookingId", "b1"));
        })),
    );

    ctl.go_back();

    let view = ctl.view();
    assert_eq!(view.depth, 1);
    let top = view.current_panel.unwrap();
    assert_eq!(top.panel_type, PanelTypeId::BookingEdit.into());
    assert_eq!(top.props.get_str("bookingId"), Some("b1"));
}

// ============================================================================
// Success
// ============================================================================

#[test]
fn success_pops_one_level_ignoring_return_to() {
    for depth in [2, 3, 6] {
        let (ctl, _) = controller();
        open_n(&ctl, depth - 1);
        let called = Rc::new(Cell::new(false));
        let c = Rc::clone(&called);
        ctl.open(
            PanelTypeId::PetCreate,
            PanelProps::new().return_to(ReturnTo::new("Owner", move || c.set(true))),
        );

        ctl.handle_success(&json!({}), SuccessOptions::new());
        assert_eq!(ctl.store().depth(), depth - 1);
        assert!(!called.get());
    }
}

#[test]
fn success_at_depth_one_closes() {
    let (ctl, _) = controller();
    open_n(&ctl, 1);
    assert_eq!(
        ctl.handle_success(&json!({}), SuccessOptions::new()),
        Transition::Cleared
    );
    assert!(!ctl.view().is_open);
}

#[test]
fn booking_from_owner_returns_to_owner() {
    let (ctl, _) = controller();
    ctl.open(
        PanelTypeId::OwnerEdit,
        PanelProps::new().with("owner", json!({ "id": "o1", "name": "Dana" })),
    );
    ctl.open(PanelTypeId::BookingCreate, PanelProps::new().with("ownerId", "o1"));
    assert_eq!(ctl.store().depth(), 2);

    ctl.handle_success(&json!({ "bookingId": "b1" }), SuccessOptions::new());

    assert_eq!(ctl.store().depth(), 1);
    assert_eq!(
        ctl.store().peek().unwrap().panel_type,
        PanelTypeId::OwnerEdit.into()
    );
}

#[test]
fn hook_receives_result_after_stack_collapses() {
    let (ctl, cache) = controller();
    cache.insert(CacheKey::collection("pets"));
    ctl.open(PanelTypeId::PetCreate, PanelProps::new());

    let seen = Rc::new(RefCell::new(None));
    let s = Rc::clone(&seen);
    let store = ctl.store().clone();
    let stale = Rc::clone(&cache);
    ctl.handle_success(
        &json!({ "petId": "p9" }),
        SuccessOptions::new()
            .invalidate([CacheKey::collection("pets")])
            .on_success(move |result: &Value| {
                *s.borrow_mut() = Some((
                    result["petId"].clone(),
                    store.depth(),
                    stale.stale_keys().len(),
                ));
            }),
    );

    assert_eq!(*seen.borrow(), Some((json!("p9"), 0, 1)));
    assert_eq!(cache.stale_keys(), [CacheKey::collection("pets")]);
    assert_eq!(ctl.store().depth(), 0);
}

#[test]
fn hook_opening_follow_up_replaces_finished_panel() {
    let (ctl, _) = controller();
    let handle = ctl.clone();
    ctl.open(PanelTypeId::BookingCreate, PanelProps::new());

    let t = ctl.complete(
        &json!({ "bookingId": "b1" }),
        SuccessOptions::new().on_success(move |result: &Value| {
            handle.open(
                PanelTypeId::PaymentRecord,
                PanelProps::new().with("bookingId", result["bookingId"].clone()),
            );
        }),
    );

    assert_eq!(t, Transition::Cleared);
    let view = ctl.view();
    assert_eq!(view.depth, 1);
    let top = view.current_panel.unwrap();
    assert_eq!(top.panel_type, PanelTypeId::PaymentRecord.into());
    assert_eq!(top.props.get_str("bookingId"), Some("b1"));
}

// ============================================================================
// Labels
// ============================================================================

#[test]
fn custom_return_label_wins_at_depth() {
    let (ctl, _) = controller();
    open_n(&ctl, 3);
    ctl.open(
        PanelTypeId::PaymentRecord,
        PanelProps::new().return_to(ReturnTo::label_only("Custom")),
    );
    let view = ctl.view();
    assert_eq!(view.previous_label.as_deref(), Some("Custom"));
    assert!(view.has_back_action);
}

#[test]
fn unknown_panel_beneath_uses_generic_label() {
    let (ctl, _) = controller();
    ctl.open("legacy-report", PanelProps::new());
    ctl.open(PanelTypeId::TaskCreate, PanelProps::new());
    assert_eq!(ctl.view().previous_label.as_deref(), Some("Panel"));
}

// ============================================================================
// Notification
// ============================================================================

#[test]
fn renderer_is_notified_once_per_transition() {
    let (ctl, _) = controller();
    let depths = Rc::new(RefCell::new(Vec::new()));
    let d = Rc::clone(&depths);
    let _sub = ctl.subscribe(move |stack| d.borrow_mut().push(stack.len()));

    ctl.open(PanelTypeId::OwnerEdit, PanelProps::new());
    ctl.open(PanelTypeId::BookingCreate, PanelProps::new());
    ctl.handle_success(&json!({}), SuccessOptions::new());
    ctl.go_back();
    ctl.close();

    assert_eq!(*depths.borrow(), [1, 2, 1, 0]);
}
