#![forbid(unsafe_code)]

//! Invoke-at-most-once callback handles.
//!
//! Panel properties carry closures that point back into caller-owned state
//! (the `return_to.on_back` exit hatch). Stack snapshots are cloned freely
//! for subscribers, so the closure sits behind a shared slot: whoever takes
//! it first runs it, and every clone sees the slot empty afterwards.
//!
//! # Invariants
//!
//! 1. The wrapped closure runs at most once across all clones.
//! 2. The closure is dropped before it runs (taken out of the slot), so a
//!    callback that re-enters the owner of this handle never observes itself.
//! 3. Equality is identity: two handles are equal iff they share a slot.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

type Slot = Cell<Option<Box<dyn FnOnce()>>>;

/// Shared, single-shot closure handle.
#[derive(Clone)]
pub struct Callback {
    slot: Rc<Slot>,
}

impl Callback {
    #[must_use]
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self {
            slot: Rc::new(Cell::new(Some(Box::new(f)))),
        }
    }

    /// Run the closure if nobody has yet. Returns whether it ran.
    pub fn invoke(&self) -> bool {
        match self.slot.take() {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }

    /// Whether the closure is still waiting to run.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        let f = self.slot.take();
        let pending = f.is_some();
        self.slot.set(f);
        pending
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("pending", &self.is_pending())
            .finish()
    }
}
