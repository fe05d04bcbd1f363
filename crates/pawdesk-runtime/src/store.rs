#![forbid(unsafe_code)]

//! Shared panel stack with change notification and version tracking.
//!
//! # Design
//!
//! [`StackStore`] keeps the ordered panel stack in shared, reference-counted
//! storage (`Rc<RefCell<..>>`). Every handle cloned from a store sees the
//! same stack. When the stack changes, all live subscribers are notified in
//! registration order, synchronously, before the mutating call returns.
//!
//! # Invariants
//!
//! 1. Strict LIFO: entries are appended by [`push`](StackStore::push) and
//!    only the top is ever removed individually.
//! 2. [`pop`](StackStore::pop) on a stack of depth 1 empties it; there is no
//!    "pop to nothing" distinct from [`clear`](StackStore::clear).
//! 3. `version` increments by exactly 1 per stack-changing mutation.
//!    Popping or clearing an empty stack changes nothing and notifies nobody.
//! 4. Subscribers always receive the stack as it is when they are called.
//!
//! # Failure Modes
//!
//! - **Re-entrant mutation**: a subscriber may push, pop, or clear. No borrow
//!   is held while callbacks run; the nested mutation notifies every
//!   subscriber before the outer notification loop resumes.
//! - **Subscriber leak**: callbacks live as long as their [`Subscription`]
//!   guard. Dead weak references are pruned lazily during notification.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug_span;
use web_time::Instant;

use crate::state::PanelState;

type CallbackRc = Rc<dyn Fn(&[PanelState])>;
type CallbackWeak = Weak<dyn Fn(&[PanelState])>;

struct StoreInner {
    stack: Vec<PanelState>,
    version: u64,
    /// Subscribers stored as weak references. Dead entries are pruned on notify.
    subscribers: Vec<CallbackWeak>,
}

/// Shared LIFO stack of open panels.
///
/// Cloning a `StackStore` creates another handle to the **same** stack.
pub struct StackStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl Clone for StackStore {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl Default for StackStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StackStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("StackStore")
            .field("depth", &inner.stack.len())
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl StackStore {
    /// Create an empty store at version 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                stack: Vec::new(),
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    // --- Stack Operations ---

    /// Append a panel. Always succeeds.
    pub fn push(&self, state: PanelState) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.stack.push(state);
            inner.version += 1;
        }
        self.notify();
    }

    /// Remove the top panel, or empty the stack when at most one remains.
    ///
    /// Returns the removed entries, top first.
    pub fn pop(&self) -> Vec<PanelState> {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            match inner.stack.len() {
                0 => return Vec::new(),
                1 => std::mem::take(&mut inner.stack),
                _ => inner.stack.pop().into_iter().collect(),
            }
        };
        self.bump_and_notify();
        removed
    }

    /// Empty the stack unconditionally.
    ///
    /// Returns the removed entries, top first.
    pub fn clear(&self) -> Vec<PanelState> {
        let mut removed = {
            let mut inner = self.inner.borrow_mut();
            if inner.stack.is_empty() {
                return Vec::new();
            }
            std::mem::take(&mut inner.stack)
        };
        removed.reverse();
        self.bump_and_notify();
        removed
    }

    // --- State Queries ---

    /// A clone of the top panel.
    #[must_use]
    pub fn peek(&self) -> Option<PanelState> {
        self.inner.borrow().stack.last().cloned()
    }

    /// A clone of the panel directly beneath the top.
    #[must_use]
    pub fn peek_below_top(&self) -> Option<PanelState> {
        let inner = self.inner.borrow();
        let len = inner.stack.len();
        len.checked_sub(2).map(|i| inner.stack[i].clone())
    }

    /// Access the stack (bottom to top) without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&[PanelState]) -> R) -> R {
        f(&self.inner.borrow().stack)
    }

    /// A clone of the whole stack, bottom to top.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PanelState> {
        self.inner.borrow().stack.clone()
    }

    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.inner.borrow().stack.len()
    }

    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.depth() > 0
    }

    /// Current version number. Increments by 1 on each stack-changing
    /// mutation. Useful for dirty-checking in render loops.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    // --- Subscriptions ---

    /// Subscribe to stack changes. The callback receives the stack, bottom
    /// to top, after each change.
    ///
    /// Dropping the returned [`Subscription`] unsubscribes the callback.
    pub fn subscribe(&self, callback: impl Fn(&[PanelState]) + 'static) -> Subscription {
        let strong: CallbackRc = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        self.inner.borrow_mut().subscribers.push(weak);
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Number of registered subscribers (including dead ones not yet pruned).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn bump_and_notify(&self) {
        self.inner.borrow_mut().version += 1;
        self.notify();
    }

    /// Notify live subscribers and prune dead ones.
    fn notify(&self) {
        // Collect live callbacks first (to avoid holding the borrow during calls).
        let callbacks: Vec<CallbackRc> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            inner
                .subscribers
                .iter()
                .filter_map(|w| w.upgrade())
                .collect()
        };

        if callbacks.is_empty() {
            return;
        }

        let start = Instant::now();
        let (mut seen_version, mut stack) = {
            let inner = self.inner.borrow();
            (inner.version, inner.stack.clone())
        };
        let _span = debug_span!(
            "slideout.notify",
            subscribers = callbacks.len() as u64,
            depth = stack.len() as u64,
            version = seen_version,
            duration_us = tracing::field::Empty
        )
        .entered();

        for cb in &callbacks {
            // A previous subscriber may have mutated the stack re-entrantly.
            let current = self.version();
            if current != seen_version {
                seen_version = current;
                stack = self.snapshot();
            }
            cb(&stack);
        }

        let duration_us = start.elapsed().as_micros() as u64;
        tracing::Span::current().record("duration_us", duration_us);
    }
}

/// RAII guard for a subscriber callback.
///
/// Dropping the `Subscription` drops the strong `Rc` to the callback, so the
/// `Weak` in the store's subscriber list fails to upgrade from then on.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
