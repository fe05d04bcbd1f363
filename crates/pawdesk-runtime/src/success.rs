#![forbid(unsafe_code)]

//! Finishing a workflow.
//!
//! When a form submits successfully, [`SuccessCoordinator::handle_success`]
//! runs three steps in order:
//!
//! 1. Fan out every invalidation key to the [`CacheInvalidator`]. The
//!    coordinator never waits for the refetch; the panel closes immediately.
//! 2. Pop one level if the stack is deeper than one, otherwise close.
//! 3. Run the caller's `on_success` hook with the result.
//!
//! Step 2 never honours `return_to`: the finished panel is completing, not
//! going back, so success always unwinds through stack history. The hook
//! sees the stack already collapsed, so it may open a follow-up panel.
//!
//! # Failure Modes
//!
//! Collaborators are fire-and-continue. If an invalidation or the hook
//! panics, the panic is held, the remaining steps still run, and the first
//! panic is resumed at the end. Callers that catch it find the stack in a
//! consistent state.

use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};
use std::rc::Rc;

use pawdesk_core::CacheKey;
use serde_json::Value;

use crate::navigator::{Transition, record_outcome, transition_span};
use crate::store::StackStore;

/// Receives cache keys to refetch. Fire-and-forget: implementations that do
/// network work should queue it and return.
pub trait CacheInvalidator {
    fn invalidate(&self, key: &CacheKey);
}

impl<F: Fn(&CacheKey)> CacheInvalidator for F {
    fn invalidate(&self, key: &CacheKey) {
        self(key);
    }
}

/// Caller-supplied options for one successful completion.
pub struct SuccessOptions<R = Value> {
    pub invalidate: Vec<CacheKey>,
    pub on_success: Option<Box<dyn FnOnce(&R)>>,
}

impl<R> Default for SuccessOptions<R> {
    fn default() -> Self {
        Self {
            invalidate: Vec::new(),
            on_success: None,
        }
    }
}

impl<R> std::fmt::Debug for SuccessOptions<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuccessOptions")
            .field("invalidate", &self.invalidate)
            .field("on_success", &self.on_success.is_some())
            .finish()
    }
}

impl<R> SuccessOptions<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn invalidate(mut self, keys: impl IntoIterator<Item = CacheKey>) -> Self {
        self.invalidate.extend(keys);
        self
    }

    #[must_use]
    pub fn on_success(mut self, hook: impl FnOnce(&R) + 'static) -> Self {
        self.on_success = Some(Box::new(hook));
        self
    }
}

/// Couples form completion to cache invalidation and stack collapse.
#[derive(Clone)]
pub struct SuccessCoordinator {
    store: StackStore,
    invalidator: Rc<dyn CacheInvalidator>,
}

impl std::fmt::Debug for SuccessCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuccessCoordinator")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl SuccessCoordinator {
    #[must_use]
    pub fn new(store: StackStore, invalidator: Rc<dyn CacheInvalidator>) -> Self {
        Self { store, invalidator }
    }

    /// Invalidate, pop or close, then run the hook.
    pub fn handle_success<R>(&self, result: &R, options: SuccessOptions<R>) -> Transition {
        let _span = transition_span("success", &self.store).entered();
        let SuccessOptions {
            invalidate,
            on_success,
        } = options;

        let mut first_panic: Option<Box<dyn std::any::Any + Send>> = None;

        for key in &invalidate {
            tracing::debug!(target: "pawdesk.invalidate", key = %key, "invalidating cached query");
            let outcome = catch_unwind(AssertUnwindSafe(|| self.invalidator.invalidate(key)));
            if let Err(payload) = outcome
                && first_panic.is_none()
            {
                first_panic = Some(payload);
            }
        }

        let transition = match self.store.depth() {
            0 => Transition::None,
            1 => {
                self.store.clear();
                Transition::Cleared
            }
            _ => {
                self.store.pop();
                Transition::Popped
            }
        };
        record_outcome(&self.store, transition);

        if let Some(hook) = on_success {
            let outcome = catch_unwind(AssertUnwindSafe(|| hook(result)));
            if let Err(payload) = outcome
                && first_panic.is_none()
            {
                first_panic = Some(payload);
            }
        }

        if let Some(payload) = first_panic {
            tracing::warn!(
                target: "pawdesk.slideout",
                "success collaborator panicked after the stack transition was applied"
            );
            resume_unwind(payload);
        }
        transition
    }
}
