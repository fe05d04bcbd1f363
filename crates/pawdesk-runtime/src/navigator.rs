#![forbid(unsafe_code)]

//! Back and close.
//!
//! There are two kinds of "back". Internal back pops one level of stack
//! history. External back follows a caller-supplied `return_to.on_back`
//! exit hatch; it always wins over stack history, clears the whole stack,
//! and only then runs the callback.
//!
//! # Invariants
//!
//! 1. On a non-empty stack each call performs exactly one of pop-one or
//!    clear-all.
//! 2. The exit-hatch callback runs at most once, strictly after the stack is
//!    empty and subscribers have been told, so it may open a new panel
//!    without that panel being swept away by the clear.

use pawdesk_core::ConfigRegistry;
use tracing::debug_span;

use crate::store::StackStore;

/// What a navigation call did to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The stack was already empty.
    None,
    /// One level was removed; the stack is still open.
    Popped,
    /// The stack was emptied.
    Cleared,
    /// The stack was emptied and the top panel's exit hatch was invoked.
    Escaped,
}

impl Transition {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Popped => "popped",
            Self::Cleared => "cleared",
            Self::Escaped => "escaped",
        }
    }
}

/// Implements `go_back` and `close` over a shared [`StackStore`].
#[derive(Debug, Clone)]
pub struct Navigator {
    store: StackStore,
}

impl Navigator {
    #[must_use]
    pub fn new(store: StackStore) -> Self {
        Self { store }
    }

    /// Empty the stack. Idempotent.
    pub fn close(&self) -> Transition {
        let _span = transition_span("close", &self.store).entered();
        let transition = if self.store.clear().is_empty() {
            Transition::None
        } else {
            Transition::Cleared
        };
        record_outcome(&self.store, transition);
        transition
    }

    /// Go back one step, or leave through the top panel's exit hatch.
    pub fn go_back(&self) -> Transition {
        let Some(top) = self.store.peek() else {
            return Transition::None;
        };
        let _span = transition_span("back", &self.store).entered();

        if let Some(on_back) = top.props.on_back().cloned() {
            drop(top);
            self.store.clear();
            record_outcome(&self.store, Transition::Escaped);
            on_back.invoke();
            return Transition::Escaped;
        }

        let transition = if self.store.depth() > 1 {
            Transition::Popped
        } else {
            Transition::Cleared
        };
        self.store.pop();
        record_outcome(&self.store, transition);
        transition
    }

    /// Whether a back affordance should be offered.
    #[must_use]
    pub fn has_back_action(&self) -> bool {
        self.store.with(|stack| {
            stack.len() > 1 || stack.last().is_some_and(|top| top.has_exit_hatch())
        })
    }

    /// Breadcrumb text for where back leads.
    ///
    /// The top panel's `return_to.label` wins; otherwise the back label of
    /// the panel beneath it; otherwise nothing.
    #[must_use]
    pub fn previous_label(&self) -> Option<String> {
        self.store.with(|stack| {
            let top = stack.last()?;
            if let Some(label) = top.props.return_label() {
                return Some(label.to_owned());
            }
            let below = stack.len().checked_sub(2).map(|i| &stack[i])?;
            Some(ConfigRegistry::back_label(&below.panel_type).to_owned())
        })
    }
}

pub(crate) fn transition_span(op: &'static str, store: &StackStore) -> tracing::Span {
    let panel_type = store
        .with(|stack| stack.last().map(|top| top.panel_type.to_string()))
        .unwrap_or_default();
    debug_span!(
        "slideout.transition",
        op,
        panel_type = %panel_type,
        depth_before = store.depth() as u64,
        depth_after = tracing::field::Empty,
        outcome = tracing::field::Empty,
    )
}

pub(crate) fn record_outcome(store: &StackStore, transition: Transition) {
    let span = tracing::Span::current();
    span.record("depth_after", store.depth() as u64);
    span.record("outcome", transition.as_str());
}
