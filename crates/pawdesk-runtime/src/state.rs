#![forbid(unsafe_code)]

//! Stack entries.

use std::sync::atomic::{AtomicU64, Ordering};

use pawdesk_core::{PanelProps, PanelType, SizeToken};

/// Global counter for unique panel IDs.
static PANEL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for an opened panel. Useful as a render key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(u64);

impl PanelId {
    pub(crate) fn next() -> Self {
        Self(PANEL_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// One panel on the stack, with display metadata resolved at open time.
///
/// `title`, `description` and `width` never change after the panel is
/// pushed, even if the registry that produced them is later replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub id: PanelId,
    pub panel_type: PanelType,
    pub props: PanelProps,
    pub title: String,
    pub description: String,
    pub width: SizeToken,
}

impl PanelState {
    /// Whether this panel carries a caller-supplied back callback.
    #[must_use]
    pub fn has_exit_hatch(&self) -> bool {
        self.props.on_back().is_some()
    }
}
