#![forbid(unsafe_code)]

//! Opening panels.
//!
//! [`Opener::open`] resolves display metadata once, at push time:
//!
//! | Field         | Precedence                                       |
//! |---------------|--------------------------------------------------|
//! | `title`       | `props.title` > registry title > `"Panel"`       |
//! | `description` | `props.description` > registry description > `""` |
//! | `width`       | `props.width` > registry width > default token   |
//!
//! Props are not validated. An unknown panel type is pushed with fallback
//! metadata; the renderer shows an "unknown panel type" message for it.

use std::rc::Rc;

use pawdesk_core::{ConfigRegistry, FALLBACK_TITLE, PanelConfig, PanelProps, PanelType, SizeToken};
use tracing::debug_span;

use crate::state::{PanelId, PanelState};
use crate::store::StackStore;

/// Fallbacks applied when neither caller nor registry supplies a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenerDefaults {
    pub fallback_title: String,
    pub default_width: SizeToken,
}

impl Default for OpenerDefaults {
    fn default() -> Self {
        Self {
            fallback_title: FALLBACK_TITLE.to_owned(),
            default_width: SizeToken::DEFAULT,
        }
    }
}

/// Resolves a panel type and caller props into a [`PanelState`] and pushes it.
#[derive(Debug, Clone)]
pub struct Opener {
    store: StackStore,
    registry: Rc<ConfigRegistry>,
    defaults: OpenerDefaults,
}

impl Opener {
    #[must_use]
    pub fn new(store: StackStore, registry: Rc<ConfigRegistry>) -> Self {
        Self::with_defaults(store, registry, OpenerDefaults::default())
    }

    #[must_use]
    pub fn with_defaults(
        store: StackStore,
        registry: Rc<ConfigRegistry>,
        defaults: OpenerDefaults,
    ) -> Self {
        Self {
            store,
            registry,
            defaults,
        }
    }

    /// Open a panel on top of the stack. Cannot fail.
    pub fn open(&self, panel_type: impl Into<PanelType>, props: PanelProps) -> PanelId {
        let state = self.resolve(panel_type.into(), props);
        let id = state.id;
        let _span = debug_span!(
            "slideout.transition",
            op = "open",
            panel_type = %state.panel_type,
            depth_before = self.store.depth() as u64,
            depth_after = tracing::field::Empty,
        )
        .entered();

        if state.panel_type.known().is_none() {
            tracing::warn!(
                target: "pawdesk.slideout",
                panel_type = %state.panel_type,
                "opening unknown panel type"
            );
        }

        self.store.push(state);
        tracing::Span::current().record("depth_after", self.store.depth() as u64);
        id
    }

    /// Build the stack entry without pushing it.
    #[must_use]
    pub fn resolve(&self, panel_type: PanelType, props: PanelProps) -> PanelState {
        let empty = PanelConfig::default();
        let config = self.registry.config_for(&panel_type).unwrap_or(&empty);

        let title = props
            .title
            .clone()
            .or_else(|| config.title.clone())
            .unwrap_or_else(|| self.defaults.fallback_title.clone());
        let description = props
            .description
            .clone()
            .or_else(|| config.description.clone())
            .unwrap_or_default();
        let width = props
            .width
            .or(config.width)
            .unwrap_or(self.defaults.default_width);

        PanelState {
            id: PanelId::next(),
            panel_type,
            props,
            title,
            description,
            width,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }
}
