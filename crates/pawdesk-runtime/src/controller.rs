#![forbid(unsafe_code)]

//! The facade a UI mounts once.
//!
//! [`PanelController`] wires one [`StackStore`] to an [`Opener`], a
//! [`Navigator`] and a [`SuccessCoordinator`], and exposes the renderer
//! contract as a [`RendererView`]. Screens receive a controller handle
//! (cloning is cheap and shares the stack) instead of reaching for global
//! state.

use std::rc::Rc;

use pawdesk_core::{CacheKey, ConfigRegistry, PanelProps, PanelType, invalidation_keys};
use serde_json::Value;

use crate::config::{ConfigError, SlideoutConfig};
use crate::navigator::{Navigator, Transition};
use crate::opener::{Opener, OpenerDefaults};
use crate::state::{PanelId, PanelState};
use crate::store::{StackStore, Subscription};
use crate::success::{CacheInvalidator, SuccessCoordinator, SuccessOptions};

/// Everything a slideout renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererView {
    pub is_open: bool,
    pub current_panel: Option<PanelState>,
    pub has_back_action: bool,
    pub previous_label: Option<String>,
    pub depth: usize,
}

/// Slideout stack controller.
#[derive(Debug, Clone)]
pub struct PanelController {
    store: StackStore,
    opener: Opener,
    navigator: Navigator,
    success: SuccessCoordinator,
}

impl PanelController {
    /// A controller over the built-in registry.
    #[must_use]
    pub fn new(invalidator: Rc<dyn CacheInvalidator>) -> Self {
        Self::with_registry(
            ConfigRegistry::builtin(),
            OpenerDefaults::default(),
            invalidator,
        )
    }

    #[must_use]
    pub fn with_registry(
        registry: ConfigRegistry,
        defaults: OpenerDefaults,
        invalidator: Rc<dyn CacheInvalidator>,
    ) -> Self {
        let store = StackStore::new();
        Self {
            opener: Opener::with_defaults(store.clone(), Rc::new(registry), defaults),
            navigator: Navigator::new(store.clone()),
            success: SuccessCoordinator::new(store.clone(), invalidator),
            store,
        }
    }

    /// A controller configured from deployment settings.
    pub fn from_config(
        config: &SlideoutConfig,
        invalidator: Rc<dyn CacheInvalidator>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::with_registry(
            config.registry()?,
            config.opener_defaults(),
            invalidator,
        ))
    }

    // --- Operations ---

    pub fn open(&self, panel_type: impl Into<PanelType>, props: PanelProps) -> PanelId {
        self.opener.open(panel_type, props)
    }

    pub fn go_back(&self) -> Transition {
        self.navigator.go_back()
    }

    pub fn close(&self) -> Transition {
        self.navigator.close()
    }

    pub fn handle_success<R>(&self, result: &R, options: SuccessOptions<R>) -> Transition {
        self.success.handle_success(result, options)
    }

    /// Finish the top panel, invalidating the keys its type maps `result` to
    /// on top of any keys already in `options`.
    pub fn complete(&self, result: &Value, options: SuccessOptions<Value>) -> Transition {
        let derived: Vec<CacheKey> = self
            .store
            .with(|stack| {
                stack
                    .last()
                    .map(|top| invalidation_keys(&top.panel_type, result))
            })
            .unwrap_or_default();
        self.success.handle_success(result, options.invalidate(derived))
    }

    // --- Renderer contract ---

    #[must_use]
    pub fn view(&self) -> RendererView {
        let current_panel = self.store.peek();
        RendererView {
            is_open: current_panel.is_some(),
            has_back_action: self.navigator.has_back_action(),
            previous_label: self.navigator.previous_label(),
            depth: self.store.depth(),
            current_panel,
        }
    }

    /// Renderer close affordance.
    pub fn on_close(&self) -> Transition {
        self.close()
    }

    /// Renderer back affordance.
    pub fn on_back(&self) -> Transition {
        self.go_back()
    }

    pub fn subscribe(&self, callback: impl Fn(&[PanelState]) + 'static) -> Subscription {
        self.store.subscribe(callback)
    }

    #[must_use]
    pub fn store(&self) -> &StackStore {
        &self.store
    }

    #[must_use]
    pub fn registry(&self) -> &ConfigRegistry {
        self.opener.registry()
    }
}
