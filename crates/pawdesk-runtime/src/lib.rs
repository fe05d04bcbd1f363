#![forbid(unsafe_code)]

//! PawDesk Runtime
//!
//! The slideout navigation controller for the PawDesk dashboard. Any screen
//! can open a side panel; a panel can open another panel from inside its
//! form; the result is a stack of nested workflows the user walks back out
//! of, or finishes one level at a time.
//!
//! # Key Components
//!
//! - [`StackStore`] - Shared LIFO stack of [`PanelState`] with change notification
//! - [`Opener`] - Resolves display metadata and pushes new panels
//! - [`Navigator`] - `go_back` / `close`, including the `return_to` exit hatch
//! - [`SuccessCoordinator`] - Cache invalidation, caller hook, then pop or close
//! - [`PanelController`] - The facade a UI mounts once
//! - [`dispatch`] - Exhaustive panel-type to form dispatch for renderers
//!
//! # How it fits in the system
//! Types come from `pawdesk-core`. The renderer reads a [`RendererView`],
//! dispatches the top panel to a form, and calls back into the controller
//! when the user closes, goes back, or submits.

pub mod config;
pub mod controller;
pub mod dispatch;
pub mod navigator;
pub mod opener;
pub mod query_cache;
pub mod state;
pub mod store;
pub mod success;

pub use config::{ConfigError, SlideoutConfig};
pub use controller::{PanelController, RendererView};
pub use dispatch::{PanelForms, dispatch, unknown_panel_message};
pub use navigator::{Navigator, Transition};
pub use opener::{Opener, OpenerDefaults};
pub use query_cache::QueryCache;
pub use state::{PanelId, PanelState};
pub use store::{StackStore, Subscription};
pub use success::{CacheInvalidator, SuccessCoordinator, SuccessOptions};

pub use pawdesk_core as core;
