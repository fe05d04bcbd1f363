#![forbid(unsafe_code)]

//! PawDesk Core
//!
//! Plain data for the PawDesk slideout stack: which panels exist, how they
//! are titled and sized, what a caller hands to a panel when opening it, and
//! which cached queries a finished workflow invalidates.
//!
//! # Role in PawDesk
//! `pawdesk-core` holds no state and performs no I/O. The stateful
//! controller (stack store, opener, navigator, success coordinator) lives in
//! `pawdesk-runtime` and is built entirely on the types defined here.

pub mod cache_key;
pub mod callback;
pub mod panel;
pub mod props;
pub mod registry;
pub mod size;

pub use cache_key::{CacheKey, invalidation_keys};
pub use callback::Callback;
pub use panel::{PanelType, PanelTypeId, ParsePanelTypeError};
pub use props::{PanelProps, ReturnTo};
pub use registry::{ConfigRegistry, FALLBACK_TITLE, PanelConfig};
pub use size::{ParseSizeTokenError, SizeToken};
