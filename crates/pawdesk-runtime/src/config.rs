#![forbid(unsafe_code)]

//! Deployment configuration for the slideout stack.
//!
//! Lets an installation retitle panels, change their widths, and change
//! the generic fallbacks without a rebuild.
//!
//! # Loading
//!
//! ```toml
//! # pawdesk-slideout.toml
//! fallback_title = "Details"
//! default_width = "lg"
//!
//! [panels.task-create]
//! title = "New Care Task"
//! width = "md"
//! ```
//!
//! ```rust,ignore
//! let config = SlideoutConfig::from_toml_file("pawdesk-slideout.toml")?;
//! let registry = config.registry()?;
//! ```
//!
//! # Defaults
//!
//! `SlideoutConfig::default()` reproduces the built-in registry and the
//! `"Panel"` / `md` fallbacks exactly.

use std::collections::BTreeMap;
#[cfg(feature = "policy-config")]
use std::path::Path;

#[cfg(feature = "policy-config")]
use serde::{Deserialize, Serialize};

use pawdesk_core::{ConfigRegistry, FALLBACK_TITLE, PanelConfig, PanelTypeId, SizeToken};

use crate::opener::OpenerDefaults;

/// Errors from loading or applying a [`SlideoutConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read slideout config: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "policy-config")]
    #[error("failed to parse slideout config TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse slideout config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("slideout config names unknown panel type `{0}`")]
    UnknownPanelType(String),
}

/// Slideout configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct SlideoutConfig {
    /// Title for panels with no caller or registry title. Default: "Panel".
    pub fallback_title: String,
    /// Width for panels with no caller or registry width. Default: md.
    pub default_width: SizeToken,
    /// Start from the built-in panel metadata. Default: true.
    pub builtin_panels: bool,
    /// Per-panel overrides keyed by panel type name.
    pub panels: BTreeMap<String, PanelConfig>,
}

impl Default for SlideoutConfig {
    fn default() -> Self {
        Self {
            fallback_title: FALLBACK_TITLE.to_owned(),
            default_width: SizeToken::DEFAULT,
            builtin_panels: true,
            panels: BTreeMap::new(),
        }
    }
}

impl SlideoutConfig {
    /// Load from a TOML string.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "policy-config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a file, choosing the format by extension (`.json` or TOML).
    #[cfg(feature = "policy-config")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    /// Validate the configuration.
    ///
    /// Returns a list of problems. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.fallback_title.trim().is_empty() {
            errors.push("fallback_title must not be empty".into());
        }

        for (name, panel) in &self.panels {
            if name.parse::<PanelTypeId>().is_err() {
                errors.push(format!("panels.{name}: unknown panel type"));
            }
            if panel.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
                errors.push(format!("panels.{name}.title must not be empty"));
            }
        }

        errors
    }

    /// Build the registry this configuration describes.
    pub fn registry(&self) -> Result<ConfigRegistry, ConfigError> {
        let base = if self.builtin_panels {
            ConfigRegistry::builtin()
        } else {
            ConfigRegistry::empty()
        };
        self.panels.iter().try_fold(base, |registry, (name, panel)| {
            let id = name
                .parse::<PanelTypeId>()
                .map_err(|_| ConfigError::UnknownPanelType(name.clone()))?;
            Ok(registry.with_override(id, panel.clone()))
        })
    }

    #[must_use]
    pub fn opener_defaults(&self) -> OpenerDefaults {
        OpenerDefaults {
            fallback_title: self.fallback_title.clone(),
            default_width: self.default_width,
        }
    }
}
