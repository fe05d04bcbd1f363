#![forbid(unsafe_code)]

//! Properties a caller hands to a panel when opening it.
//!
//! Four keys are reserved and typed: `title`, `description`, `width` and
//! `return_to`. Everything else is an open map of JSON values that only the
//! form component for the panel's type interprets. The stack never looks
//! inside it.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::callback::Callback;
use crate::size::SizeToken;

/// Caller-supplied exit hatch for a panel opened outside the stack.
///
/// A panel opened straight from a detail page has no stack entry beneath it
/// to return to; `ReturnTo` names where "back" should lead instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnTo {
    /// Breadcrumb text shown next to the back affordance.
    pub label: String,
    pub on_back: Option<Callback>,
}

impl ReturnTo {
    /// A labelled return target with a callback.
    #[must_use]
    pub fn new(label: impl Into<String>, on_back: impl FnOnce() + 'static) -> Self {
        Self {
            label: label.into(),
            on_back: Some(Callback::new(on_back)),
        }
    }

    /// A label with no callback: changes breadcrumb text only.
    #[must_use]
    pub fn label_only(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_back: None,
        }
    }
}

/// Property bag for one panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelProps {
    pub title: Option<String>,
    pub description: Option<String>,
    pub width: Option<SizeToken>,
    pub return_to: Option<ReturnTo>,
    values: BTreeMap<String, Value>,
}

impl PanelProps {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn width(mut self, width: SizeToken) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn return_to(mut self, return_to: ReturnTo) -> Self {
        self.return_to = Some(return_to);
        self
    }

    /// Attach a free-form property for the form component.
    ///
    /// Reserved keys are routed to their typed fields when the value has the
    /// right shape; a `width` naming no known token is kept as a plain value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match (key.as_str(), &value) {
            ("title", Value::String(s)) => self.title = Some(s.clone()),
            ("description", Value::String(s)) => self.description = Some(s.clone()),
            ("width", Value::String(s)) if s.parse::<SizeToken>().is_ok() => {
                self.width = s.parse().ok();
            }
            _ => {
                self.values.insert(key, value);
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String property, if present and a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Free-form properties in key order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The exit-hatch callback, if one was supplied.
    #[must_use]
    pub fn on_back(&self) -> Option<&Callback> {
        self.return_to.as_ref().and_then(|r| r.on_back.as_ref())
    }

    #[must_use]
    pub fn return_label(&self) -> Option<&str> {
        self.return_to.as_ref().map(|r| r.label.as_str())
    }
}
