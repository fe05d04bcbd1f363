#![forbid(unsafe_code)]

//! Default display metadata per panel type.
//!
//! The registry is a pure lookup. Absent entries (and every
//! [`PanelType::Unknown`]) come back as `None` and the opener treats them as
//! an empty [`PanelConfig`], falling through to generic defaults.

use std::collections::BTreeMap;

use crate::panel::{PanelType, PanelTypeId};
use crate::size::SizeToken;

/// Title used when neither the caller nor the registry provides one.
pub const FALLBACK_TITLE: &str = "Panel";

/// Display defaults for one panel type. Every field is optional so that a
/// missing field falls through to the next precedence level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub width: Option<SizeToken>,
}

impl PanelConfig {
    #[must_use]
    pub fn new(title: &str, description: &str, width: SizeToken) -> Self {
        Self {
            title: Some(title.to_owned()),
            description: Some(description.to_owned()),
            width: Some(width),
        }
    }

    /// Fields set in `other` replace those in `self`.
    #[must_use]
    pub fn merged_with(mut self, other: PanelConfig) -> Self {
        if other.title.is_some() {
            self.title = other.title;
        }
        if other.description.is_some() {
            self.description = other.description;
        }
        if other.width.is_some() {
            self.width = other.width;
        }
        self
    }
}

/// Lookup table from panel type to [`PanelConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigRegistry {
    entries: BTreeMap<PanelTypeId, PanelConfig>,
}

impl ConfigRegistry {
    /// A registry with no entries; every panel gets fallback metadata.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The dashboard's built-in panel metadata.
    #[must_use]
    pub fn builtin() -> Self {
        use PanelTypeId as P;
        use SizeToken as W;

        let entries = [
            (
                P::BookingCreate,
                PanelConfig::new("Create Booking", "Reserve a kennel for a stay", W::Lg),
            ),
            (
                P::BookingEdit,
                PanelConfig::new("Edit Booking", "Change dates, kennel, or services", W::Lg),
            ),
            (
                P::OwnerCreate,
                PanelConfig::new("Add Owner", "Register a new pet owner", W::Md),
            ),
            (
                P::OwnerEdit,
                PanelConfig::new("Edit Owner", "Update contact and emergency details", W::Md),
            ),
            (
                P::PetCreate,
                PanelConfig::new("Add Pet", "Register a pet to an owner", W::Md),
            ),
            (
                P::PetEdit,
                PanelConfig::new("Edit Pet", "Update care notes, diet, and vaccinations", W::Md),
            ),
            (
                P::TaskCreate,
                PanelConfig::new("Create Task", "Schedule feeding, walks, or medication", W::Sm),
            ),
            (
                P::TaskEdit,
                PanelConfig::new("Edit Task", "Reschedule or reassign a care task", W::Sm),
            ),
            (
                P::KennelAssign,
                PanelConfig::new("Assign Kennel", "Move a booking to a different run", W::Md),
            ),
            (
                P::PaymentRecord,
                PanelConfig::new("Record Payment", "Apply a payment to an invoice", W::Md),
            ),
        ];

        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Replace (field by field) the defaults for `id`.
    #[must_use]
    pub fn with_override(mut self, id: PanelTypeId, config: PanelConfig) -> Self {
        let merged = self
            .entries
            .remove(&id)
            .unwrap_or_default()
            .merged_with(config);
        self.entries.insert(id, merged);
        self
    }

    #[must_use]
    pub fn config_for(&self, ty: &PanelType) -> Option<&PanelConfig> {
        ty.known().and_then(|id| self.entries.get(&id))
    }

    /// Breadcrumb label for a panel type.
    #[must_use]
    pub fn back_label(ty: &PanelType) -> &'static str {
        ty.known().map_or(FALLBACK_TITLE, PanelTypeId::back_label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
