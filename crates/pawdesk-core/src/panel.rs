#![forbid(unsafe_code)]

//! Panel type identifiers.
//!
//! [`PanelTypeId`] is the closed set of workflows the dashboard can host in
//! a slideout. Panel types also arrive as strings (deep links, persisted
//! shortcuts), so [`PanelType`] wraps the closed set with an `Unknown` arm
//! that still opens and renders a fallback message instead of failing.

use std::fmt;
use std::str::FromStr;

/// A kind of panel known at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PanelTypeId {
    BookingCreate,
    BookingEdit,
    OwnerCreate,
    OwnerEdit,
    PetCreate,
    PetEdit,
    TaskCreate,
    TaskEdit,
    KennelAssign,
    PaymentRecord,
}

impl PanelTypeId {
    /// Every panel type, in declaration order.
    pub const ALL: [PanelTypeId; 10] = [
        Self::BookingCreate,
        Self::BookingEdit,
        Self::OwnerCreate,
        Self::OwnerEdit,
        Self::PetCreate,
        Self::PetEdit,
        Self::TaskCreate,
        Self::TaskEdit,
        Self::KennelAssign,
        Self::PaymentRecord,
    ];

    /// Stable kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BookingCreate => "booking-create",
            Self::BookingEdit => "booking-edit",
            Self::OwnerCreate => "owner-create",
            Self::OwnerEdit => "owner-edit",
            Self::PetCreate => "pet-create",
            Self::PetEdit => "pet-edit",
            Self::TaskCreate => "task-create",
            Self::TaskEdit => "task-edit",
            Self::KennelAssign => "kennel-assign",
            Self::PaymentRecord => "payment-record",
        }
    }

    /// Short display name used for "back to ..." breadcrumbs.
    ///
    /// Deliberately terser than the registry title.
    #[must_use]
    pub const fn back_label(self) -> &'static str {
        match self {
            Self::BookingCreate => "New Booking",
            Self::BookingEdit => "Booking",
            Self::OwnerCreate => "New Owner",
            Self::OwnerEdit => "Owner",
            Self::PetCreate => "New Pet",
            Self::PetEdit => "Pet",
            Self::TaskCreate => "New Task",
            Self::TaskEdit => "Task",
            Self::KennelAssign => "Kennel",
            Self::PaymentRecord => "Payment",
        }
    }
}

impl fmt::Display for PanelTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known panel type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePanelTypeError(pub String);

impl fmt::Display for ParsePanelTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown panel type: {}", self.0)
    }
}

impl std::error::Error for ParsePanelTypeError {}

impl FromStr for PanelTypeId {
    type Err = ParsePanelTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParsePanelTypeError(s.to_owned()))
    }
}

/// The type carried by a stack entry: a known id, or a name nobody handles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PanelType {
    Known(PanelTypeId),
    Unknown(String),
}

impl PanelType {
    /// Parse a panel name, keeping unrecognized names as [`PanelType::Unknown`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        name.parse()
            .map_or_else(|_| Self::Unknown(name.to_owned()), Self::Known)
    }

    /// The known id, if any.
    #[must_use]
    pub fn known(&self) -> Option<PanelTypeId> {
        match self {
            Self::Known(id) => Some(*id),
            Self::Unknown(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(id) => id.as_str(),
            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for PanelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PanelTypeId> for PanelType {
    fn from(id: PanelTypeId) -> Self {
        Self::Known(id)
    }
}

impl From<&str> for PanelType {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for PanelType {
    fn from(name: String) -> Self {
        match name.parse() {
            Ok(id) => Self::Known(id),
            Err(_) => Self::Unknown(name),
        }
    }
}
