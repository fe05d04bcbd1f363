#![forbid(unsafe_code)]

//! Cached-query keys and the per-workflow invalidation table.
//!
//! A [`CacheKey`] is an ordered list of segments (`["owners", "o-17"]`).
//! A shorter key matches every key it is a prefix of, so invalidating
//! `["owners"]` also covers each owner's detail entry.
//!
//! [`invalidation_keys`] maps a finished workflow and its result to the keys
//! it may have made stale. Identifier-bearing keys are only produced when
//! the result actually carries the identifier.

use std::fmt;

use serde_json::Value;

use crate::panel::{PanelType, PanelTypeId};

/// Identifier of one cached query result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheKey(Vec<String>);

impl CacheKey {
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// A single-segment key naming a whole collection.
    #[must_use]
    pub fn collection(name: &str) -> Self {
        Self(vec![name.to_owned()])
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether `self` covers `other` (equal, or a leading run of its segments).
    #[must_use]
    pub fn is_prefix_of(&self, other: &CacheKey) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// Read an identifier field from a workflow result.
///
/// Strings and integers are accepted; null, empty strings, and any other
/// shape count as absent.
fn id_field(result: &Value, field: &str) -> Option<String> {
    match result.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

fn detail(collection: &str, result: &Value, field: &str) -> Option<CacheKey> {
    id_field(result, field).map(|id| CacheKey::new([collection.to_owned(), id]))
}

/// Keys a finished workflow may have invalidated.
///
/// Pure: same inputs, same keys, in a stable order. Unknown panel types
/// invalidate nothing.
#[must_use]
pub fn invalidation_keys(panel_type: &PanelType, result: &Value) -> Vec<CacheKey> {
    let Some(id) = panel_type.known() else {
        return Vec::new();
    };

    let list = CacheKey::collection;
    let owner = || detail("owners", result, "ownerId");
    let pet = || detail("pets", result, "petId");
    let booking = || detail("bookings", result, "bookingId");

    let (lists, details): (Vec<CacheKey>, Vec<Option<CacheKey>>) = match id {
        PanelTypeId::BookingCreate => (
            vec![list("bookings"), list("dashboard"), list("calendar")],
            vec![owner(), pet()],
        ),
        PanelTypeId::BookingEdit => (
            vec![list("bookings"), list("dashboard"), list("calendar")],
            vec![booking(), owner(), pet()],
        ),
        PanelTypeId::OwnerCreate => (vec![list("owners")], vec![]),
        PanelTypeId::OwnerEdit => (vec![list("owners")], vec![owner()]),
        PanelTypeId::PetCreate => (vec![list("pets")], vec![owner()]),
        PanelTypeId::PetEdit => (vec![list("pets")], vec![pet(), owner()]),
        PanelTypeId::TaskCreate => (vec![list("tasks"), list("dashboard")], vec![booking()]),
        PanelTypeId::TaskEdit => (
            vec![list("tasks"), list("dashboard")],
            vec![detail("tasks", result, "taskId"), booking()],
        ),
        PanelTypeId::KennelAssign => (
            vec![list("kennels"), list("bookings"), list("calendar")],
            vec![booking()],
        ),
        PanelTypeId::PaymentRecord => (
            vec![list("payments"), list("invoices"), list("dashboard")],
            vec![booking(), owner()],
        ),
    };

    lists
        .into_iter()
        .chain(details.into_iter().flatten())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rendered(keys: &[CacheKey]) -> Vec<String> {
        keys.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn booking_create_with_ids() {
        let keys = invalidation_keys(
            &PanelTypeId::BookingCreate.into(),
            &json!({ "bookingId": "b1", "ownerId": "o1", "petId": 7 }),
        );
        assert_eq!(
            rendered(&keys),
            ["bookings", "dashboard", "calendar", "owners/o1", "pets/7"]
        );
    }

    #[test]
    fn missing_ids_are_omitted() {
        let keys = invalidation_keys(
            &PanelTypeId::BookingCreate.into(),
            &json!({ "bookingId": "b1", "ownerId": null, "petId": "" }),
        );
        assert_eq!(rendered(&keys), ["bookings", "dashboard", "calendar"]);
    }

    #[test]
    fn non_object_result_yields_only_collections() {
        let keys = invalidation_keys(&PanelTypeId::PetEdit.into(), &Value::Null);
        assert_eq!(rendered(&keys), ["pets"]);
    }

    #[test]
    fn unknown_type_invalidates_nothing() {
        let keys = invalidation_keys(&"unknown-type".into(), &json!({ "ownerId": "o1" }));
        assert!(keys.is_empty());
    }

    #[test]
    fn fractional_ids_are_rejected() {
        let keys = invalidation_keys(&PanelTypeId::OwnerEdit.into(), &json!({ "ownerId": 1.5 }));
        assert_eq!(rendered(&keys), ["owners"]);
    }

    #[test]
    fn every_known_type_invalidates_something() {
        for id in PanelTypeId::ALL {
            assert!(
                !invalidation_keys(&id.into(), &json!({})).is_empty(),
                "{id} invalidates nothing"
            );
        }
    }

    #[test]
    fn prefix_matching() {
        let owners = CacheKey::collection("owners");
        let detail = CacheKey::new(["owners", "o1"]);
        assert!(owners.is_prefix_of(&detail));
        assert!(detail.is_prefix_of(&detail));
        assert!(!detail.is_prefix_of(&owners));
        assert!(!CacheKey::collection("own").is_prefix_of(&owners));
    }

    proptest::proptest! {
        #[test]
        fn extending_a_key_keeps_the_prefix(
            head in proptest::collection::vec("[a-z0-9-]{1,8}", 0..4),
            tail in proptest::collection::vec("[a-z0-9-]{1,8}", 0..4),
        ) {
            let short = CacheKey::new(head.clone());
            let long = CacheKey::new(head.into_iter().chain(tail));
            proptest::prop_assert!(short.is_prefix_of(&long));
        }

        #[test]
        fn derivation_is_deterministic(owner in "[a-z0-9]{0,6}", pet in 0u32..1000) {
            let result = json!({ "ownerId": owner, "petId": pet });
            for id in PanelTypeId::ALL {
                let ty = PanelType::from(id);
                proptest::prop_assert_eq!(
                    invalidation_keys(&ty, &result),
                    invalidation_keys(&ty, &result)
                );
            }
        }
    }
}
