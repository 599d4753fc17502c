//! Record envelope + `Fields` trait.
//!
//! The entity payload impls `Fields` to declare its name and patch type.
//! `Record<F>` wraps the payload with the store-managed `Id` and
//! `createdAt`, which no patch can reach.

use paperdesk_core::RecordId;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Trait implemented by entity payloads (customer, publication, ...).
pub trait Fields: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Partial update: every field optional, `None` leaves a field as is.
    type Patch: Send + 'static;

    /// Entity name used in log lines and error messages, e.g. "customer".
    const ENTITY: &'static str;

    /// Shallow-merge `patch` over `self`.
    fn merge(&mut self, patch: Self::Patch);
}

/// One stored entity. Serialized flat: `{"Id": 1, ...fields, "createdAt": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Record<F> {
    /// Store-assigned identifier.
    #[serde(rename = "Id")]
    pub id: RecordId,

    #[serde(flatten)]
    pub fields: F,

    /// Creation timestamp (RFC 3339), never changed after create.
    pub created_at: String,
}

impl<F: Fields> Record<F> {
    pub fn new(id: RecordId, fields: F, created_at: String) -> Self {
        Self {
            id,
            fields,
            created_at,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    // A minimal test payload (hand-built).
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub(crate) struct Thing {
        pub name: String,
        pub count: u32,
    }

    #[derive(Debug, Clone, Default)]
    pub(crate) struct ThingPatch {
        pub name: Option<String>,
        pub count: Option<u32>,
    }

    impl Fields for Thing {
        type Patch = ThingPatch;
        const ENTITY: &'static str = "thing";

        fn merge(&mut self, patch: ThingPatch) {
            if let Some(name) = patch.name {
                self.name = name;
            }
            if let Some(count) = patch.count {
                self.count = count;
            }
        }
    }

    pub(crate) fn thing(name: &str, count: u32) -> Thing {
        Thing {
            name: name.into(),
            count,
        }
    }

    #[test]
    fn record_serializes_flat() {
        let rec = Record::new(3, thing("Widget", 2), "2024-01-01T00:00:00.000Z".into());
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Id": 3,
                "name": "Widget",
                "count": 2,
                "createdAt": "2024-01-01T00:00:00.000Z",
            })
        );
    }

    #[test]
    fn record_deserializes_fixture_shape() {
        let rec: Record<Thing> = serde_json::from_str(
            r#"{"Id": 9, "name": "Gadget", "count": 1, "createdAt": "2023-05-05T10:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(rec.id, 9);
        assert_eq!(rec.fields, thing("Gadget", 1));
        assert_eq!(rec.created_at, "2023-05-05T10:00:00.000Z");
    }

    #[test]
    fn merge_only_touches_patched_fields() {
        let mut t = thing("Widget", 2);
        t.merge(ThingPatch {
            count: Some(5),
            ..Default::default()
        });
        assert_eq!(t, thing("Widget", 5));
    }
}
