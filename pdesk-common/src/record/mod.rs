//! Flat/nested record transforms
//!
//! Forms and tables work with one flat field map per record; the backend
//! schema nests property attributes under `property_info` /
//! `extracted_property_info` with contact groups under `owner_info` /
//! `tenant_info`. This module converts between the two shapes.
//!
//! The transforms are dynamic (`serde_json::Map`) rather than typed:
//! flat maps come from user-edited forms and may carry fields outside the
//! known schema, which must survive the round trip.

mod flatten;
mod unflatten;

pub use flatten::{flatten, flatten_with, NestedKey};
pub use unflatten::{unflatten_call, unflatten_property};

use serde_json::{Map, Value};

/// A record in its flat, form-friendly shape
pub type FlatRecord = Map<String, Value>;

/// JSON key of the contact group for owners
pub const OWNER_INFO_KEY: &str = "owner_info";
/// JSON key of the contact group for tenants
pub const TENANT_INFO_KEY: &str = "tenant_info";

/// Leaf fields of `property_info` / `extracted_property_info`
pub const PROPERTY_INFO_FIELDS: [&str; 18] = [
    "property_name",
    "price",
    "deposit",
    "loan_info",
    "city",
    "district",
    "legal_dong",
    "detail_address",
    "full_address",
    "transaction_type",
    "property_type",
    "floor",
    "area",
    "premium",
    "memo",
    "moving_date",
    "owner_property_memo",
    "tenant_property_memo",
];

/// Leaf fields of `owner_info`
pub const OWNER_INFO_FIELDS: [&str; 2] = ["owner_name", "owner_contact"];

/// Leaf fields of `tenant_info`
pub const TENANT_INFO_FIELDS: [&str; 2] = ["tenant_name", "tenant_contact"];

/// Top-level fields of a property record
pub const PROPERTY_TOP_FIELDS: [&str; 4] = ["property_id", "created_at", "status", "job_id"];

/// Top-level fields of a call record
pub const CALL_TOP_FIELDS: [&str; 10] = [
    "job_id",
    "file_name",
    "customer_name",
    "customer_contact",
    "recording_date",
    "text",
    "summary_title",
    "summary_content",
    "property_id",
    "call_memo",
];

/// Normalize a field value for the backend schema.
///
/// Missing fields, JSON `null` and the empty string all become `null`;
/// the backend rejects absent keys, so unflatten emits every known field
/// through this function.
pub fn safe_value(value: Option<&Value>) -> Value {
    match value {
        None | Some(Value::Null) => Value::Null,
        Some(Value::String(s)) if s.is_empty() => Value::Null,
        Some(other) => other.clone(),
    }
}

/// Whether an edited flat map differs from the original.
///
/// A key counts as changed when the edited value differs from the
/// original's value for that key; a key absent from the original counts
/// as changed. Save paths use this to abort no-op updates before any
/// request is issued.
///
/// # Examples
///
/// ```
/// use pdesk_common::record::has_changes;
/// use serde_json::{json, Map, Value};
///
/// let original: Map<String, Value> =
///     json!({"memo": "a", "price": 100}).as_object().unwrap().clone();
/// let same = original.clone();
/// let mut edited = original.clone();
/// edited.insert("memo".into(), json!("b"));
///
/// assert!(!has_changes(&original, &same));
/// assert!(has_changes(&original, &edited));
/// ```
pub fn has_changes(original: &FlatRecord, edited: &FlatRecord) -> bool {
    edited
        .iter()
        .any(|(key, value)| original.get(key) != Some(value))
}
