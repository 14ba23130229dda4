//! Flat field map → nested record

use serde_json::{Map, Value};

use super::flatten::NestedKey;
use super::{
    safe_value, FlatRecord, CALL_TOP_FIELDS, OWNER_INFO_FIELDS, OWNER_INFO_KEY,
    PROPERTY_INFO_FIELDS, PROPERTY_TOP_FIELDS, TENANT_INFO_FIELDS, TENANT_INFO_KEY,
};

/// Rebuild a nested property record from a flat field map.
///
/// Every known field is emitted through [`safe_value`], so the output
/// carries the full nested shape with explicit `null` for anything the
/// form left unset, never an absent key. Fields outside the known set
/// are preserved on the top level of the result. Non-object input yields
/// `{}`.
///
/// # Examples
///
/// ```
/// use pdesk_common::record::unflatten_property;
/// use serde_json::json;
///
/// let rebuilt = unflatten_property(&json!({
///     "property_id": "p-1",
///     "city": "서울시",
///     "owner_name": ""
/// }));
///
/// assert_eq!(rebuilt["property_id"], "p-1");
/// assert_eq!(rebuilt["property_info"]["city"], "서울시");
/// // Empty string normalizes to null, and unset fields are explicit null.
/// assert_eq!(rebuilt["property_info"]["owner_info"]["owner_name"], json!(null));
/// assert_eq!(rebuilt["property_info"]["price"], json!(null));
/// ```
pub fn unflatten_property(flat: &Value) -> Value {
    let Some(flat) = flat.as_object() else {
        return Value::Object(Map::new());
    };

    let mut record = Map::new();
    for name in PROPERTY_TOP_FIELDS {
        record.insert(name.to_string(), safe_value(flat.get(name)));
    }
    record.insert(
        NestedKey::PropertyInfo.as_str().to_string(),
        nested_property_info(flat),
    );
    copy_unknown_fields(flat, &mut record, &PROPERTY_TOP_FIELDS);

    Value::Object(record)
}

/// Rebuild a nested call record from a flat field map.
///
/// Same contract as [`unflatten_property`], with the call record's ten
/// top-level fields and the attributes nested under
/// `extracted_property_info`.
pub fn unflatten_call(flat: &Value) -> Value {
    let Some(flat) = flat.as_object() else {
        return Value::Object(Map::new());
    };

    let mut record = Map::new();
    for name in CALL_TOP_FIELDS {
        record.insert(name.to_string(), safe_value(flat.get(name)));
    }
    record.insert(
        NestedKey::ExtractedPropertyInfo.as_str().to_string(),
        nested_property_info(flat),
    );
    copy_unknown_fields(flat, &mut record, &CALL_TOP_FIELDS);

    Value::Object(record)
}

/// Build the nested attribute object shared by both record kinds
fn nested_property_info(flat: &FlatRecord) -> Value {
    let mut info = Map::new();
    for name in PROPERTY_INFO_FIELDS {
        info.insert(name.to_string(), safe_value(flat.get(name)));
    }

    let mut owner = Map::new();
    for name in OWNER_INFO_FIELDS {
        owner.insert(name.to_string(), safe_value(flat.get(name)));
    }
    info.insert(OWNER_INFO_KEY.to_string(), Value::Object(owner));

    let mut tenant = Map::new();
    for name in TENANT_INFO_FIELDS {
        tenant.insert(name.to_string(), safe_value(flat.get(name)));
    }
    info.insert(TENANT_INFO_KEY.to_string(), Value::Object(tenant));

    Value::Object(info)
}

/// Preserve fields outside the known set on the result's top level.
///
/// The nested group key names are excluded so a stray `property_info`
/// left in a flat map cannot clobber the rebuilt nesting.
fn copy_unknown_fields(flat: &FlatRecord, record: &mut FlatRecord, top_fields: &[&str]) {
    for (name, value) in flat {
        if is_known_field(name, top_fields) {
            continue;
        }
        record.insert(name.clone(), value.clone());
    }
}

fn is_known_field(name: &str, top_fields: &[&str]) -> bool {
    top_fields.contains(&name)
        || PROPERTY_INFO_FIELDS.contains(&name)
        || OWNER_INFO_FIELDS.contains(&name)
        || TENANT_INFO_FIELDS.contains(&name)
        || name == NestedKey::PropertyInfo.as_str()
        || name == NestedKey::ExtractedPropertyInfo.as_str()
        || name == OWNER_INFO_KEY
        || name == TENANT_INFO_KEY
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unflatten_property_non_object_input() {
        assert_eq!(unflatten_property(&Value::Null), json!({}));
        assert_eq!(unflatten_property(&json!([1, 2])), json!({}));
    }

    #[test]
    fn test_unflatten_property_full_shape() {
        let rebuilt = unflatten_property(&json!({
            "property_id": "p-3",
            "status": "active",
            "property_name": "서초타워",
            "price": 20000,
            "owner_name": "김철수",
            "owner_contact": "010-2345-6789",
            "tenant_name": ""
        }));

        assert_eq!(rebuilt["property_id"], "p-3");
        assert_eq!(rebuilt["status"], "active");
        assert_eq!(rebuilt["created_at"], Value::Null);
        assert_eq!(rebuilt["job_id"], Value::Null);

        let info = &rebuilt["property_info"];
        assert_eq!(info["property_name"], "서초타워");
        assert_eq!(info["price"], 20000);
        assert_eq!(info["owner_info"]["owner_name"], "김철수");
        assert_eq!(info["owner_info"]["owner_contact"], "010-2345-6789");
        assert_eq!(info["tenant_info"]["tenant_name"], Value::Null);
        assert_eq!(info["tenant_info"]["tenant_contact"], Value::Null);

        // Every known nested leaf is present even when unset.
        for name in PROPERTY_INFO_FIELDS {
            assert!(
                info.get(name).is_some(),
                "missing nested field {name}"
            );
        }
    }

    #[test]
    fn test_unflatten_property_never_emits_missing_known_field() {
        let rebuilt = unflatten_property(&json!({}));
        let record = rebuilt.as_object().expect("object result");

        for name in PROPERTY_TOP_FIELDS {
            assert_eq!(record[name], Value::Null);
        }
        let info = record["property_info"].as_object().expect("nested object");
        for name in PROPERTY_INFO_FIELDS {
            assert_eq!(info[name], Value::Null);
        }
    }

    #[test]
    fn test_unflatten_call_full_shape() {
        let rebuilt = unflatten_call(&json!({
            "job_id": "j-9",
            "customer_name": "이영희",
            "customer_contact": "010-9876-5432",
            "city": "서울시",
            "district": "서초구",
            "call_memo": ""
        }));

        assert_eq!(rebuilt["job_id"], "j-9");
        assert_eq!(rebuilt["customer_name"], "이영희");
        assert_eq!(rebuilt["call_memo"], Value::Null);
        assert_eq!(rebuilt["summary_title"], Value::Null);

        let info = &rebuilt["extracted_property_info"];
        assert_eq!(info["city"], "서울시");
        assert_eq!(info["district"], "서초구");
        assert_eq!(info["owner_info"]["owner_name"], Value::Null);
        assert!(rebuilt.get("property_info").is_none());
    }

    #[test]
    fn test_unflatten_preserves_unknown_fields() {
        let rebuilt = unflatten_call(&json!({
            "job_id": "j-1",
            "call_number": 4,
            "search_rank": "상위"
        }));

        assert_eq!(rebuilt["call_number"], 4);
        assert_eq!(rebuilt["search_rank"], "상위");
    }

    #[test]
    fn test_unflatten_stray_nested_key_cannot_clobber() {
        let rebuilt = unflatten_property(&json!({
            "property_id": "p-1",
            "property_info": { "city": "옛값" },
            "city": "서울시"
        }));

        assert_eq!(rebuilt["property_info"]["city"], "서울시");
    }
}
