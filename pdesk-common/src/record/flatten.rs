//! Nested record → flat field map

use serde_json::{Map, Value};

use super::{FlatRecord, OWNER_INFO_KEY, TENANT_INFO_KEY};

/// Which nested sub-object a record carries its property attributes in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestedKey {
    /// `property_info` on a property record
    PropertyInfo,
    /// `extracted_property_info` on a call record
    ExtractedPropertyInfo,
}

impl NestedKey {
    /// JSON key name of this nested sub-object
    pub fn as_str(self) -> &'static str {
        match self {
            NestedKey::PropertyInfo => "property_info",
            NestedKey::ExtractedPropertyInfo => "extracted_property_info",
        }
    }

    /// Detect which nested sub-object a record carries.
    ///
    /// `property_info` wins when both keys are present. Only keys holding
    /// an object count; a `null` placeholder does not select the key.
    pub fn detect(record: &FlatRecord) -> Option<NestedKey> {
        [NestedKey::PropertyInfo, NestedKey::ExtractedPropertyInfo]
            .into_iter()
            .find(|key| record.get(key.as_str()).is_some_and(Value::is_object))
    }
}

/// Flatten a nested record into one flat field map.
///
/// - Non-object input (including `null`) → `{}`.
/// - Object without a nested sub-object → returned unchanged, so
///   already-flat and foreign-shaped inputs pass through.
/// - Otherwise all leaf fields of the nested sub-object and its contact
///   groups are promoted to the top level via [`flatten_with`].
///
/// # Examples
///
/// ```
/// use pdesk_common::record::flatten;
/// use serde_json::json;
///
/// let record = json!({
///     "property_id": "p-1",
///     "property_info": {
///         "city": "서울시",
///         "owner_info": { "owner_name": "홍길동" },
///         "tenant_info": { "tenant_name": null }
///     }
/// });
///
/// let flat = flatten(&record);
/// assert_eq!(flat["property_id"], "p-1");
/// assert_eq!(flat["city"], "서울시");
/// assert_eq!(flat["owner_name"], "홍길동");
/// assert!(flat.get("property_info").is_none());
///
/// assert_eq!(flatten(&json!(null)), json!({}));
/// assert_eq!(flatten(&json!({"foo": 1})), json!({"foo": 1}));
/// ```
pub fn flatten(record: &Value) -> Value {
    let Some(fields) = record.as_object() else {
        return Value::Object(Map::new());
    };

    match NestedKey::detect(fields) {
        Some(key) => flatten_with(fields, key),
        None => record.clone(),
    }
}

/// Flatten a nested record using an explicit nested key.
///
/// One shared implementation serves both record kinds. Merge order is
/// top-level fields, then the nested sub-object's leaves, then
/// `owner_info`, then `tenant_info`. Later groups win on a field name
/// collision. The nested key names themselves never appear in the
/// result.
pub fn flatten_with(record: &FlatRecord, key: NestedKey) -> Value {
    let mut flat = Map::new();

    for (name, value) in record {
        if name == NestedKey::PropertyInfo.as_str()
            || name == NestedKey::ExtractedPropertyInfo.as_str()
        {
            continue;
        }
        flat.insert(name.clone(), value.clone());
    }

    let Some(nested) = record.get(key.as_str()).and_then(Value::as_object) else {
        return Value::Object(flat);
    };

    for (name, value) in nested {
        if name == OWNER_INFO_KEY || name == TENANT_INFO_KEY {
            continue;
        }
        flat.insert(name.clone(), value.clone());
    }

    for group in [OWNER_INFO_KEY, TENANT_INFO_KEY] {
        if let Some(contacts) = nested.get(group).and_then(Value::as_object) {
            for (name, value) in contacts {
                flat.insert(name.clone(), value.clone());
            }
        }
    }

    Value::Object(flat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_null_input() {
        assert_eq!(flatten(&Value::Null), json!({}));
    }

    #[test]
    fn test_flatten_non_object_input() {
        assert_eq!(flatten(&json!("문자열")), json!({}));
        assert_eq!(flatten(&json!(17)), json!({}));
    }

    #[test]
    fn test_flatten_already_flat_passes_through() {
        let flat = json!({"foo": 1, "customer_name": "김철수"});
        assert_eq!(flatten(&flat), flat);
    }

    #[test]
    fn test_flatten_property_record() {
        let record = json!({
            "property_id": "p-77",
            "status": "active",
            "property_info": {
                "property_name": "역삼빌딩",
                "price": 15000,
                "owner_info": { "owner_name": "홍길동", "owner_contact": "01012345678" },
                "tenant_info": { "tenant_name": null, "tenant_contact": null }
            }
        });

        let flat = flatten(&record);
        assert_eq!(flat["property_id"], "p-77");
        assert_eq!(flat["status"], "active");
        assert_eq!(flat["property_name"], "역삼빌딩");
        assert_eq!(flat["price"], 15000);
        assert_eq!(flat["owner_name"], "홍길동");
        assert_eq!(flat["tenant_name"], Value::Null);
        assert!(flat.get("property_info").is_none());
        assert!(flat.get("owner_info").is_none());
        assert!(flat.get("tenant_info").is_none());
    }

    #[test]
    fn test_flatten_call_record_uses_extracted_key() {
        let record = json!({
            "job_id": "j-1",
            "customer_name": "이영희",
            "extracted_property_info": {
                "city": "서울시",
                "district": "서초구",
                "owner_info": { "owner_name": "김철수" }
            }
        });

        let flat = flatten(&record);
        assert_eq!(flat["job_id"], "j-1");
        assert_eq!(flat["city"], "서울시");
        assert_eq!(flat["owner_name"], "김철수");
        assert!(flat.get("extracted_property_info").is_none());
    }

    #[test]
    fn test_flatten_property_info_wins_over_extracted() {
        let record = json!({
            "property_info": { "city": "서울시" },
            "extracted_property_info": { "city": "부산시" }
        });

        let flat = flatten(&record);
        assert_eq!(flat["city"], "서울시");
        // The losing nested key is still removed from the result.
        assert!(flat.get("extracted_property_info").is_none());
    }

    #[test]
    fn test_flatten_null_nested_key_falls_through() {
        let record = json!({
            "property_info": null,
            "extracted_property_info": { "city": "부산시" }
        });

        let flat = flatten(&record);
        assert_eq!(flat["city"], "부산시");
    }

    #[test]
    fn test_flatten_nested_values_win_collisions() {
        // Nested content is spread after top-level fields, so it wins.
        let record = json!({
            "memo": "최상위",
            "property_info": {
                "memo": "내부",
                "owner_info": {}
            }
        });

        let flat = flatten(&record);
        assert_eq!(flat["memo"], "내부");
    }

    #[test]
    fn test_flatten_missing_contact_groups() {
        let record = json!({
            "property_info": { "price": 5000 }
        });

        let flat = flatten(&record);
        assert_eq!(flat["price"], 5000);
        assert!(flat.get("owner_name").is_none());
    }

    #[test]
    fn test_flatten_with_explicit_key_ignores_other() {
        let fields = json!({
            "job_id": "j-2",
            "extracted_property_info": { "floor": "3" }
        });
        let flat = flatten_with(
            fields.as_object().expect("object literal"),
            NestedKey::ExtractedPropertyInfo,
        );
        assert_eq!(flat["floor"], "3");
        assert_eq!(flat["job_id"], "j-2");
    }
}
