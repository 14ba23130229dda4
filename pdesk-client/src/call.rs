//! Recorded-call resource client

use std::sync::Arc;

use pdesk_common::api::types::ListResponse;
use pdesk_common::format::format_phone_number;
use pdesk_common::record::{
    flatten, has_changes, unflatten_call, FlatRecord, OWNER_INFO_FIELDS, PROPERTY_INFO_FIELDS,
    TENANT_INFO_FIELDS,
};
use serde_json::Value;

use crate::property::PropertyClient;
use crate::query::{CallFilters, ListQuery};
use crate::{Backend, ClientError, ListPage, SaveOutcome};

/// Client for `/calls/`
pub struct CallClient {
    backend: Arc<Backend>,
}

impl CallClient {
    pub fn new(backend: Arc<Backend>) -> Self {
        Self { backend }
    }

    /// One page of recorded calls.
    ///
    /// Each record's `customer_contact` is reformatted with dash
    /// grouping before it reaches the caller.
    pub async fn list(
        &self,
        query: ListQuery,
        filters: &CallFilters,
    ) -> Result<ListPage, ClientError> {
        let page: ListResponse = self
            .backend
            .execute(
                self.backend.get("/calls/").query(&query).query(filters),
                "call list",
            )
            .await?;

        let results = page
            .results
            .iter()
            .map(|record| {
                let mut flat = flatten(record);
                normalize_contact(&mut flat);
                flat
            })
            .collect();

        Ok(ListPage {
            results,
            total_count: page.total_count,
        })
    }

    /// One call as a flat record
    pub async fn get(&self, job_id: &str) -> Result<Value, ClientError> {
        let record: Value = self
            .backend
            .execute(self.backend.get(&format!("/calls/{job_id}")), "call get")
            .await?;
        Ok(flatten(&record))
    }

    /// Create a call record from a flat record.
    ///
    /// Normally calls enter through the recording pipeline; this exists
    /// for backfilling a record by hand.
    pub async fn create(&self, flat: &Value) -> Result<Value, ClientError> {
        let record: Value = self
            .backend
            .execute(
                self.backend.post("/calls/").json(&unflatten_call(flat)),
                "call create",
            )
            .await?;
        Ok(flatten(&record))
    }

    /// Overwrite a call from a flat record
    pub async fn update(&self, job_id: &str, flat: &Value) -> Result<Value, ClientError> {
        let record: Value = self
            .backend
            .execute(
                self.backend
                    .put(&format!("/calls/{job_id}"))
                    .json(&unflatten_call(flat)),
                "call update",
            )
            .await?;
        Ok(flatten(&record))
    }

    /// Update only when the edit actually changes something
    pub async fn save_if_changed(
        &self,
        job_id: &str,
        original: &FlatRecord,
        edited: &FlatRecord,
    ) -> Result<SaveOutcome, ClientError> {
        if !has_changes(original, edited) {
            return Ok(SaveOutcome::NoChanges);
        }

        let mut merged = original.clone();
        for (name, value) in edited {
            merged.insert(name.clone(), value.clone());
        }

        let saved = self.update(job_id, &Value::Object(merged)).await?;
        Ok(SaveOutcome::Saved(saved))
    }

    /// Delete a call
    pub async fn delete(&self, job_id: &str) -> Result<(), ClientError> {
        self.backend
            .execute_empty(self.backend.delete(&format!("/calls/{job_id}")), "call delete")
            .await
    }

    /// Reflect a call's extracted property fields into its linked
    /// property record.
    ///
    /// Copies every populated extracted attribute (property leaves and
    /// contact groups, not call metadata) over the property's current
    /// flat record, then writes the merged result back. Fails when the
    /// call has no linked `property_id`.
    pub async fn reflect_to_property(
        &self,
        properties: &PropertyClient,
        call_flat: &FlatRecord,
    ) -> Result<Value, ClientError> {
        let property_id = call_flat
            .get("property_id")
            .and_then(Value::as_str)
            .ok_or_else(|| ClientError::Invalid("call has no linked property".to_string()))?;

        let property = properties.get(property_id).await?;
        let mut merged = property.as_object().cloned().unwrap_or_default();

        for name in PROPERTY_INFO_FIELDS
            .iter()
            .chain(OWNER_INFO_FIELDS.iter())
            .chain(TENANT_INFO_FIELDS.iter())
        {
            if let Some(value) = call_flat.get(*name) {
                if is_populated(value) {
                    merged.insert((*name).to_string(), value.clone());
                }
            }
        }

        properties.update(property_id, &Value::Object(merged)).await
    }
}

/// Reformat a flat record's `customer_contact` in place
fn normalize_contact(flat: &mut Value) {
    let Some(record) = flat.as_object_mut() else {
        return;
    };

    if let Some(Value::String(raw)) = record.get("customer_contact") {
        let formatted = match format_phone_number(raw) {
            Some(number) => Value::String(number),
            None => Value::Null,
        };
        record.insert("customer_contact".to_string(), formatted);
    }
}

fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_contact_regroups_digits() {
        let mut flat = json!({"customer_contact": "01098765432"});
        normalize_contact(&mut flat);
        assert_eq!(flat["customer_contact"], "010-9876-5432");
    }

    #[test]
    fn test_normalize_contact_empty_becomes_null() {
        let mut flat = json!({"customer_contact": ""});
        normalize_contact(&mut flat);
        assert_eq!(flat["customer_contact"], Value::Null);
    }

    #[test]
    fn test_normalize_contact_leaves_missing_field_alone() {
        let mut flat = json!({"customer_name": "이영희"});
        normalize_contact(&mut flat);
        assert!(flat.get("customer_contact").is_none());
    }

    #[test]
    fn test_is_populated() {
        assert!(!is_populated(&Value::Null));
        assert!(!is_populated(&json!("")));
        assert!(is_populated(&json!("서울시")));
        assert!(is_populated(&json!(0)));
    }

    #[tokio::test]
    async fn test_reflect_requires_linked_property() {
        let backend = Backend::new("http://127.0.0.1:9").expect("backend");
        let calls = CallClient::new(backend.clone());
        let properties = PropertyClient::new(backend);

        let call_flat = json!({"job_id": "j-1", "city": "서울시"})
            .as_object()
            .expect("object literal")
            .clone();

        let result = calls.reflect_to_property(&properties, &call_flat).await;
        assert!(matches!(result, Err(ClientError::Invalid(_))));
    }
}
