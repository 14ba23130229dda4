//! Property resource client

use std::sync::Arc;

use pdesk_common::api::types::ListResponse;
use pdesk_common::record::{flatten, has_changes, unflatten_property, FlatRecord};
use serde_json::Value;

use crate::query::{ListQuery, PropertyFilters};
use crate::{Backend, ClientError, ListPage, SaveOutcome};

/// Client for `/properties/`
///
/// Callers see flat records only: responses are flattened on arrival
/// and flat edits are rebuilt into the nested schema before send.
pub struct PropertyClient {
    backend: Arc<Backend>,
}

impl PropertyClient {
    pub fn new(backend: Arc<Backend>) -> Self {
        Self { backend }
    }

    /// One page of property listings
    pub async fn list(
        &self,
        query: ListQuery,
        filters: &PropertyFilters,
    ) -> Result<ListPage, ClientError> {
        let page: ListResponse = self
            .backend
            .execute(
                self.backend.get("/properties/").query(&query).query(filters),
                "property list",
            )
            .await?;

        Ok(ListPage {
            results: page.results.iter().map(flatten).collect(),
            total_count: page.total_count,
        })
    }

    /// One property as a flat record
    pub async fn get(&self, property_id: &str) -> Result<Value, ClientError> {
        let record: Value = self
            .backend
            .execute(
                self.backend.get(&format!("/properties/{property_id}")),
                "property get",
            )
            .await?;
        Ok(flatten(&record))
    }

    /// Create a property from a flat record
    pub async fn create(&self, flat: &Value) -> Result<Value, ClientError> {
        let record: Value = self
            .backend
            .execute(
                self.backend
                    .post("/properties/")
                    .json(&unflatten_property(flat)),
                "property create",
            )
            .await?;
        Ok(flatten(&record))
    }

    /// Overwrite a property from a flat record
    pub async fn update(&self, property_id: &str, flat: &Value) -> Result<Value, ClientError> {
        let record: Value = self
            .backend
            .execute(
                self.backend
                    .put(&format!("/properties/{property_id}"))
                    .json(&unflatten_property(flat)),
                "property update",
            )
            .await?;
        Ok(flatten(&record))
    }

    /// Update only when the edit actually changes something.
    ///
    /// Identical maps short-circuit to [`SaveOutcome::NoChanges`]
    /// without issuing a request.
    pub async fn save_if_changed(
        &self,
        property_id: &str,
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

        let saved = self
            .update(property_id, &Value::Object(merged))
            .await?;
        Ok(SaveOutcome::Saved(saved))
    }

    /// Delete a property
    pub async fn delete(&self, property_id: &str) -> Result<(), ClientError> {
        self.backend
            .execute_empty(
                self.backend.delete(&format!("/properties/{property_id}")),
                "property delete",
            )
            .await
    }
}
