//! Record types shared across the pdesk tools
//!
//! Two record kinds share one nesting convention: a `PropertyRecord` keeps
//! its attributes under `property_info`, a `CallRecord` keeps the
//! AI-extracted attributes under `extracted_property_info`, and both nest
//! counterpart contacts under `owner_info` / `tenant_info`.
//!
//! Every leaf is optional: the backend serves partially populated records,
//! and the unflatten transform emits explicit `null` for unset fields.
//! Monetary amounts (`price`, `deposit`, `premium`) are integers in 만원
//! units.

use serde::{Deserialize, Serialize};

/// Owner contact fields nested inside [`PropertyInfo`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerInfo {
    pub owner_name: Option<String>,
    pub owner_contact: Option<String>,
}

/// Tenant contact fields nested inside [`PropertyInfo`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantInfo {
    pub tenant_name: Option<String>,
    pub tenant_contact: Option<String>,
}

/// Property attributes, used both as `property_info` on a
/// [`PropertyRecord`] and as `extracted_property_info` on a [`CallRecord`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyInfo {
    pub property_name: Option<String>,
    pub price: Option<i64>,
    pub deposit: Option<i64>,
    pub loan_info: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub legal_dong: Option<String>,
    pub detail_address: Option<String>,
    pub full_address: Option<String>,
    pub transaction_type: Option<String>,
    pub property_type: Option<String>,
    pub floor: Option<String>,
    pub area: Option<String>,
    pub premium: Option<i64>,
    pub memo: Option<String>,
    pub moving_date: Option<String>,
    pub owner_property_memo: Option<String>,
    pub tenant_property_memo: Option<String>,
    pub owner_info: Option<OwnerInfo>,
    pub tenant_info: Option<TenantInfo>,
}

/// A property listing as served by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyRecord {
    pub property_id: Option<String>,
    pub created_at: Option<String>,
    pub status: Option<String>,
    pub job_id: Option<String>,
    pub property_info: Option<PropertyInfo>,
}

/// A recorded customer call with its AI-extracted property attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallRecord {
    pub job_id: Option<String>,
    pub file_name: Option<String>,
    pub customer_name: Option<String>,
    pub customer_contact: Option<String>,
    pub recording_date: Option<String>,
    pub text: Option<String>,
    pub summary_title: Option<String>,
    pub summary_content: Option<String>,
    pub property_id: Option<String>,
    pub call_memo: Option<String>,
    pub extracted_property_info: Option<PropertyInfo>,
}

// ========================================
// Call-store document shape (seed tool)
// ========================================
//
// The call database stores the raw pipeline output, not the CallRecord
// shape the API serves. Reconciliation between the two happens
// server-side.

/// Raw AI extraction fields as produced by the summarization pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extraction {
    pub call_number: Option<i64>,
    pub call_datetime: Option<String>,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub contact: Option<String>,
    pub property_type: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub neighborhood: Option<String>,
    pub complex_name: Option<String>,
    pub building: Option<String>,
    pub unit: Option<String>,
    pub price: Option<i64>,
    pub loan_status: Option<String>,
    pub move_in_date: Option<String>,
    pub call_summary: Option<String>,
    pub memo: Option<String>,
}

/// Summarization stage output stored on a call document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summarization {
    pub extraction: Extraction,
    pub file_name: Option<String>,
}

/// One document in the `calls` collection of the call store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallDocument {
    pub job_id: String,
    pub created_at: String,
    pub summarization: Summarization,
}
