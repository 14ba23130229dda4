//! Listing query parameters
//!
//! Serialized straight onto the request URL; unset filters are skipped
//! entirely rather than sent as empty values.

use serde::Serialize;

/// Page window for the listing endpoints
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListQuery {
    pub limit: i64,
    pub offset: i64,
}

impl ListQuery {
    /// Window for a 1-indexed page number
    pub fn page(page: i64, per_page: i64) -> Self {
        let page = page.max(1);
        Self {
            limit: per_page,
            offset: (page - 1) * per_page,
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

/// Search filters for `GET /properties/`
#[derive(Debug, Clone, Default, Serialize)]
pub struct PropertyFilters {
    /// Match by 단지명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    /// Comma-separated names excluded from the 기타 bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_property_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
}

/// Search filters for `GET /calls/`
#[derive(Debug, Clone, Default, Serialize)]
pub struct CallFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_contact: Option<String>,
    /// Match by 단지명 of the extracted property
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_property_names: Option<String>,
    /// Midnight-normalized recording date (`YYYY-MM-DDT00:00:00`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_date: Option<String>,
}
