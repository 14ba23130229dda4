//! List-line and record rendering

use pdesk_common::format::{comma_price, format_date_time, format_price};
use serde_json::Value;

/// String field of a flat record, `"-"` when unset
fn text<'a>(flat: &'a Value, key: &str) -> &'a str {
    flat.get(key).and_then(Value::as_str).unwrap_or("-")
}

/// Integer field of a flat record
fn number(flat: &Value, key: &str) -> Option<i64> {
    flat.get(key).and_then(Value::as_i64)
}

/// One summary line for a property listing
pub fn property_line(flat: &Value) -> String {
    format!(
        "{:<36}  {:<16}  {:<6}  {:>12}  {}",
        text(flat, "property_id"),
        text(flat, "property_name"),
        text(flat, "transaction_type"),
        format_price(number(flat, "price")),
        text(flat, "full_address"),
    )
}

/// One summary line for a recorded call
pub fn call_line(flat: &Value) -> String {
    let recorded = flat
        .get("recording_date")
        .and_then(Value::as_str)
        .and_then(format_date_time)
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:<36}  {:<10}  {:<15}  {:<22}  {}",
        text(flat, "job_id"),
        text(flat, "customer_name"),
        text(flat, "customer_contact"),
        recorded,
        text(flat, "summary_title"),
    )
}

/// Pretty-printed record body
pub fn print_record(flat: &Value) {
    match serde_json::to_string_pretty(flat) {
        Ok(body) => println!("{body}"),
        Err(_) => println!("{flat}"),
    }
}

/// Footer under a listing page
pub fn page_footer(shown: usize, total_count: i64) -> String {
    let total = if total_count == 0 {
        "0".to_string()
    } else {
        comma_price(Some(total_count))
    };
    format!("{shown}건 표시 / 전체 {total}건")
}
