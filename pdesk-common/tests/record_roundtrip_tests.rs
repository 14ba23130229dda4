//! Integration tests for the flat/nested record transforms
//!
//! Covers the boundary contract as a whole:
//! - flatten leaves no nested group keys and promotes every leaf
//! - unflatten rebuilds the full nested shape with explicit nulls
//! - unflatten(flatten(r)) reconstructs r modulo ""→null normalization
//! - the transforms round-trip through the typed record structs

use pdesk_common::model::{CallRecord, PropertyRecord};
use pdesk_common::record::{
    flatten, unflatten_call, unflatten_property, OWNER_INFO_FIELDS, PROPERTY_INFO_FIELDS,
    TENANT_INFO_FIELDS,
};
use serde_json::{json, Value};

/// A property record with every known field populated
fn full_property_record() -> Value {
    json!({
        "property_id": "a4b1c9d2-0f5e-4c1a-9b7d-1e2f3a4b5c6d",
        "created_at": "2025-01-20T01:22:48",
        "status": "active",
        "job_id": "7f8e9d0c-1b2a-4938-8765-4321fedcba98",
        "property_info": {
            "property_name": "래미안아파트",
            "price": 150000,
            "deposit": 10000,
            "loan_info": "가능",
            "city": "서울시",
            "district": "강남구",
            "legal_dong": "역삼동",
            "detail_address": "101동 1502호",
            "full_address": "서울시 강남구 역삼동 123-45",
            "transaction_type": "매매",
            "property_type": "아파트",
            "floor": "15",
            "area": "84",
            "premium": 3000,
            "memo": "신축 선호",
            "moving_date": "2024-06-30T00:00:00",
            "owner_property_memo": "직거래 희망",
            "tenant_property_memo": "주차 2대",
            "owner_info": {
                "owner_name": "홍길동",
                "owner_contact": "010-1234-5678"
            },
            "tenant_info": {
                "tenant_name": "김철수",
                "tenant_contact": "010-9876-5432"
            }
        }
    })
}

#[test]
fn test_flatten_promotes_every_leaf() {
    let record = full_property_record();
    let flat = flatten(&record);
    let flat = flat.as_object().expect("flat object");

    for name in ["property_id", "created_at", "status", "job_id"] {
        assert!(flat.contains_key(name), "missing top-level field {name}");
    }
    for name in PROPERTY_INFO_FIELDS
        .iter()
        .chain(OWNER_INFO_FIELDS.iter())
        .chain(TENANT_INFO_FIELDS.iter())
    {
        assert!(flat.contains_key(*name), "missing promoted leaf {name}");
    }

    for group in [
        "property_info",
        "extracted_property_info",
        "owner_info",
        "tenant_info",
    ] {
        assert!(!flat.contains_key(group), "group key {group} leaked through");
    }
}

#[test]
fn test_property_round_trip_is_identity_on_full_records() {
    let record = full_property_record();
    let rebuilt = unflatten_property(&flatten(&record));
    assert_eq!(rebuilt, record);
}

#[test]
fn test_round_trip_normalizes_empty_strings_to_null() {
    let mut record = full_property_record();
    record["property_info"]["memo"] = json!("");
    record["property_info"]["owner_info"]["owner_contact"] = json!("");

    let rebuilt = unflatten_property(&flatten(&record));

    assert_eq!(rebuilt["property_info"]["memo"], Value::Null);
    assert_eq!(
        rebuilt["property_info"]["owner_info"]["owner_contact"],
        Value::Null
    );
    // Everything else survives untouched.
    assert_eq!(rebuilt["property_info"]["price"], 150000);
    assert_eq!(rebuilt["property_id"], record["property_id"]);
}

#[test]
fn test_call_round_trip_is_identity_on_full_records() {
    let record = json!({
        "job_id": "3c9d8e7f-6a5b-4c3d-2e1f-0a9b8c7d6e5f",
        "file_name": "상담녹음_0412.m4a",
        "customer_name": "이영희",
        "customer_contact": "010-2345-6789",
        "recording_date": "2024-03-15T14:30:00",
        "text": "전세 문의 통화 전문",
        "summary_title": "전세 문의",
        "summary_content": "즉시 입주 희망, 주차 문의",
        "property_id": "a4b1c9d2-0f5e-4c1a-9b7d-1e2f3a4b5c6d",
        "call_memo": "재연락 예정",
        "extracted_property_info": {
            "property_name": "서초스타타워",
            "price": 85000,
            "deposit": null,
            "loan_info": "불가",
            "city": "서울시",
            "district": "서초구",
            "legal_dong": "서초동",
            "detail_address": "A동 805호",
            "full_address": "서울시 서초구 서초동 456-78",
            "transaction_type": "전세",
            "property_type": "오피스텔",
            "floor": "8",
            "area": "45",
            "premium": null,
            "memo": "주차 2대 필수",
            "moving_date": "2024-04-15T00:00:00",
            "owner_property_memo": null,
            "tenant_property_memo": null,
            "owner_info": {
                "owner_name": "김철수",
                "owner_contact": "010-1111-2222"
            },
            "tenant_info": {
                "tenant_name": null,
                "tenant_contact": null
            }
        }
    });

    let rebuilt = unflatten_call(&flatten(&record));
    assert_eq!(rebuilt, record);
}

#[test]
fn test_unknown_fields_survive_the_round_trip() {
    let mut record = full_property_record();
    record["search_rank"] = json!(3);

    let flat = flatten(&record);
    assert_eq!(flat["search_rank"], 3);

    let rebuilt = unflatten_property(&flat);
    assert_eq!(rebuilt["search_rank"], 3);
}

#[test]
fn test_transforms_round_trip_typed_records() {
    let record = full_property_record();
    let flat = flatten(&record);
    let rebuilt = unflatten_property(&flat);

    let typed: PropertyRecord =
        serde_json::from_value(rebuilt).expect("rebuilt record matches the typed schema");
    let info = typed.property_info.expect("nested info present");
    assert_eq!(info.price, Some(150000));
    assert_eq!(
        info.owner_info.expect("owner group present").owner_name,
        Some("홍길동".to_string())
    );
}

#[test]
fn test_all_null_skeleton_matches_typed_call_schema() {
    let rebuilt = unflatten_call(&json!({}));
    let typed: CallRecord =
        serde_json::from_value(rebuilt).expect("all-null skeleton matches the typed schema");
    assert!(typed.job_id.is_none());
    let info = typed
        .extracted_property_info
        .expect("nested info present even when all null");
    assert!(info.price.is_none());
}
