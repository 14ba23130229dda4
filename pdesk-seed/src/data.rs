//! Synthetic call documents for local testing
//!
//! Ten calls covering the property mix the console deals with
//! (아파트, 오피스텔, 상가, 사무실, 빌라), each in the raw pipeline
//! shape: the summarization stage's extraction plus the recording file
//! name. Job ids are fresh UUIDs per run, matching what the gateway
//! assigns in production.

use chrono::{SecondsFormat, Utc};
use pdesk_common::model::{CallDocument, Extraction, Summarization};
use uuid::Uuid;

/// Build the ten synthetic call documents
pub fn synthetic_calls() -> Vec<CallDocument> {
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    seed_extractions()
        .into_iter()
        .enumerate()
        .map(|(index, extraction)| CallDocument {
            job_id: Uuid::new_v4().to_string(),
            created_at: created_at.clone(),
            summarization: Summarization {
                extraction,
                file_name: Some(format!("상담녹음_{:02}.m4a", index + 1)),
            },
        })
        .collect()
}

fn seed_extractions() -> Vec<Extraction> {
    vec![
        extraction(
            1,
            "2024-03-15 14:30:00",
            "김철수",
            "남",
            "010-1234-5678",
            "아파트",
            "서울시",
            "강남구",
            "역삼동",
            "래미안아파트",
            "101동",
            "1502호",
            150_000,
            "가능",
            "2024-06-30",
            "매매 문의, 대출 가능 여부 확인",
            "신축 아파트 선호",
        ),
        extraction(
            2,
            "2024-03-15 15:45:00",
            "이영희",
            "여",
            "010-9876-5432",
            "오피스텔",
            "서울시",
            "서초구",
            "서초동",
            "서초스타타워",
            "A동",
            "805호",
            85_000,
            "불가",
            "2024-04-15",
            "전세 문의, 즉시 입주 희망",
            "주차 2대 가능 필수",
        ),
        extraction(
            3,
            "2024-03-16 10:05:00",
            "박민수",
            "남",
            "010-2222-3333",
            "상가",
            "서울시",
            "마포구",
            "서교동",
            "홍대프라자",
            "1층",
            "103호",
            15_000,
            "가능",
            "2024-05-01",
            "카페 창업용 상가 임대 문의",
            "권리금 조율 희망",
        ),
        extraction(
            4,
            "2024-03-16 11:20:00",
            "최지은",
            "여",
            "010-4444-5555",
            "사무실",
            "서울시",
            "영등포구",
            "여의도동",
            "여의도파이낸스",
            "B동",
            "1201호",
            20_000,
            "가능",
            "2024-07-01",
            "사무실 이전 상담, 평수 확인",
            "역세권 우선",
        ),
        extraction(
            5,
            "2024-03-17 09:40:00",
            "정우성",
            "남",
            "010-6666-7777",
            "빌라",
            "서울시",
            "은평구",
            "불광동",
            "불광한양빌라",
            "가동",
            "302호",
            28_000,
            "불가",
            "2024-04-30",
            "전세 만기 전 이사 문의",
            "반려동물 가능 여부 확인",
        ),
        extraction(
            6,
            "2024-03-17 16:10:00",
            "한서연",
            "여",
            "010-8888-9999",
            "아파트",
            "성남시",
            "분당구",
            "정자동",
            "정자푸르지오",
            "205동",
            "703호",
            95_000,
            "가능",
            "2024-08-15",
            "매매 시세 문의, 학군 확인",
            "초등학교 도보권 필수",
        ),
        extraction(
            7,
            "2024-03-18 13:00:00",
            "오세훈",
            "남",
            "010-1212-3434",
            "오피스텔",
            "인천시",
            "연수구",
            "송도동",
            "송도센트럴푸르지오",
            "C동",
            "2104호",
            42_000,
            "가능",
            "2024-05-20",
            "월세 전환 조건 문의",
            "보증금 조정 희망",
        ),
        extraction(
            8,
            "2024-03-18 17:35:00",
            "윤아름",
            "여",
            "010-5656-7878",
            "상가",
            "서울시",
            "송파구",
            "잠실동",
            "잠실타워상가",
            "지하1층",
            "B12호",
            30_000,
            "불가",
            "2024-06-01",
            "음식점 임대 문의, 환기 설비 확인",
            "기존 설비 인수 희망",
        ),
        extraction(
            9,
            "2024-03-19 10:50:00",
            "강동원",
            "남",
            "010-9090-1010",
            "아파트",
            "서울시",
            "강동구",
            "천호동",
            "천호래미안",
            "112동",
            "901호",
            78_000,
            "가능",
            "2024-09-01",
            "갈아타기 상담, 매도/매수 동시 진행",
            "잔금 일정 조율 필요",
        ),
        extraction(
            10,
            "2024-03-19 15:15:00",
            "임수정",
            "여",
            "010-3030-5050",
            "빌라",
            "서울시",
            "관악구",
            "신림동",
            "신림그린빌",
            "나동",
            "201호",
            19_000,
            "불가",
            "2024-04-20",
            "신혼집 전세 문의",
            "수리 여부 확인 요청",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn extraction(
    call_number: i64,
    call_datetime: &str,
    name: &str,
    gender: &str,
    contact: &str,
    property_type: &str,
    city: &str,
    district: &str,
    neighborhood: &str,
    complex_name: &str,
    building: &str,
    unit: &str,
    price: i64,
    loan_status: &str,
    move_in_date: &str,
    call_summary: &str,
    memo: &str,
) -> Extraction {
    Extraction {
        call_number: Some(call_number),
        call_datetime: Some(call_datetime.to_string()),
        name: Some(name.to_string()),
        gender: Some(gender.to_string()),
        contact: Some(contact.to_string()),
        property_type: Some(property_type.to_string()),
        city: Some(city.to_string()),
        district: Some(district.to_string()),
        neighborhood: Some(neighborhood.to_string()),
        complex_name: Some(complex_name.to_string()),
        building: Some(building.to_string()),
        unit: Some(unit.to_string()),
        price: Some(price),
        loan_status: Some(loan_status.to_string()),
        move_in_date: Some(move_in_date.to_string()),
        call_summary: Some(call_summary.to_string()),
        memo: Some(memo.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ten_documents() {
        assert_eq!(synthetic_calls().len(), 10);
    }

    #[test]
    fn test_job_ids_are_unique() {
        let calls = synthetic_calls();
        let ids: HashSet<_> = calls.iter().map(|call| call.job_id.as_str()).collect();
        assert_eq!(ids.len(), calls.len());
    }

    #[test]
    fn test_every_document_carries_a_file_name() {
        for call in synthetic_calls() {
            assert!(call.summarization.file_name.is_some());
            assert!(call.summarization.extraction.contact.is_some());
        }
    }
}
