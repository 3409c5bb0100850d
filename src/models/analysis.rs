//! # 전세 위험 분석 모델 정의
//!
//! 분석 요청과 결과를 표현하는 구조체들입니다.
//! 두 타입 모두 요청 하나를 처리하는 동안에만 존재하며, DB에 저장되지 않습니다.
//!
//! ## 구조체 역할
//! - `AnalysisRequest`: 검증을 통과한 분석 요청 (주소, 보증금, 전세 유형)
//! - `AnalysisResult`: 위험 점수 계산 결과 (요청 값 + 점수 + 등급 + 사유)
//! - `RiskLevel`: 점수에서 결정되는 위험 등급 (LOW / MEDIUM / HIGH)

use serde::Serialize;
use serde_json::Number;

/// 검증을 통과한 분석 요청.
///
/// 클라이언트가 보낸 JSON은 경계에서 타입이 없는 `serde_json::Value`로 받고,
/// `routes::analysis`의 검증 함수가 이 구조체로 변환합니다.
/// 따라서 이 타입의 값은 항상 다음을 만족합니다:
/// - `address`는 비어 있지 않은 문자열
/// - `deposit`은 0보다 큰 숫자
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    /// 매물 주소 (예: "서울시 강남구 ...")
    pub address: String,
    /// 전세 보증금 (원 단위)
    ///
    /// `f64`가 아니라 `serde_json::Number`로 보관하는 이유:
    /// 응답에 요청 값을 그대로 돌려줄 때 `200000000`이 `200000000.0`으로
    /// 바뀌지 않도록 원래 표현을 유지합니다.
    pub deposit: Number,
    /// 전세 유형 (예: "아파트", "다가구", "원룸주택"), 선택 항목
    ///
    /// 응답에 그대로 돌려주기 위해 세 가지 경우를 구분합니다:
    /// - `None`: 요청에 필드가 없음 → 응답에서도 생략
    /// - `Some(None)`: `"jeonseType": null` → 응답에도 null
    /// - `Some(Some(s))`: 문자열
    pub jeonse_type: Option<Option<String>>,
}

impl AnalysisRequest {
    /// 문자열로 주어진 전세 유형 (없거나 null이면 None)
    pub fn jeonse_type_str(&self) -> Option<&str> {
        self.jeonse_type.as_ref().and_then(|t| t.as_deref())
    }

    /// 보증금을 비교용 실수 값으로 꺼냅니다.
    pub fn deposit_amount(&self) -> f64 {
        // serde_json::Number는 항상 f64로 표현 가능하므로 None은 나오지 않습니다.
        self.deposit.as_f64().unwrap_or(0.0)
    }
}

/// 위험 등급.
///
/// `#[serde(rename_all = "UPPERCASE")]`: JSON으로 변환할 때
/// `Low` → `"LOW"`처럼 대문자 문자열이 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// 점수 70 이상이면 HIGH
    pub const HIGH_THRESHOLD: i32 = 70;
    /// 점수 40 이상이면 MEDIUM
    pub const MEDIUM_THRESHOLD: i32 = 40;

    /// 위험 점수에서 등급을 결정합니다.
    pub fn from_score(score: i32) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            RiskLevel::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// 분석 결과 — `POST /analysis/request`와 `GET /analysis/sample`의 응답 본문입니다.
///
/// `#[serde(rename_all = "camelCase")]`: Rust 필드명(snake_case)을
/// JSON 필드명(camelCase)으로 바꿉니다. 예: `risk_score` → `riskScore`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub address: String,
    pub deposit: Number,
    /// 요청에 전세 유형이 없었으면 JSON에서 필드 자체를 생략하고,
    /// null이었으면 null로 돌려줍니다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jeonse_type: Option<Option<String>>,
    /// 0~100 사이의 위험 점수
    pub risk_score: i32,
    pub risk_level: RiskLevel,
    /// 점수에 반영된 사유들 (규칙 평가 순서대로)
    pub reasons: Vec<String>,
}
