//! # 계약 체크리스트 모델 정의
//!
//! 위험 분석 결과(위험 요소 목록)를 받아 계약 전 확인할 체크리스트를 돌려줄 때 쓰는 구조체들입니다.
//!
//! ## 구조체 역할
//! - `ChecklistRequest`: 위험 요소 목록 + 보증금 (`POST /checklist/generate_mock` 요청 본문)
//! - `RiskItem`, `RiskCode`, `Severity`: 위험 요소 하나
//! - `ChecklistItem`, `ChecklistCategory`: 최종 체크리스트 항목
//! - `RawChecklist`, `RawChecklistItem`: 정리(normalize) 전의 느슨한 형태

use serde::{Deserialize, Serialize};

/// 위험 요소 코드. 이 목록에 없는 코드는 역직렬화 단계에서 거절됩니다.
///
/// `SCREAMING_SNAKE_CASE`: `HighRatio` ↔ `"HIGH_RATIO"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskCode {
    HighRatio,
    MediumRatio,
    Violation,
    Restriction,
    Auction,
    ProvisionalReg,
    Trust,
    MortgageHigh,
    MortgageMedium,
    HighDebtRatio,
    OtherRights,
    OwnershipTransferExists,
    MarketPriceNotFound,
    BuildingLedgerNotFound,
    OwnerMismatch,
    UsageMismatch,
    AreaMismatch,
}

/// 위험도 (DANGER / WARNING / SAFE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Danger,
    Warning,
    Safe,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiskItem {
    pub code: RiskCode,
    /// 위험 요소 설명
    pub msg: String,
    /// 생략 가능
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// 체크리스트 생성 요청
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistRequest {
    /// 위험 요소 목록. 없으면 빈 목록.
    #[serde(default)]
    pub risks: Vec<RiskItem>,
    /// 전세 보증금 (원 단위). 양수인지는 라우터에서 검사합니다.
    pub input_price: i64,
}

/// 체크리스트 항목 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistCategory {
    /// 등기부등본 관련
    Registry,
    /// 계약서/특약 관련
    Contract,
    /// 현장 확인
    Site,
    /// 계약 전 준비
    PreContract,
}

impl ChecklistCategory {
    /// 문자열 분류명을 해석합니다. 알 수 없는 값이면 None.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "registry" => Some(Self::Registry),
            "contract" => Some(Self::Contract),
            "site" => Some(Self::Site),
            "pre_contract" => Some(Self::PreContract),
            _ => None,
        }
    }
}

/// 최종 체크리스트 항목. `id`는 1부터 빈틈없이 매겨집니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistItem {
    pub id: u32,
    pub category: ChecklistCategory,
    pub title: String,
    pub description: String,
}

/// `POST /checklist/generate_mock` 응답 본문
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistResponse {
    pub items: Vec<ChecklistItem>,
}

/// 생성기가 돌려준 정리 전 항목.
/// 분류는 아무 문자열이나, 설명은 없어도 되고, id는 무시됩니다.
#[derive(Debug, Clone, Deserialize)]
pub struct RawChecklistItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawChecklist {
    pub items: Vec<RawChecklistItem>,
}
