//! # 전세 위험 점수 계산 서비스
//!
//! 분석 요청 하나를 받아 위험 점수, 위험 등급, 사유 목록을 계산하는 순수 함수입니다.
//! DB, 네트워크, 파일 등 외부 의존성이 전혀 없으므로 라우터 없이 단독으로 테스트할 수 있습니다.
//!
//! ## 계산 방식
//! 1. 기본 점수 50에서 시작합니다.
//! 2. `RULES` 테이블의 규칙을 **정해진 순서대로 모두** 평가합니다 (중간 종료 없음).
//!    조건이 맞으면 점수를 더하고 사유를 추가합니다.
//! 3. 점수를 0~100 범위로 자릅니다.
//! 4. 점수에서 위험 등급(LOW/MEDIUM/HIGH)을 결정합니다.
//!
//! 규칙을 추가하려면 `RULES` 배열에 항목 하나만 더하면 됩니다.

use crate::models::{AnalysisRequest, AnalysisResult, RiskLevel};

/// 모든 분석이 시작하는 기본 점수
pub const BASE_SCORE: i32 = 50;
/// 점수 상한
pub const MAX_SCORE: i32 = 100;
/// 점수 하한 (현재 규칙에는 감점이 없으므로 실제로는 적용되지 않음)
pub const MIN_SCORE: i32 = 0;

/// 고액 전세로 보는 보증금 기준 (3억 원, 초과 시 가산)
pub const HIGH_DEPOSIT_THRESHOLD: f64 = 300_000_000.0;

/// 구조적 위험이 있는 전세 유형 (다가구, 원룸주택)
pub const STRUCTURAL_RISK_TYPES: [&str; 2] = ["다가구", "원룸주택"];

/// 위험 규칙 하나: 조건 → 점수 변화량 → 사유
///
/// `condition`은 함수 포인터(`fn`)입니다. 클로저와 달리 캡처가 없어서
/// `const`/`static` 배열에 그대로 담을 수 있습니다.
#[derive(Clone, Copy)]
pub struct RiskRule {
    /// 로그에 찍을 규칙 이름
    pub name: &'static str,
    pub condition: fn(&AnalysisRequest) -> bool,
    pub delta: i32,
    pub reason: &'static str,
}

/// 평가 순서가 곧 사유 목록의 순서입니다.
pub const RULES: &[RiskRule] = &[
    RiskRule {
        name: "high_deposit",
        condition: is_high_deposit,
        delta: 20,
        reason: "보증금이 3억 이상으로 고액 전세입니다.",
    },
    RiskRule {
        name: "structural_type",
        condition: is_structural_risk_type,
        delta: 10,
        reason: "다가구/원룸주택 유형으로 구조적 위험이 있을 수 있습니다.",
    },
];

fn is_high_deposit(req: &AnalysisRequest) -> bool {
    req.deposit_amount() > HIGH_DEPOSIT_THRESHOLD
}

fn is_structural_risk_type(req: &AnalysisRequest) -> bool {
    req.jeonse_type_str()
        .is_some_and(|t| STRUCTURAL_RISK_TYPES.contains(&t))
}

/// 기본 규칙 테이블(`RULES`)로 요청을 평가합니다.
pub fn evaluate(req: &AnalysisRequest) -> AnalysisResult {
    evaluate_with(RULES, req)
}

/// 주어진 규칙 테이블로 요청을 평가합니다.
///
/// 실패하지 않는 전체 함수(total function)입니다. 입력 검증은 라우터의 몫입니다.
pub fn evaluate_with(rules: &[RiskRule], req: &AnalysisRequest) -> AnalysisResult {
    let mut score = BASE_SCORE;
    let mut reasons = Vec::new();

    for rule in rules {
        if (rule.condition)(req) {
            tracing::debug!(rule = rule.name, delta = rule.delta, "risk rule matched");
            score += rule.delta;
            reasons.push(rule.reason.to_string());
        }
    }

    let risk_score = score.clamp(MIN_SCORE, MAX_SCORE);

    AnalysisResult {
        address: req.address.clone(),
        deposit: req.deposit.clone(),
        jeonse_type: req.jeonse_type.clone(),
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
        reasons,
    }
}
