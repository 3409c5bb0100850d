//! # 전세 위험 분석 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | POST | /analysis/request | `submit_analysis` | 위험 점수 계산 |
//! | GET | /analysis/sample | `get_sample` | 고정된 샘플 결과 |
//!
//! ## 입력 검증
//! 요청 본문은 경계에서 타입이 없는 JSON 값입니다. `validate_request`가 두 단계로 검사합니다:
//! 1. **필수값**: `address`나 `deposit`이 "비어 있는 값"(없음, null, false, 0, 빈 문자열)이면 400.
//!    보증금 0원도 여기서 거절됩니다.
//! 2. **타입**: 값은 있지만 `address`가 문자열이 아니거나, `deposit`이 음수가 아닌 숫자가 아니거나,
//!    `jeonseType`이 문자열/null이 아니면 400.

use axum::Json;
use serde_json::{Number, Value};

use crate::{
    error::AppError,
    middleware::json_body::JsonBody,
    models::{AnalysisRequest, AnalysisResult, RiskLevel},
    services::risk,
};

/// 필수값 누락 시 응답 메시지 ("address와 deposit은 필수입니다.")
pub const REQUIRED_FIELDS_MESSAGE: &str = "address와 deposit은 필수입니다.";

/// `POST /analysis/request` — 요청을 검증한 뒤 위험 점수를 계산합니다.
///
/// `JsonBody(body)`: 본문이 잘못된 JSON이면 추출 단계에서 이미 거절됩니다.
pub async fn submit_analysis(
    JsonBody(body): JsonBody,
) -> Result<Json<AnalysisResult>, AppError> {
    let req = validate_request(&body)?;
    let result = risk::evaluate(&req);

    tracing::info!(
        risk_score = result.risk_score,
        risk_level = ?result.risk_level,
        reasons = result.reasons.len(),
        "analysis completed"
    );

    Ok(Json(result))
}

/// `GET /analysis/sample` — 항상 같은 샘플 결과를 반환합니다.
pub async fn get_sample() -> Json<AnalysisResult> {
    Json(sample_result())
}

/// 샘플 응답 (화면 개발용 고정 데이터)
pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        address: "서울시 ...".to_string(),
        deposit: Number::from(200_000_000u64),
        jeonse_type: Some(Some("아파트".to_string())),
        risk_score: 35,
        risk_level: RiskLevel::Low,
        reasons: vec!["근저당 비율이 낮고, 시세 대비 보증금이 적정 수준입니다.".to_string()],
    }
}

/// 타입 없는 요청 본문을 `AnalysisRequest`로 변환합니다.
pub fn validate_request(body: &Value) -> Result<AnalysisRequest, AppError> {
    let address = body.get("address");
    let deposit = body.get("deposit");

    if !is_truthy(address) || !is_truthy(deposit) {
        return Err(AppError::BadRequest(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    let address = match address {
        Some(Value::String(s)) => s.clone(),
        _ => return Err(AppError::BadRequest("address는 문자열이어야 합니다.".to_string())),
    };

    let deposit = match deposit {
        Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v >= 0.0) => n.clone(),
        _ => {
            return Err(AppError::BadRequest(
                "deposit은 0 이상의 숫자여야 합니다.".to_string(),
            ))
        }
    };

    let jeonse_type = match body.get("jeonseType") {
        None => None,
        Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(_) => {
            return Err(AppError::BadRequest(
                "jeonseType은 문자열이어야 합니다.".to_string(),
            ))
        }
    };

    Ok(AnalysisRequest {
        address,
        deposit,
        jeonse_type,
    })
}

/// 값이 "비어 있지 않은지" 판단합니다.
///
/// 없음, null, false, 0, NaN, 빈 문자열은 비어 있는 값입니다.
/// 배열과 객체는 내용과 관계없이 값이 있는 것으로 봅니다.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bad_request_message(body: Value) -> String {
        match validate_request(&body) {
            Err(AppError::BadRequest(msg)) => msg,
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn valid_request_is_converted() {
        let req = validate_request(&json!({
            "address": "서울시 송파구",
            "deposit": 350000000,
            "jeonseType": "다가구"
        }))
        .unwrap();
        assert_eq!(req.address, "서울시 송파구");
        assert_eq!(req.deposit, Number::from(350_000_000u64));
        assert_eq!(req.jeonse_type_str(), Some("다가구"));
    }

    #[test]
    fn missing_or_falsy_required_fields() {
        for body in [
            json!({}),
            json!({ "deposit": 1000 }),
            json!({ "address": "서울시" }),
            json!({ "address": "", "deposit": 1000 }),
            json!({ "address": null, "deposit": 1000 }),
            json!({ "address": "서울시", "deposit": 0 }),
            json!({ "address": "서울시", "deposit": 0.0 }),
            json!({ "address": "서울시", "deposit": false }),
            json!({ "address": "서울시", "deposit": "" }),
            json!([]),
        ] {
            assert_eq!(bad_request_message(body), REQUIRED_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn mistyped_fields_are_rejected() {
        assert_ne!(
            bad_request_message(json!({ "address": 42, "deposit": 1000 })),
            REQUIRED_FIELDS_MESSAGE
        );
        assert_ne!(
            bad_request_message(json!({ "address": "서울시", "deposit": "3억" })),
            REQUIRED_FIELDS_MESSAGE
        );
        assert_ne!(
            bad_request_message(json!({ "address": "서울시", "deposit": -5 })),
            REQUIRED_FIELDS_MESSAGE
        );
        assert_ne!(
            bad_request_message(json!({ "address": "서울시", "deposit": 5, "jeonseType": 3 })),
            REQUIRED_FIELDS_MESSAGE
        );
    }

    #[test]
    fn null_type_is_kept_apart_from_absent() {
        let req = validate_request(&json!({
            "address": "서울시",
            "deposit": 1,
            "jeonseType": null
        }))
        .unwrap();
        assert_eq!(req.jeonse_type, Some(None));

        let req = validate_request(&json!({ "address": "서울시", "deposit": 1 })).unwrap();
        assert_eq!(req.jeonse_type, None);
    }

    #[test]
    fn sample_is_low_risk() {
        let sample = sample_result();
        assert_eq!(sample.risk_level, RiskLevel::from_score(sample.risk_score));
        assert_eq!(sample.reasons.len(), 1);
    }
}
