//! # JSON 요청 본문 추출기
//!
//! 요청 본문을 타입 없는 `serde_json::Value`로 파싱하는 Axum 추출기(Extractor)입니다.
//! 핸들러에 도착하기 전에 본문이 구조화된 값으로 바뀌어 있습니다.
//!
//! axum 기본 `Json<T>` 대신 따로 만든 이유는 규칙이 다르기 때문입니다:
//! - Content-Type이 `application/json`이 아니면 (`application/merge-patch+json` 같은 변형 포함) 본문을 무시하고 빈 객체 `{}`로 취급합니다.
//! - 본문이 비어 있어도 빈 객체 `{}`입니다.
//!   → 두 경우 모두 핸들러의 필수값 검증에서 400이 됩니다.
//! - JSON 문법 오류, 최상위 값이 객체/배열이 아닌 경우, 크기 제한 초과는
//!   `AppError::MalformedBody`로 거절되어 공통 에러 처리(500)로 갑니다.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde_json::{Map, Value};

use crate::error::AppError;

/// JSON 본문 크기 제한 (100 KiB)
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// 파싱된 요청 본문
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Ok(JsonBody(empty_object()));
        }

        // Bytes 추출기는 DefaultBodyLimit 레이어의 크기 제한을 적용합니다.
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

        parse_body(&bytes).map(JsonBody)
    }
}

/// 본문 바이트를 JSON 값으로 파싱합니다.
///
/// 최상위 값은 객체나 배열만 허용합니다 (strict 모드).
pub fn parse_body(bytes: &[u8]) -> Result<Value, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(empty_object());
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| AppError::MalformedBody(e.to_string()))?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        other => Err(AppError::MalformedBody(format!(
            "top-level JSON value must be an object or array, got {other}"
        ))),
    }
}

/// `application/json` 인지 확인합니다. 대소문자는 구분하지 않습니다.
/// `; charset=utf-8` 같은 파라미터는 무시합니다.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json"
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}
