//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러 종류를 HTTP 상태 코드로 한곳에서 변환
//! - `panic_response`: 핸들러 패닉도 같은 500 응답으로 변환
//!
//! ## 응답 본문 형식
//! - 400: `{ "error": "<검증 메시지>" }`
//! - 404: `{ "error": "Not Found", "path": "<요청 경로>" }`
//! - 500: `{ "error": "Internal Server Error" }` — 내부 정보는 절대 포함하지 않음

use std::any::Any;

use axum::{
    http::StatusCode,                   // HTTP 상태 코드 (200, 404, 500 등)
    response::{IntoResponse, Response}, // Axum의 응답 변환 트레이트
    Json,                               // JSON 응답 래퍼
};
use serde_json::json; // json! 매크로: JSON 객체를 간편하게 생성
use thiserror::Error; // thiserror: 커스텀 에러 타입을 쉽게 만들어주는 매크로 크레이트

/// 404 응답의 `error` 값
pub const NOT_FOUND_MESSAGE: &str = "Not Found";
/// 500 응답의 `error` 값. 어떤 내부 에러든 클라이언트는 이 문자열만 봅니다.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 필수 값 누락/타입 오류 (HTTP 400)
    /// 클라이언트 실수이므로 에러 로그를 남기지 않습니다.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 일치하는 라우트 없음 (HTTP 404)
    /// `path`: 클라이언트가 요청한 원래 경로 (쿼리 문자열 포함)
    #[error("Not found: {path}")]
    NotFound { path: String },

    /// 요청 본문을 JSON으로 파싱할 수 없음 (HTTP 500)
    /// 본문 파서 에러는 다른 예기치 못한 에러와 같이 공통 처리기로 보냅니다.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// 데이터베이스 오류 (HTTP 500)
    /// #[from]: sqlx 함수에서 `?`를 쓰면 자동으로 AppError::Database로 변환됩니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 그 밖의 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// 이 에러가 변환될 HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MalformedBody(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 500 계열 에러는 실제 에러 내용을 로그에만 기록하고,
    /// 클라이언트에는 `INTERNAL_ERROR_MESSAGE`만 반환합니다.
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::BadRequest(msg) => json!({ "error": msg }),
            AppError::NotFound { path } => json!({ "error": NOT_FOUND_MESSAGE, "path": path }),
            // 나머지는 모두 500. self를 Display로 찍어 원인을 남깁니다.
            internal => {
                tracing::error!(error = %internal, "unhandled error");
                json!({ "error": INTERNAL_ERROR_MESSAGE })
            }
        };

        // (StatusCode, Json<Value>) 튜플은 Axum이 자동으로 HTTP 응답으로 변환합니다.
        (status, Json(body)).into_response()
    }
}

/// `CatchPanicLayer`가 핸들러 패닉을 잡았을 때 호출하는 응답 생성 함수.
///
/// 패닉 페이로드는 보통 `&'static str`이나 `String`이므로 둘 다 꺼내서 로그에 남깁니다.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}
