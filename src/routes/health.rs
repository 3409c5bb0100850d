//! # 헬스체크(Health Check) 핸들러
//!
//! 서버와 DB가 정상적으로 동작하는지 확인하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /health` → `{ "status": "ok", "service": "jeonse-main", "timestamp": "..." }`
//! - `GET /db-health` → `{ "db": "ok", "result": [{ "ok": 1 }] }`
//!
//! 주로 다음 용도로 사용됩니다:
//! - 로드밸런서/컨테이너 오케스트레이터의 생존 확인
//! - 배포 직후 DB 연결 설정이 올바른지 점검

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::{db::PROBE_QUERY, error::AppError, routes::AppState};

/// `GET /health` — 프로세스 생존 여부를 확인합니다.
///
/// DB를 건드리지 않으므로 항상 200을 반환합니다.
/// `timestamp`는 UTC 기준 ISO-8601 문자열입니다 (예: `2026-10-17T03:12:45.120Z`).
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": state.service_name.as_ref(),
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// `GET /db-health` — DB에 `SELECT 1 AS ok`를 보내 연결을 확인합니다.
///
/// 실패하면 `AppError::Database`가 그대로 전파되어
/// 공통 에러 처리에서 500 `{ "error": "Internal Server Error" }`가 됩니다.
/// 실제 에러 내용은 서버 로그에만 남습니다.
pub async fn db_health(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let rows = state.db.query(PROBE_QUERY).await?;
    Ok(Json(json!({ "db": "ok", "result": rows })))
}
