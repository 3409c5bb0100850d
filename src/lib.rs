//! # jeonse-main — 전세 위험 분석 메인 서버
//!
//! 전세 보증금 위험 분석 요청을 받아 간단한 규칙으로 위험 점수를 계산해 돌려주는 HTTP API입니다.
//! 서버 상태 확인과 DB 연결 확인 엔드포인트도 제공합니다.
//!
//! 라우터 조립(`build_router`)을 라이브러리에 두어서,
//! `main.rs`와 `tests/`의 통합 테스트가 같은 라우터를 사용합니다.

// ── 모듈 선언 ──
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer, // 핸들러 패닉 → 500 응답
    cors::{Any, CorsLayer},       // CORS(Cross-Origin Resource Sharing) 설정
    trace::TraceLayer,            // HTTP 요청/응답 로깅 미들웨어
};

pub use routes::AppState;

use error::panic_response;
use middleware::json_body::BODY_LIMIT_BYTES;
use routes::*;

/// 전체 API 라우터를 만듭니다.
///
/// | 메서드 | 경로 | 핸들러 |
/// |--------|------|--------|
/// | GET | /health | `health_check` |
/// | GET | /db-health | `db_health` |
/// | POST | /analysis/request | `submit_analysis` |
/// | GET | /analysis/sample | `get_sample` |
/// | POST | /checklist/generate_mock | `generate_checklist_mock` |
/// | * | 그 외 | `not_found` (404) |
pub fn build_router(state: AppState) -> Router {
    // 모든 출처, 모든 메서드, 모든 헤더를 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // 헬스체크 그룹
        .route("/health", get(health_check))
        .route("/db-health", get(db_health))
        // 분석 그룹
        .route("/analysis/request", post(submit_analysis))
        .route("/analysis/sample", get(get_sample))
        // 체크리스트 그룹
        .route("/checklist/generate_mock", post(generate_checklist_mock))
        // 경로가 없거나, 경로는 있지만 메서드가 다른 경우 모두 404
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
        // .layer()는 아래에 있을수록 바깥쪽(먼저 실행)입니다.
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
