//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `analysis`: 전세 위험 분석 요청, 샘플 결과
//! - `checklist`: 위험 요소 기반 계약 체크리스트
//! - `health`: 서버 상태 확인, DB 연결 확인

pub mod analysis;
pub mod checklist;
pub mod health;

pub use analysis::*;
pub use checklist::*;
pub use health::*;

use std::sync::Arc;

use axum::extract::OriginalUri;

use crate::{db::Database, error::AppError};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// Axum의 의존성 주입(Dependency Injection) 메커니즘입니다.
///
/// `Arc`: 여러 요청이 같은 값을 공유하기 위한 참조 카운트 포인터.
/// clone해도 내부 값은 복제되지 않고 카운트만 늘어납니다.
#[derive(Clone)]
pub struct AppState {
    /// DB 접근 능력. 실제 서버에서는 `SqlDatabase`, 테스트에서는 가짜 구현.
    pub db: Arc<dyn Database>,
    /// 헬스체크 응답에 표시할 서비스 이름
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn new(db: Arc<dyn Database>, service_name: impl Into<Arc<str>>) -> Self {
        Self {
            db,
            service_name: service_name.into(),
        }
    }
}

/// 어떤 라우트에도 맞지 않는 요청 → 404 `{ "error": "Not Found", "path": "..." }`
///
/// `OriginalUri`: 중첩 라우터에서도 잘리지 않은 원래 요청 URI입니다.
/// 쿼리 문자열까지 그대로 돌려줍니다.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
        .to_string();

    tracing::debug!(%path, "no route matched");
    AppError::NotFound { path }
}
