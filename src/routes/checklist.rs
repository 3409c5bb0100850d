//! # 계약 체크리스트 라우트 핸들러
//!
//! - `POST /checklist/generate_mock` → `{ "items": [...] }`
//!
//! 요청 본문이 `ChecklistRequest` 형태가 아니면(알 수 없는 위험 코드, 정수가 아닌 보증금 등)
//! 400을 반환합니다.

use axum::Json;

use crate::{
    error::AppError,
    middleware::json_body::JsonBody,
    models::{ChecklistRequest, ChecklistResponse},
    services::checklist,
};

/// `POST /checklist/generate_mock` — 위험 요소 목록으로 체크리스트를 만듭니다.
pub async fn generate_checklist_mock(
    JsonBody(body): JsonBody,
) -> Result<Json<ChecklistResponse>, AppError> {
    let req: ChecklistRequest = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("체크리스트 요청 형식이 올바르지 않습니다: {e}")))?;

    if req.input_price <= 0 {
        return Err(AppError::BadRequest(
            "inputPrice는 양의 정수여야 합니다.".to_string(),
        ));
    }

    let response = checklist::generate_mock(&req)?;
    Ok(Json(response))
}
