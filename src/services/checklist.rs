//! # 계약 체크리스트 생성 서비스
//!
//! 위험 요소 목록을 받아 계약 전 확인할 체크리스트를 만듭니다.
//!
//! - 위험 요소가 없으면 기본 체크리스트(`default_items`, 9개 항목)를 그대로 돌려줍니다.
//! - 위험 요소가 있으면 고정된 모의(mock) 생성 결과 `MOCK_CHECKLIST_JSON`을
//!   실제 생성기 응답과 똑같은 경로로 처리합니다:
//!   코드 블록 제거(`strip_code_block`) → JSON 파싱 → 항목 정리(`normalize_items`).

use crate::{
    error::AppError,
    models::{
        ChecklistCategory, ChecklistItem, ChecklistRequest, ChecklistResponse, RawChecklist,
        RawChecklistItem,
    },
};

/// 분류를 알 수 없는 항목이 들어갈 분류
pub const FALLBACK_CATEGORY: ChecklistCategory = ChecklistCategory::Contract;

/// 위험 요소가 없을 때의 기본 체크리스트: (분류, 제목, 설명)
const DEFAULT_ITEMS: &[(ChecklistCategory, &str, &str)] = &[
    (
        ChecklistCategory::Registry,
        "계약 당일 재발급한 등기부등본 최종 확인",
        "전세금 보호를 위해 가장 중요한 행동입니다. 계약을 진행하는 당일(특히 잔금일) 임대인에게 부탁하여 등기부등본을 다시 뽑아봅니다. 계약서를 쓴 이후에 집주인이 몰래 압류나 대출을 추가하지 않았는지 확인해야 안전합니다.",
    ),
    (
        ChecklistCategory::Registry,
        "소유자와 임대인의 동일 여부 및 신분 확인 철저",
        "계약 상대방(임대인)이 정말로 집주인(소유자)이 맞는지 신분증을 통해 직접 확인합니다. 만약 대리인이 온다면, 집주인의 위임장, 인감증명서(3개월 이내 발급), 그리고 집주인과의 직접 통화 등을 통해 계약 권한이 있는지 철저히 확인해야 합니다.",
    ),
    (
        ChecklistCategory::PreContract,
        "임대인 본인 명의 계좌로 계약금 및 잔금 송금",
        "계약금, 잔금 등 돈을 보낼 때는 반드시 집주인의 이름으로 된 은행 계좌로 직접 송금해야 합니다. 중개인이나 다른 사람의 계좌로 보내면 나중에 '집주인에게 돈을 주었다'는 증거가 불분명해질 수 있습니다.",
    ),
    (
        ChecklistCategory::PreContract,
        "전세보증보험 가입 요건 및 가능 여부 사전 확인",
        "전세금을 나라에서 대신 돌려주는 '전세보증보험'에 가입할 수 있는지 미리 알아봅니다. 가입이 안 되는 집은 그만큼 위험하다는 뜻이므로 계약을 다시 생각해봐야 합니다. (HUG, SGI 등 보증기관을 미리 확인하세요.)",
    ),
    (
        ChecklistCategory::PreContract,
        "임대인의 국세 및 지방세 납세 증명서 요청",
        "집주인에게 밀린 세금(국세/지방세)이 있는지 확인하기 위해 '완납 증명서'를 요청합니다. 집주인의 체납된 세금은 나의 전세금보다 먼저 떼어갈 수 있으므로 반드시 확인해야 합니다.",
    ),
    (
        ChecklistCategory::Site,
        "현장 방문 시 누수, 결로, 주요 시설물 작동 상태 확인",
        "계약 전 집 내부에 물이 새는 곳(누수), 곰팡이가 생기는 곳(결로)은 없는지, 보일러나 전기 시설은 잘 작동하는지 직접 눈으로 확인합니다. 문제가 있다면 집주인과 누가 언제까지 고칠지 특약에 명확히 적어야 합니다.",
    ),
    (
        ChecklistCategory::Contract,
        "전세 계약서에 '보증금 반환 확약' 특약 포함",
        "나중에 계약이 끝났을 때 집주인이 전세금을 확실하게 돌려주겠다는 내용을 계약서 특약에 넣습니다. 만약 돈을 늦게 돌려줄 경우 이자를 물어야 한다는 조항도 함께 넣는 것이 좋습니다.",
    ),
    (
        ChecklistCategory::Contract,
        "계약서에 '선순위 권리 변동 금지' 특약 명시",
        "잔금을 치르고 내가 전입신고를 마친 다음 날 0시가 되기 전까지, 집주인이 이 집에 추가로 은행 대출을 받거나(근저당 설정) 집을 팔지 않겠다는 약속을 계약서에 명확히 넣어야 합니다. 이 약속을 어기면 계약을 해지할 수 있다는 내용도 함께 기재합니다.",
    ),
    (
        ChecklistCategory::Contract,
        "계약서에 집주인의 전세보증보험 가입 협조 의무 명시",
        "내가 전세보증보험에 가입할 때, 집주인이 필요한 서류(주택가격확인서 등)를 제때 발급해 주고 적극 협조한다는 내용을 계약서 특약에 적어둡니다.",
    ),
];

/// 모의 생성기가 돌려주는 응답 텍스트 (코드 블록으로 감싸진 JSON)
pub const MOCK_CHECKLIST_JSON: &str = r#"```json
{
    "items": [
        {
            "id": 1,
            "category": "registry",
            "title": "MOCK: 계약 당일 재발급한 등기부등본 최종 확인",
            "description": "MOCK 모드: 전세금 보호를 위해 계약 당일 등기부등본을 재발급 받아 소유자·권리 변동 여부를 최종 확인하세요."
        },
        {
            "id": 2,
            "category": "pre_contract",
            "title": "MOCK: 임대인 본인 계좌로만 계약금 송금",
            "description": "MOCK 모드: 계약 전, 임대인의 명의와 동일한 계좌인지 확인하고 제3자 계좌 송금은 절대 금지하세요."
        },
        {
            "id": 3,
            "category": "site",
            "title": "MOCK: 현장 방문 시 누수·결로 점검",
            "description": "MOCK 모드: 집 내부의 누수, 결로, 곰팡이 여부를 직접 확인하고 문제 있으면 특약에 보수 기한을 명시하세요."
        },
        {
            "id": 4,
            "category": "contract",
            "title": "MOCK: 보증금 반환 확약 특약 추가",
            "description": "MOCK 모드: 전세계약서에 보증금 반환 기한 및 지연 시 이자 지급 등의 보호 특약을 반드시 포함하세요."
        }
    ]
}
```"#;

/// 위험 요소가 없을 때의 기본 체크리스트
pub fn default_items() -> Vec<ChecklistItem> {
    DEFAULT_ITEMS
        .iter()
        .zip(1..)
        .map(|(&(category, title, description), id)| ChecklistItem {
            id,
            category,
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// 모의 생성기로 체크리스트를 만듭니다.
pub fn generate_mock(req: &ChecklistRequest) -> Result<ChecklistResponse, AppError> {
    if req.risks.is_empty() {
        return Ok(ChecklistResponse {
            items: default_items(),
        });
    }

    tracing::debug!(risks = req.risks.len(), "generating mock checklist");
    parse_generated(MOCK_CHECKLIST_JSON)
}

/// 생성기 응답 텍스트를 정리된 체크리스트로 바꿉니다.
///
/// 파싱에 실패하거나 남는 항목이 없으면 `AppError::Internal` (500).
pub fn parse_generated(raw: &str) -> Result<ChecklistResponse, AppError> {
    let text = strip_code_block(raw);
    if text.is_empty() {
        return Err(AppError::Internal("empty checklist generator response".to_string()));
    }

    let parsed: RawChecklist = serde_json::from_str(&text).map_err(|e| {
        let snippet: String = text.chars().take(300).collect();
        AppError::Internal(format!("checklist JSON parse failed: {e}; response: {snippet}"))
    })?;

    let items = normalize_items(parsed.items);
    if items.is_empty() {
        return Err(AppError::Internal(
            "no valid checklist items in generator response".to_string(),
        ));
    }

    Ok(ChecklistResponse { items })
}

/// 앞뒤의 ```` ``` ```` 줄을 걷어냅니다. 코드 블록이 아니면 공백만 자릅니다.
pub fn strip_code_block(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    let mut lines: Vec<&str> = trimmed.lines().collect();
    if lines.first().is_some_and(|l| l.starts_with("```")) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|l| l.trim().starts_with("```")) {
        lines.pop();
    }

    lines.join("\n").trim().to_string()
}

/// 항목 정리
/// - 제목이 비어 있으면(공백뿐이어도) 버립니다.
/// - 알 수 없는 분류는 `FALLBACK_CATEGORY`로 바꿉니다.
/// - 설명이 없으면 빈 문자열, 있으면 앞뒤 공백 제거.
/// - id는 남은 항목에 1부터 다시 매깁니다.
pub fn normalize_items(items: Vec<RawChecklistItem>) -> Vec<ChecklistItem> {
    items
        .into_iter()
        .filter_map(|item| {
            let title = item.title.trim();
            if title.is_empty() {
                return None;
            }
            Some((
                ChecklistCategory::parse(&item.category).unwrap_or(FALLBACK_CATEGORY),
                title.to_string(),
                item.description.as_deref().unwrap_or_default().trim().to_string(),
            ))
        })
        .zip(1..)
        .map(|((category, title, description), id)| ChecklistItem {
            id,
            category,
            title,
            description,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RiskCode, RiskItem};

    fn raw(id: i64, category: &str, title: &str, description: Option<&str>) -> RawChecklistItem {
        RawChecklistItem {
            id: Some(id),
            category: category.to_string(),
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn default_checklist_has_nine_numbered_items() {
        let items = default_items();
        assert_eq!(items.len(), 9);
        assert_eq!(
            items.iter().map(|i| i.id).collect::<Vec<_>>(),
            (1..=9).collect::<Vec<_>>()
        );
        assert_eq!(items[0].category, ChecklistCategory::Registry);
        assert_eq!(items[5].category, ChecklistCategory::Site);
        assert!(items.iter().all(|i| !i.description.is_empty()));
    }

    #[test]
    fn normalize_renumbers_and_falls_back() {
        let items = normalize_items(vec![
            raw(7, "registry", "  등기부 확인 ", Some("  설명 ")),
            raw(8, "contract", "   ", Some("버려짐")),
            raw(9, "unknown", "분류 이상", None),
        ]);

        assert_eq!(
            items,
            vec![
                ChecklistItem {
                    id: 1,
                    category: ChecklistCategory::Registry,
                    title: "등기부 확인".to_string(),
                    description: "설명".to_string(),
                },
                ChecklistItem {
                    id: 2,
                    category: FALLBACK_CATEGORY,
                    title: "분류 이상".to_string(),
                    description: String::new(),
                },
            ]
        );
    }

    #[test]
    fn strips_fenced_code_block() {
        assert_eq!(strip_code_block("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_block("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn generator_output_without_valid_items_is_an_error() {
        let raw = r#"{"items":[{"id":1,"category":"site","title":" "}]}"#;
        assert!(matches!(parse_generated(raw), Err(AppError::Internal(_))));
        assert!(matches!(parse_generated("not json"), Err(AppError::Internal(_))));
        assert!(matches!(parse_generated("```\n```"), Err(AppError::Internal(_))));
    }

    #[test]
    fn mock_with_risks_returns_four_items() {
        let req = ChecklistRequest {
            risks: vec![RiskItem {
                code: RiskCode::MortgageHigh,
                msg: "근저당 비율이 높습니다.".to_string(),
                severity: None,
            }],
            input_price: 200_000_000,
        };
        let response = generate_mock(&req).unwrap();
        assert_eq!(response.items.len(), 4);
        assert!(response.items.iter().all(|i| i.title.starts_with("MOCK:")));
        assert_eq!(response.items[1].category, ChecklistCategory::PreContract);
    }

    #[test]
    fn mock_without_risks_returns_defaults() {
        let req = ChecklistRequest {
            risks: vec![],
            input_price: 1,
        };
        assert_eq!(generate_mock(&req).unwrap().items, default_items());
    }
}
