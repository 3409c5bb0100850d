//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `analysis`: 전세 위험 분석 요청/결과와 위험 등급
//! - `checklist`: 위험 요소 목록과 계약 체크리스트 항목
//!
//! `pub use X::*;`로 재공개하여 `crate::models::AnalysisResult`처럼 짧게 접근합니다.

pub mod analysis;
pub mod checklist;

pub use analysis::*;
pub use checklist::*;
