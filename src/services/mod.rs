//! # 비즈니스 로직 모듈
//!
//! HTTP와 무관한 순수 로직을 모아둔 모듈입니다.
//! - `risk`: 전세 위험 점수 계산 (규칙 테이블 평가)
//! - `checklist`: 기본 체크리스트, 생성 결과 정리

pub mod checklist;
pub mod risk;
