//! # 미들웨어 / 추출기 모듈
//!
//! 핸들러 앞단에서 요청을 가공하는 코드입니다.
//! - `json_body`: 요청 본문을 JSON 값으로 파싱하는 추출기

pub mod json_body;
