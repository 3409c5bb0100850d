//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목 (모두 선택, 없으면 기본값):
//! - `HOST`: 서버 바인딩 주소 (기본값 `0.0.0.0`)
//! - `PORT`: 서버 포트 번호 (기본값 `80`)
//! - `DATABASE_URL`: DB 연결 문자열 (기본값 `sqlite::memory:`)
//! - `DB_MAX_CONNECTIONS`: 연결 풀 최대 크기 (기본값 `5`)
//! - `SERVICE_NAME`: 헬스체크 응답에 표시할 서비스 이름 (기본값 `jeonse-main`)

use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_SERVICE_NAME: &str = "jeonse-main";

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후, 애플리케이션 전체에서 공유됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    /// u16: 0~65535 범위의 부호 없는 16비트 정수. 포트 번호에 딱 맞는 타입입니다.
    pub port: u16,
    /// DB 연결 문자열 (예: "sqlite:data/jeonse.db")
    pub database_url: String,
    pub db_max_connections: u32,
    pub service_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

impl Config {
    /// 프로세스 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 필수 항목이 없으므로 실패하지 않습니다.
    /// 숫자 항목을 파싱할 수 없으면 기본값을 사용합니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 만듭니다.
    ///
    /// 테스트에서 실제 환경변수를 건드리지 않고 값을 주입하기 위해 분리했습니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // 빈 문자열도 "설정 안 됨"으로 취급합니다.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            // .parse().ok(): 파싱 실패 시 None → 기본값
            port: get("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            database_url: get("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            db_max_connections: get("DB_MAX_CONNECTIONS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            service_name: get("SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
        }
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
