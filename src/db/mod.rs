//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 이 서버는 데이터를 저장하지 않습니다. DB는 오직 `/db-health`의
//! 연결 확인 쿼리(`SELECT 1 AS ok`) 한 가지 용도로만 사용됩니다.
//!
//! ## 구성
//! - `Database` 트레이트: "SQL을 실행하고 행(row) 목록을 돌려준다"는 능력(capability)
//! - `SqlDatabase`: sqlx SQLite 연결 풀로 구현한 실제 DB
//!
//! 핸들러는 전역 커넥션이 아니라 `AppState`에 주입된 `Arc<dyn Database>`를 사용합니다.
//! 그래서 테스트에서는 항상 실패하는 가짜 구현을 끼워 넣을 수 있습니다.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::{
    sqlite::{SqlitePoolOptions, SqliteRow},
    Column, Row, SqlitePool,
};
use std::time::Duration;

use crate::error::AppError;

/// 연결 확인용 쿼리
pub const PROBE_QUERY: &str = "SELECT 1 AS ok";

/// 쿼리 결과 한 행: 컬럼 이름 → JSON 값
pub type JsonRow = Map<String, Value>;

/// SQL 실행 능력.
///
/// `#[async_trait]`: 트레이트 객체(`dyn Database`)에서 async 메서드를 쓰기 위한 매크로입니다.
/// `Send + Sync`: 여러 요청(스레드)에서 동시에 공유하기 위한 조건입니다.
#[async_trait]
pub trait Database: Send + Sync {
    /// SQL을 실행하고 모든 행을 JSON 객체 목록으로 반환합니다.
    async fn query(&self, sql: &str) -> Result<Vec<JsonRow>, AppError>;

    /// 종료 시 연결을 정리합니다. 기본 구현은 아무것도 하지 않습니다.
    async fn close(&self) {}
}

/// sqlx SQLite 연결 풀 기반 `Database` 구현
#[derive(Clone)]
pub struct SqlDatabase {
    pool: SqlitePool,
}

impl SqlDatabase {
    /// 연결 풀을 **지연 연결(lazy)** 방식으로 만듭니다.
    ///
    /// `connect_lazy`는 첫 쿼리 때 실제 연결을 맺습니다.
    /// DB가 꺼져 있어도 서버는 정상 기동하고, `/db-health`만 500을 반환합니다.
    /// URL 형식이 잘못된 경우에만 여기서 에러가 납니다.
    pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl Database for SqlDatabase {
    async fn query(&self, sql: &str) -> Result<Vec<JsonRow>, AppError> {
        let rows = sqlx::query(sql).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

/// SQLite 행 하나를 JSON 객체로 변환합니다.
///
/// SQLite는 값마다 타입이 달라질 수 있으므로(동적 타입),
/// 정수 → 실수 → 문자열 순서로 디코딩을 시도하고 모두 실패하면 null로 둡니다.
fn row_to_json(row: &SqliteRow) -> JsonRow {
    let mut object = Map::new();

    for column in row.columns() {
        let idx = column.ordinal();
        let value = if let Ok(v) = row.try_get::<Option<i64>, _>(idx) {
            v.map(Value::from).unwrap_or(Value::Null)
        } else if let Ok(v) = row.try_get::<Option<f64>, _>(idx) {
            v.map(Value::from).unwrap_or(Value::Null)
        } else if let Ok(v) = row.try_get::<Option<String>, _>(idx) {
            v.map(Value::from).unwrap_or(Value::Null)
        } else {
            Value::Null
        };
        object.insert(column.name().to_string(), value);
    }

    object
}
