//! # jeonse-main 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 읽기
//! 4. DB 연결 풀 생성 (지연 연결)
//! 5. API 라우터 설정
//! 6. HTTP 서버 시작, 종료 시그널을 받으면 진행 중인 요청을 마무리하고 DB 풀 정리

use std::sync::Arc;

use anyhow::Result;
use jeonse_main::{
    build_router,
    config::Config,
    db::{Database, SqlDatabase},
    AppState,
};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jeonse_main=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env();

    // ── 4단계: DB 연결 풀 생성 ──
    // 첫 쿼리 때 연결하므로 DB가 꺼져 있어도 서버는 뜹니다. (/db-health만 실패)
    let db = Arc::new(SqlDatabase::connect_lazy(
        &config.database_url,
        config.db_max_connections,
    )?);

    // ── 5단계: 라우터 설정 ──
    let state = AppState::new(db.clone(), config.service_name.clone());
    let app = build_router(state);

    // ── 6단계: 서버 시작 ──
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Jeonse main server running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 진행 중이던 요청이 모두 끝난 뒤 연결 풀을 닫습니다.
    db.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Ctrl+C(SIGINT) 또는 SIGTERM을 기다립니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
