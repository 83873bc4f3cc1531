// region:    --- Imports
use realestate_api::config::Config;
use realestate_api::database::DatabaseManager;
use realestate_api::listing_store::PgListingStore;
use realestate_api::router::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{:<12} --> 설정 로드 실패: {}", "Main", e);
            return Err(e.into());
        }
    };

    // DatabaseManager 생성
    let db_manager = match DatabaseManager::new(&config).await {
        Ok(db_manager) => db_manager,
        Err(e) => {
            error!("{:<12} --> 데이터베이스 연결 실패: {:?}", "Main", e);
            return Err(e.into());
        }
    };

    match db_manager.server_version().await {
        Ok(version) => info!("{:<12} --> Postgres: {}", "Main", version),
        Err(e) => warn!("{:<12} --> 서버 버전 조회 실패: {:?}", "Main", e),
    }

    let state = AppState::new(Arc::new(PgListingStore::new(db_manager.get_pool())));
    let routes_all = create_router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("{:<12} --> Server error: {}", "Main", err);
    }

    db_manager.pool().close().await;
    info!("{:<12} --> 서버 종료", "Main");
    Ok(())
}
// endregion: --- Main

// region:    --- Shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("{:<12} --> Ctrl+C 핸들러 설치 실패: {}", "Main", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("{:<12} --> SIGTERM 핸들러 설치 실패: {}", "Main", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("{:<12} --> Ctrl+C 수신, 종료 시작", "Main"),
        _ = terminate => warn!("{:<12} --> SIGTERM 수신, 종료 시작", "Main"),
    }
}
// endregion: --- Shutdown
