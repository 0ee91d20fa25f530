//! Server binary: reads config, connects the subject store, serves the API.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use tutors_api::{
    app, apply_migrations, ensure_database_exists, AppConfig, AppState, MemorySubjectStore,
    PgSubjectStore, SubjectStore, TodoService,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tutors_api=info,tower_http=info")),
        )
        .init();

    let store: Arc<dyn SubjectStore> = match &config.database_url {
        Some(database_url) => {
            ensure_database_exists(database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await?;
            apply_migrations(&pool).await?;
            tracing::info!("subjects stored in postgres");
            Arc::new(PgSubjectStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; subjects are kept in memory");
            Arc::new(MemorySubjectStore::new())
        }
    };

    let todos = if config.seed_todos {
        TodoService::seeded()
    } else {
        TodoService::new()
    };
    let state = AppState::new(store, todos);
    let router = app(state, &config);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(environment = ?config.environment, "listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
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
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
