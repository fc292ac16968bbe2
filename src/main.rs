use std::net::{Ipv4Addr, SocketAddr};

use tracing::info;
use tracing_subscriber::EnvFilter;
use tuiter_server::config::AppConfig;
use tuiter_server::database::client::{Database, DbConfig};
use tuiter_server::init;
use tuiter_server::middleware::error::{AppError, AppResult};
use tuiter_server::middleware::mw_ctx;

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let db = Database::connect(DbConfig {
        url: &config.db_url,
        database: &config.db_database,
        namespace: &config.db_namespace,
        password: config.db_password.as_deref(),
        username: config.db_username.as_deref(),
    })
    .await?;
    db.run_migrations().await?;

    let ctx_state = mw_ctx::create_ctx_state(db, &config);
    let routes_all = init::main_router(&ctx_state);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.server_port));
    info!("->> LISTENING on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Generic {
            description: e.to_string(),
        })?;

    axum::serve(listener, routes_all.into_make_service())
        .await
        .map_err(|e| AppError::Generic {
            description: e.to_string(),
        })?;

    Ok(())
}
