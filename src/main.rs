use std::{io::Error, sync::Arc};

use poem::{Server, listener::TcpListener};
use sqlx::postgres::PgPoolOptions;
use tokio::main;
use tracing_subscriber::EnvFilter;

use users_api::{
    config::Config,
    infrastructure::repositories::PostgresUserRepository,
    presentation::http::{build_app, endpoints::root::ApiState},
};

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::try_parse().map_err(Error::other)?;

    let pool = PgPoolOptions::new()
        .connect(&config.database_url)
        .await
        .map_err(Error::other)?;
    tracing::info!("connected to database");

    let state = Arc::new(ApiState::new(PostgresUserRepository::new(pool.clone())));
    let server_url = config.server_url();
    let app = build_app(state, server_url.clone());

    tracing::info!("starting server at {}", server_url);

    Server::new(TcpListener::bind(config.bind_address()))
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("shutdown signal received");
            },
            None,
        )
        .await?;

    pool.close().await;
    tracing::info!("database pool closed");
    Ok(())
}
