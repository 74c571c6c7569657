mod api;
mod middleware;
mod scheduler;
mod store;

use std::sync::Arc;

use sheetshop_catalog::SheetClient;
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    store::CatalogStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(sheetshop_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(env = %config.env, bind_addr = %config.bind_addr, "starting sheetshop-server");

    let client = Arc::new(SheetClient::new(
        config.request_timeout_secs,
        &config.user_agent,
    )?);
    let store = CatalogStore::default();

    // A failed first load is not fatal: the storefront serves the error page
    // until a scheduled refresh succeeds.
    if let Err(e) = store.refresh(&client, &config.sheet_csv_url).await {
        tracing::error!(error = %e, "initial catalog load failed");
    }

    let _scheduler =
        scheduler::build_scheduler(store.clone(), Arc::clone(&client), Arc::clone(&config))
            .await?;

    let app = build_app(AppState {
        store,
        config: Arc::clone(&config),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
