//! Job board API server binary.
//!
//! All data lives in process memory and is lost on exit.

use clap::Parser;
use jobboard_api::config::ApiConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,jobboard_api=debug,jobboard_core=debug";

/// CLI arguments. Each flag overrides the matching environment variable.
#[derive(Parser, Debug)]
#[command(name = "jobboard_api_server", about = "Job board REST API server")]
struct Args {
    /// Address to listen on (e.g. 127.0.0.1:4000).
    #[arg(long)]
    bind: Option<String>,

    /// Access token lifetime in seconds.
    #[arg(long)]
    token_ttl_secs: Option<i64>,

    /// bcrypt cost factor for new password hashes (4 to 31).
    #[arg(long)]
    bcrypt_cost: Option<u32>,

    /// Allow CORS requests from this origin only.
    #[arg(long)]
    cors_origin: Option<String>,
}

impl Args {
    fn apply(self, mut config: ApiConfig) -> ApiConfig {
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(ttl) = self.token_ttl_secs {
            config.token_ttl_secs = ttl;
        }
        if let Some(cost) = self.bcrypt_cost {
            config.bcrypt_cost = cost;
        }
        if let Some(origin) = self.cors_origin {
            config.cors_origin = Some(origin);
        }
        config.validated()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Args::parse().apply(ApiConfig::from_env());
    info!(
        bind_addr = %config.bind_addr,
        token_ttl_secs = config.token_ttl_secs,
        bcrypt_cost = config.bcrypt_cost,
        cors_origin = ?config.cors_origin,
        "starting jobboard_api_server"
    );

    let state = jobboard_api::AppState::new(config.clone());
    let app = jobboard_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "cannot listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
