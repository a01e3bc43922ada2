#![deny(clippy::all)]
#![warn(clippy::pedantic)]

//! # marketing-service
//!
//! Internal marketing data service. Every endpoint requires the shared secret
//! in the `x-internal-token` header (`INTERNAL_API_TOKEN`).
//!
//! ## API surface
//!
//! | Method | Path                              | Auth | Description          |
//! |--------|-----------------------------------|------|----------------------|
//! | GET    | `/api/health`                     | Yes  | Liveness probe       |
//! | GET    | `/api/marketing/google/campaigns` | Yes  | Not implemented yet  |
//!
//! ## Architecture
//!
//! ```text
//! main.rs             : entry point, config, pool lifetime
//! lib.rs              : gated router
//! routes/
//!   mod.rs            : route table
//!   campaigns.rs      : GET /api/marketing/google/campaigns
//! ```
//!
//! Configuration, the auth gate, the pool and signal handling come from the
//! `dropship-api` library.

use clap::Parser;
use tracing::{error, info, warn};

use dropship_api::{db, serve, Config, ServiceProfile};

/// Internal marketing data service.
#[derive(Parser)]
#[command(name = "marketing-service", version)]
struct Cli {
    /// Path to TOML config file.
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref(), ServiceProfile::MARKETING) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("marketing-service: configuration error: {e}");
            std::process::exit(1);
        }
    };

    serve::init_tracing(&config.logging);
    info!("marketing-service v{} starting", env!("CARGO_PKG_VERSION"));

    if config.auth.internal_token.is_empty() {
        warn!("INTERNAL_API_TOKEN is empty, requests without a token will be accepted");
    }

    let pool = match db::connect(&config.database) {
        Ok(pool) => pool,
        Err(e) => {
            error!("Unable to connect to database: {e}");
            std::process::exit(1);
        }
    };

    let app = marketing_service::router(config.auth.internal_token.clone());
    let result = serve::run(&config.server, app).await;

    info!("Shutting down...");
    db::close(pool).await;

    if let Err(e) = result {
        error!("Server failed: {e}");
        std::process::exit(1);
    }
    info!("Goodbye");
}
