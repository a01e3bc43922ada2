#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # dropship-api
//!
//! Unified backend for the dropship storefront and its admin panel.
//!
//! Serves a small REST API on `PORT` (default 8080) and the bundled admin UI
//! (`dist/`) for every other path.
//!
//! ## API surface
//!
//! | Method | Path                 | Auth | Description                            |
//! |--------|----------------------|------|----------------------------------------|
//! | GET    | `/api/health`        | No   | Liveness probe                         |
//! | GET    | `/api/products`      | No   | Inventory snapshot for the admin UI    |
//! | POST   | `/api/sync`          | No   | Queue a background supplier sync       |
//! | POST   | `/api/calculate-tax` | No   | Stripe Tax quote for a cart            |
//! | GET    | `/api/report`        | No   | Google Ads campaign performance        |
//! | GET    | `/*`                 | No   | Admin UI static files                  |
//!
//! ## Architecture
//!
//! ```text
//! main.rs         : entry point, config, pool lifetime, shutdown ordering
//! config.rs       : TOML + env-var configuration
//! db.rs           : lazy Postgres pool
//! serve.rs        : tracing setup, listener, signal handling
//! state.rs        : AppState shared by handlers
//! static_files.rs : admin UI mount (ServeDir + prefix strip + redirect)
//! sync.rs         : bounded background sync queue and worker
//! tax.rs          : Stripe Tax client
//! ads.rs          : Google Ads client stub
//! routes/
//!   health.rs     : GET /api/health
//!   products.rs   : GET /api/products
//!   sync.rs       : POST /api/sync
//!   tax.rs        : POST /api/calculate-tax
//!   report.rs     : GET /api/report
//! ```

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info, warn};

use dropship_api::ads::GoogleAdsClient;
use dropship_api::static_files::StaticMountError;
use dropship_api::sync::PlaceholderSync;
use dropship_api::tax::TaxError;
use dropship_api::{
    db, routes, serve, AppState, Config, ServiceProfile, StripeTaxClient, SyncQueue,
};

/// Unified dropship backend.
#[derive(Parser)]
#[command(name = "dropship-api", version)]
struct Cli {
    /// Path to TOML config file.
    #[arg(long)]
    config: Option<String>,
}

#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to build Stripe client: {0}")]
    Tax(#[from] TaxError),
    #[error("invalid admin UI mount: {0}")]
    StaticMount(#[from] StaticMountError),
    #[error("server failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref(), ServiceProfile::DROPSHIP) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("dropship-api: configuration error: {e}");
            std::process::exit(1);
        }
    };

    serve::init_tracing(&config.logging);
    info!("dropship-api v{} starting", env!("CARGO_PKG_VERSION"));

    let pool = match db::connect(&config.database) {
        Ok(pool) => pool,
        Err(e) => {
            error!("Unable to connect to database: {e}");
            std::process::exit(1);
        }
    };

    let result = run(config).await;

    // The pool outlives the server on every path, including startup failures.
    db::close(pool).await;

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
    info!("Goodbye");
}

async fn run(config: Config) -> Result<(), StartupError> {
    let config = Arc::new(config);

    let tax = StripeTaxClient::new(&config.tax)?;
    if !tax.is_configured() {
        warn!("STRIPE_API_KEY not set, tax quotes will be zero");
    }

    let (sync, sync_worker) =
        SyncQueue::start(config.sync.queue_capacity, Arc::new(PlaceholderSync));

    let state = AppState {
        config: config.clone(),
        tax,
        sync,
        ads: GoogleAdsClient::default(),
    };

    info!(
        "Serving admin UI from {} at {}",
        config.server.static_dir.display(),
        config.server.static_mount
    );

    // Every SyncQueue clone lives inside the router, so the worker can only
    // drain once the app has been dropped.
    let served = match routes::app(state) {
        Ok(app) => serve::run(&config.server, app).await.map_err(StartupError::from),
        Err(e) => Err(e.into()),
    };

    info!("Shutting down...");
    sync_worker
        .shutdown(Duration::from_secs(config.sync.shutdown_grace_secs))
        .await;

    served
}
