#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

//! dropship-api library: exposes the building blocks of the dropship backend
//! for use by downstream crates (e.g. marketing-service).
//!
//! - `auth`: `x-internal-token` shared-secret middleware
//! - `config`: TOML + env-var configuration
//! - `db`: lazy Postgres pool bootstrap
//! - `serve`: tracing setup, listener, graceful shutdown
//! - `routes`: REST API route handlers and the app router
//! - `static_files`: admin UI mount
//! - `sync`: bounded background sync queue
//! - `tax`: Stripe Tax client
//! - `ads`: Google Ads client stub

pub mod ads;
pub mod auth;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod serve;
pub mod state;
pub mod static_files;
pub mod sync;
pub mod tax;

// Re-export key types at crate root for convenience.
pub use auth::InternalToken;
pub use config::{Config, ServiceProfile};
pub use state::AppState;
pub use sync::SyncQueue;
pub use tax::StripeTaxClient;
