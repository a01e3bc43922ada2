//! Static file serving for the bundled admin UI.
//!
//! [`mount`] attaches a [`ServeDir`] to a router at a fixed path:
//!
//! - Mounted at `/`, the file server becomes the router's fallback, so every
//!   path not claimed by an API route is looked up on disk. No mount-level
//!   redirect is issued.
//! - Mounted at `/admin`, `GET /admin` answers `301 Moved Permanently` to
//!   `/admin/`, and `/admin/` plus everything below it is served with the
//!   `/admin` prefix stripped from the request path.

use std::path::Path;

use axum::{
    extract::Request,
    http::{header, uri::PathAndQuery, StatusCode, Uri},
    routing::get,
    Router,
};
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

#[derive(Debug, Error)]
pub enum StaticMountError {
    #[error("static mount path {0:?} must not contain URL parameters")]
    UrlParameters(String),
    #[error("static mount path {0:?} must start with '/'")]
    NotAbsolute(String),
}

/// Serve files under `dir` at `mount_path`.
pub fn mount<S>(
    router: Router<S>,
    mount_path: &str,
    dir: &Path,
) -> Result<Router<S>, StaticMountError>
where
    S: Clone + Send + Sync + 'static,
{
    if mount_path.contains(|c: char| matches!(c, '{' | '}' | '*')) {
        return Err(StaticMountError::UrlParameters(mount_path.to_string()));
    }
    if !mount_path.starts_with('/') {
        return Err(StaticMountError::NotAbsolute(mount_path.to_string()));
    }

    let prefix = mount_path.trim_end_matches('/');
    if prefix.is_empty() {
        return Ok(router.fallback_service(ServeDir::new(dir)));
    }

    let strip = prefix.to_string();
    let files = ServiceBuilder::new()
        .map_request(move |req: Request| strip_prefix(req, &strip))
        .service(ServeDir::new(dir));

    let slashed = format!("{prefix}/");
    let location = slashed.clone();
    Ok(router
        .route(
            prefix,
            get(move || {
                let location = location.clone();
                async move { (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]) }
            }),
        )
        .route_service(&slashed, files.clone())
        .route_service(&format!("{prefix}/{{*rest}}"), files))
}

/// Remove `prefix` from the front of the request path, keeping the query.
fn strip_prefix(mut req: Request, prefix: &str) -> Request {
    if let Some(uri) = stripped_uri(req.uri(), prefix) {
        *req.uri_mut() = uri;
    }
    req
}

fn stripped_uri(uri: &Uri, prefix: &str) -> Option<Uri> {
    let rest = uri.path().strip_prefix(prefix)?;
    let path = if rest.is_empty() { "/" } else { rest };
    let path_and_query = match uri.query() {
        Some(q) => format!("{path}?{q}"),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse::<PathAndQuery>().ok()?);
    Uri::from_parts(parts).ok()
}
