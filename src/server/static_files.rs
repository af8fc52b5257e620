//! Serves the front-end out of the configured static directory.

use crate::Result;
use hyper::{header::CONTENT_TYPE, Body, Response, StatusCode};
use log::debug;
use std::path::{Component, Path, PathBuf};

pub async fn serve(dir: &Path, uri_path: &str) -> Result<Response<Body>> {
    let path = match resolve(dir, uri_path) {
        Some(path) => path,
        None => return not_found(),
    };

    match tokio::fs::read(&path).await {
        Ok(contents) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, content_type(&path))
            .body(Body::from(contents))?),
        Err(err) => {
            debug!("static file {}: {}", path.display(), err);
            not_found()
        }
    }
}

fn resolve(dir: &Path, uri_path: &str) -> Option<PathBuf> {
    let relative = uri_path.trim_start_matches('/');
    let relative = if relative.is_empty() {
        "index.html"
    } else {
        relative
    };

    // Refuse anything that could step outside the static directory
    let relative = Path::new(relative);
    if relative
        .components()
        .any(|component| !matches!(component, Component::Normal(_)))
    {
        return None;
    }

    Some(dir.join(relative))
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

fn not_found() -> Result<Response<Body>> {
    Ok(Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::empty())?)
}
