//! Static host for the portfolio bundle
//!
//! Serves the built assets under the deploy base path and falls back to
//! `index.html` for unknown paths, which is what path-based routing
//! needs for deep links to resolve.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::Redirect,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use tower_http::services::{ServeDir, ServeFile};

#[tokio::main]
async fn main() {
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let base_path = std::env::var("BASE_PATH").unwrap_or_else(|_| "/Portfolio-Site".to_string());
    let base_path = format!("/{}", base_path.trim_matches('/'));
    let dist_dir = std::env::var("DIST_DIR").unwrap_or_else(|_| "dist".to_string());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    // Unknown paths under the base serve the app shell so the client
    // router can resolve them.
    let index = ServeFile::new(format!("{dist_dir}/index.html"));
    let serve_dir = ServeDir::new(&dist_dir)
        .precompressed_gzip()
        .precompressed_br()
        .fallback(index);

    let root_redirect = format!("{base_path}/");
    let app = Router::new()
        .route("/", get(move || async move { Redirect::temporary(&root_redirect) }))
        .nest_service(&base_path, serve_dir)
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not found") })
        .layer(axum::middleware::from_fn(add_headers));

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║              Portfolio Static Host                ║");
    println!("╠═══════════════════════════════════════════════════╣");
    println!("║  URL: http://localhost:{port}{base_path}");
    println!("║  Press Ctrl+C to stop                             ║");
    println!("╚═══════════════════════════════════════════════════╝");
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Fix MIME types for the module script and wasm bundle
async fn add_headers(request: Request<Body>, next: axum::middleware::Next) -> axum::response::Response {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    if path.ends_with(".js") || path.ends_with(".mjs") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/javascript; charset=utf-8"),
        );
    } else if path.ends_with(".wasm") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/wasm"),
        );
    } else if path.ends_with(".css") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/css; charset=utf-8"),
        );
    } else if path.ends_with(".html") || path == "/" {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
    }

    response
}
