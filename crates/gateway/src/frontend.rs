//! The dashboard page and its static assets.
//!
//! Everything under `frontend/` is compiled in with `include_str!`, so the
//! binary serves the page without a separate asset directory. Assets carry
//! an `ETag` derived from the build version; a matching `If-None-Match`
//! gets `304 Not Modified`.

use axum::{
    Router,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

/// One embedded file.
struct Asset {
    route: &'static str,
    content_type: &'static str,
    body: &'static str,
}

const PAGE: Asset = Asset {
    route: "/",
    content_type: "text/html; charset=utf-8",
    body: include_str!("../../../frontend/index.html"),
};

const STYLESHEET: Asset = Asset {
    route: "/static/style.css",
    content_type: "text/css; charset=utf-8",
    body: include_str!("../../../frontend/style.css"),
};

const SCRIPT: Asset = Asset {
    route: "/static/app.js",
    content_type: "application/javascript; charset=utf-8",
    body: include_str!("../../../frontend/app.js"),
};

const ETAG: &str = concat!("\"launchboard-", env!("CARGO_PKG_VERSION"), "\"");

/// Routes for the page, the stylesheet and the script.
pub fn frontend_router() -> Router {
    [PAGE, STYLESHEET, SCRIPT]
        .into_iter()
        .fold(Router::new(), |router, asset| {
            let Asset {
                route,
                content_type,
                body,
            } = asset;
            router.route(
                route,
                get(move |headers: HeaderMap| async move {
                    respond(&headers, content_type, body)
                }),
            )
        })
}

fn respond(headers: &HeaderMap, content_type: &'static str, body: &'static str) -> Response {
    let cached = headers
        .get(header::IF_NONE_MATCH)
        .is_some_and(|v| v.as_bytes() == ETAG.as_bytes());

    let cache_headers = [
        (header::ETAG, HeaderValue::from_static(ETAG)),
        (header::CACHE_CONTROL, HeaderValue::from_static("no-cache")),
    ];

    if cached {
        return (StatusCode::NOT_MODIFIED, cache_headers).into_response();
    }

    (
        StatusCode::OK,
        cache_headers,
        [(header::CONTENT_TYPE, HeaderValue::from_static(content_type))],
        body,
    )
        .into_response()
}
