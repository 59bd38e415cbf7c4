//! Flohmarkt Admin library.
//!
//! The admin panel of the Flohmarkt marketplace as a library: a REST client
//! for the marketplace backend, the controller that drives the panel, its
//! explicit state and the askama views that render it. The binary in
//! `main.rs` serves it over HTTP; `fm-admin` drives it from a terminal.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod app_state;
pub mod config;
pub mod controller;
pub mod dialogs;
pub mod error;
pub mod form;
pub mod notifications;
pub mod routes;
pub mod state;
pub mod views;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

pub use app_state::AppState;
pub use controller::{ActionOutcome, AdminController};

/// Build the full HTTP application for `state`.
///
/// Static assets are served from `static_dir`.
pub fn app(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
