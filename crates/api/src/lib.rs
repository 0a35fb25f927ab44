//! HTTP API server with observability for the seat reservation engine.
//!
//! Exposes the reservation registry over REST: event state, reservation
//! creation, cancellation and per-partner listing, with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use common::EventInfo;
use inventory::{InMemorySeatLedger, SeatLedger};
use metrics_exporter_prometheus::PrometheusHandle;
use reservations::ReservationRegistry;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<L: SeatLedger + 'static>(
    state: Arc<AppState<L>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/event", get(routes::event::get::<L>))
        .route("/reservations", post(routes::reservations::create::<L>))
        .route(
            "/reservations/{id}",
            get(routes::reservations::list_for_partner::<L>)
                .delete(routes::reservations::cancel::<L>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Wires a registry around `ledger` for the given event.
pub fn create_state<L: SeatLedger>(event: EventInfo, ledger: L) -> Arc<AppState<L>> {
    Arc::new(AppState {
        event,
        registry: ReservationRegistry::new(ledger),
    })
}

/// Creates the default application state: a fresh in-memory ledger sized
/// from the configuration.
pub fn create_default_state(config: &Config) -> Arc<AppState<InMemorySeatLedger>> {
    create_state(
        config.event_info(),
        InMemorySeatLedger::for_event(&config.event_id, config.total_seats),
    )
}
