pub mod clock;
pub mod config;
pub mod controllers;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use services::reservations::ReservationManager;

// Shared state for the whole application
pub struct AppState {
    pub reservations: ReservationManager,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        let reservations = ReservationManager::new(
            config.reservation.total_seats,
            config.reservation.lock_duration_ms,
        );
        Arc::new(Self {
            reservations,
            config,
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Seat Reservation API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
