use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::models::Seat;
use crate::services::reservations::ReservationError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(list_seats))
        .route("/seats/{id}/lock", post(lock_seat))
        .route("/seats/{id}/confirm", post(confirm_seat))
}

/* ---------- Request/Response structs ---------- */

#[derive(Debug, Deserialize)]
struct SeatActionRequest {
    user: Option<String>,
}

#[derive(Serialize)]
struct ApiError {
    error: String,
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

fn to_api_error(status: StatusCode, message: &str) -> (StatusCode, Json<ApiError>) {
    (
        status,
        Json(ApiError {
            error: message.to_string(),
        }),
    )
}

fn reservation_error(err: ReservationError) -> (StatusCode, Json<ApiError>) {
    let status = match err {
        ReservationError::UserRequired => StatusCode::BAD_REQUEST,
        ReservationError::SeatNotFound => StatusCode::NOT_FOUND,
        ReservationError::AlreadyBooked
        | ReservationError::AlreadyLocked
        | ReservationError::LockExpired => StatusCode::CONFLICT,
        ReservationError::NotLockedByYou => StatusCode::FORBIDDEN,
    };
    to_api_error(status, &err.to_string())
}

/* ---------- HTTP Handlers ---------- */

// GET /seats
async fn list_seats(State(state): State<Arc<AppState>>) -> Json<Vec<Seat>> {
    Json(state.reservations.list())
}

// POST /seats/{id}/lock
async fn lock_seat(
    State(state): State<Arc<AppState>>,
    Path(seat_id): Path<u32>,
    Json(req): Json<SeatActionRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = req.user.as_deref().map(str::trim).unwrap_or_default();
    if user.is_empty() {
        return Err(to_api_error(
            StatusCode::BAD_REQUEST,
            "User is required to lock a seat",
        ));
    }

    let seat = state
        .reservations
        .lock(seat_id, user)
        .map_err(reservation_error)?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": format!("Seat {} locked by {}", seat_id, user),
            "seat": seat,
        })),
    ))
}

// POST /seats/{id}/confirm
async fn confirm_seat(
    State(state): State<Arc<AppState>>,
    Path(seat_id): Path<u32>,
    Json(req): Json<SeatActionRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = req.user.as_deref().map(str::trim).unwrap_or_default();
    if user.is_empty() {
        return Err(to_api_error(
            StatusCode::BAD_REQUEST,
            "User is required to confirm a seat",
        ));
    }

    let seat = state
        .reservations
        .confirm(seat_id, user)
        .map_err(reservation_error)?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": format!("Seat {} booked successfully by {}", seat_id, user),
            "seat": seat,
        })),
    ))
}
