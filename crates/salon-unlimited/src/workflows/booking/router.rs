use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::domain::{BookingRequest, CustomerId, ReservationId};
use super::repository::{NoticePublisher, RepositoryError, ReservationRepository, ReservationView};
use super::service::{BookingServiceError, ReservationDeskService};
use crate::workflows::salon::domain::SalonId;
use crate::workflows::salon::repository::SalonRepository;

/// Router builder exposing HTTP endpoints for booking intake and lifecycle.
pub fn booking_router<R, S, N>(service: Arc<ReservationDeskService<R, S, N>>) -> Router
where
    R: ReservationRepository + 'static,
    S: SalonRepository + 'static,
    N: NoticePublisher + 'static,
{
    Router::new()
        .route("/api/v1/reservations", post(book_handler::<R, S, N>))
        .route(
            "/api/v1/reservations/:reservation_id",
            get(status_handler::<R, S, N>),
        )
        .route(
            "/api/v1/reservations/:reservation_id/status",
            post(transition_handler::<R, S, N>),
        )
        .route(
            "/api/v1/treatment-options",
            post(options_handler::<R, S, N>),
        )
        .with_state(service)
}

/// Options lookup payload; dates arrive as `YYYY-MM-DD`.
#[derive(Debug, Deserialize)]
pub(crate) struct TreatmentOptionsRequest {
    pub(crate) customer_id: String,
    pub(crate) salon_id: String,
    pub(crate) date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusChangeRequest {
    pub(crate) status: String,
}

pub(crate) async fn book_handler<R, S, N>(
    State(service): State<Arc<ReservationDeskService<R, S, N>>>,
    axum::Json(request): axum::Json<BookingRequest>,
) -> Response
where
    R: ReservationRepository + 'static,
    S: SalonRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.book(request) {
        Ok(reservation) => {
            let view = ReservationView::of(&reservation);
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(err) => booking_error_response(err),
    }
}

pub(crate) async fn status_handler<R, S, N>(
    State(service): State<Arc<ReservationDeskService<R, S, N>>>,
    Path(reservation_id): Path<String>,
) -> Response
where
    R: ReservationRepository + 'static,
    S: SalonRepository + 'static,
    N: NoticePublisher + 'static,
{
    let id = ReservationId(reservation_id);
    match service.get(&id) {
        Ok(reservation) => {
            let view = ReservationView::of(&reservation);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(err) => booking_error_response(err),
    }
}

pub(crate) async fn transition_handler<R, S, N>(
    State(service): State<Arc<ReservationDeskService<R, S, N>>>,
    Path(reservation_id): Path<String>,
    axum::Json(change): axum::Json<StatusChangeRequest>,
) -> Response
where
    R: ReservationRepository + 'static,
    S: SalonRepository + 'static,
    N: NoticePublisher + 'static,
{
    let id = ReservationId(reservation_id);
    let status = match change.status.parse() {
        Ok(status) => status,
        Err(invalid) => {
            let payload = json!({ "error": format!("{invalid}") });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    match service.transition(&id, status) {
        Ok(reservation) => {
            let view = ReservationView::of(&reservation);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(err) => booking_error_response(err),
    }
}

pub(crate) async fn options_handler<R, S, N>(
    State(service): State<Arc<ReservationDeskService<R, S, N>>>,
    axum::Json(request): axum::Json<TreatmentOptionsRequest>,
) -> Response
where
    R: ReservationRepository + 'static,
    S: SalonRepository + 'static,
    N: NoticePublisher + 'static,
{
    let customer = CustomerId(request.customer_id);
    let salon = SalonId(request.salon_id);
    match service.treatment_options(&customer, &salon, request.date) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(err) => booking_error_response(err),
    }
}

fn booking_error_response(err: BookingServiceError) -> Response {
    let status = match &err {
        BookingServiceError::UnknownSalon => StatusCode::NOT_FOUND,
        BookingServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        BookingServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        BookingServiceError::InvalidTransition { .. } => StatusCode::CONFLICT,
        BookingServiceError::StylistNotInSalon { .. }
        | BookingServiceError::EmptySlot
        | BookingServiceError::BookingBlocked { .. }
        | BookingServiceError::TreatmentNotEligible { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
