use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{SalonId, SalonProfileUpdate, SalonRegistration};
use super::repository::{DirectoryError, SalonRepository};
use super::service::{SalonDirectoryService, SalonServiceError};

/// Router builder exposing HTTP endpoints for the salon directory.
pub fn salon_router<R>(service: Arc<SalonDirectoryService<R>>) -> Router
where
    R: SalonRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/salons",
            get(list_handler::<R>).post(register_handler::<R>),
        )
        .route("/api/v1/salons/:salon_id", get(get_handler::<R>))
        .route(
            "/api/v1/salons/:salon_id/profile",
            put(update_profile_handler::<R>),
        )
        .route(
            "/api/v1/salons/:salon_id/stylists",
            get(stylists_handler::<R>).post(add_stylist_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct StylistCreateRequest {
    pub(crate) name: String,
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<SalonDirectoryService<R>>>,
) -> Response
where
    R: SalonRepository + 'static,
{
    match service.list() {
        Ok(salons) => (StatusCode::OK, axum::Json(salons)).into_response(),
        Err(err) => directory_error_response(err),
    }
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<SalonDirectoryService<R>>>,
    axum::Json(registration): axum::Json<SalonRegistration>,
) -> Response
where
    R: SalonRepository + 'static,
{
    match service.register(registration) {
        Ok(salon) => (StatusCode::CREATED, axum::Json(salon)).into_response(),
        Err(err) => directory_error_response(err),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<SalonDirectoryService<R>>>,
    Path(salon_id): Path<String>,
) -> Response
where
    R: SalonRepository + 'static,
{
    match service.get(&SalonId(salon_id)) {
        Ok(salon) => (StatusCode::OK, axum::Json(salon)).into_response(),
        Err(err) => directory_error_response(err),
    }
}

pub(crate) async fn update_profile_handler<R>(
    State(service): State<Arc<SalonDirectoryService<R>>>,
    Path(salon_id): Path<String>,
    axum::Json(update): axum::Json<SalonProfileUpdate>,
) -> Response
where
    R: SalonRepository + 'static,
{
    match service.update_profile(&SalonId(salon_id), update) {
        Ok(salon) => (StatusCode::OK, axum::Json(salon)).into_response(),
        Err(err) => directory_error_response(err),
    }
}

pub(crate) async fn stylists_handler<R>(
    State(service): State<Arc<SalonDirectoryService<R>>>,
    Path(salon_id): Path<String>,
) -> Response
where
    R: SalonRepository + 'static,
{
    match service.stylists_for(&SalonId(salon_id)) {
        Ok(stylists) => (StatusCode::OK, axum::Json(stylists)).into_response(),
        Err(err) => directory_error_response(err),
    }
}

pub(crate) async fn add_stylist_handler<R>(
    State(service): State<Arc<SalonDirectoryService<R>>>,
    Path(salon_id): Path<String>,
    axum::Json(request): axum::Json<StylistCreateRequest>,
) -> Response
where
    R: SalonRepository + 'static,
{
    match service.add_stylist(&SalonId(salon_id), request.name) {
        Ok(stylist) => (StatusCode::CREATED, axum::Json(stylist)).into_response(),
        Err(err) => directory_error_response(err),
    }
}

fn directory_error_response(err: SalonServiceError) -> Response {
    let status = match &err {
        SalonServiceError::Directory(DirectoryError::NotFound) => StatusCode::NOT_FOUND,
        SalonServiceError::Directory(DirectoryError::Conflict) => StatusCode::CONFLICT,
        SalonServiceError::EmptyName | SalonServiceError::InvalidPhone(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
