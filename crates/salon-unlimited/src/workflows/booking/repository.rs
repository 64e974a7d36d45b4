use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::domain::{CustomerId, Reservation, ReservationId};

/// Storage abstraction so the booking service can be exercised in isolation.
///
/// `history_for` returns every reservation a customer holds, in any order;
/// the service sorts before handing the records to the eligibility engine.
pub trait ReservationRepository: Send + Sync {
    fn insert(&self, reservation: Reservation) -> Result<Reservation, RepositoryError>;
    fn update(&self, reservation: Reservation) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ReservationId) -> Result<Option<Reservation>, RepositoryError>;
    fn history_for(&self, customer: &CustomerId) -> Result<Vec<Reservation>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("reservation already exists")]
    Conflict,
    #[error("reservation not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Trait describing outbound confirmation hooks (e-mail or messaging
/// adapters live behind it; delivery itself is not modeled here).
pub trait NoticePublisher: Send + Sync {
    fn publish(&self, notice: ReservationNotice) -> Result<(), NoticeError>;
}

/// Simple notice payload so routes/tests can assert integration boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationNotice {
    pub template: String,
    pub reservation_id: ReservationId,
    pub details: BTreeMap<String, String>,
}

/// Notice dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NoticeError {
    #[error("notice transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of a reservation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationView {
    pub reservation_id: ReservationId,
    pub customer_id: CustomerId,
    pub salon_id: String,
    pub stylist_id: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub treatment: &'static str,
    pub status: &'static str,
}

impl ReservationView {
    pub fn of(reservation: &Reservation) -> Self {
        Self {
            reservation_id: reservation.id.clone(),
            customer_id: reservation.customer_id.clone(),
            salon_id: reservation.salon_id.0.clone(),
            stylist_id: reservation.stylist_id.0.clone(),
            date: reservation.date,
            start: reservation.start,
            end: reservation.end,
            treatment: reservation.treatment.label(),
            status: reservation.status.label(),
        }
    }
}
