use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::domain::{
    BookingRequest, CustomerId, Reservation, ReservationId, ReservationRecord, ReservationStatus,
    Treatment, TreatmentDecision,
};
use super::eligibility::{EligibilityConfig, EligibilityEngine, EligibilityOutcome};
use super::repository::{
    NoticeError, NoticePublisher, RepositoryError, ReservationNotice, ReservationRepository,
};
use crate::workflows::salon::domain::SalonId;
use crate::workflows::salon::repository::{DirectoryError, SalonRepository};

/// Front-desk service composing the reservation store, the salon directory,
/// the notice publisher, and the eligibility engine.
pub struct ReservationDeskService<R, S, N> {
    reservations: Arc<R>,
    salons: Arc<S>,
    notices: Arc<N>,
    engine: Arc<EligibilityEngine>,
}

static RESERVATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_reservation_id() -> ReservationId {
    let id = RESERVATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReservationId(format!("rsv-{id:06}"))
}

impl<R, S, N> ReservationDeskService<R, S, N>
where
    R: ReservationRepository + 'static,
    S: SalonRepository + 'static,
    N: NoticePublisher + 'static,
{
    pub fn new(
        reservations: Arc<R>,
        salons: Arc<S>,
        notices: Arc<N>,
        config: EligibilityConfig,
    ) -> Self {
        Self {
            reservations,
            salons,
            notices,
            engine: Arc::new(EligibilityEngine::new(config)),
        }
    }

    pub fn engine(&self) -> &EligibilityEngine {
        &self.engine
    }

    /// Build the priced menu a customer may book at a salon on a given date.
    pub fn treatment_options(
        &self,
        customer_id: &CustomerId,
        salon_id: &SalonId,
        target: NaiveDate,
    ) -> Result<EligibilityOutcome, BookingServiceError> {
        let salon = self
            .salons
            .fetch(salon_id)?
            .ok_or(BookingServiceError::UnknownSalon)?;
        let history = self.sorted_history(customer_id)?;
        Ok(self
            .engine
            .outcome(customer_id.clone(), &history, target, &salon.prices))
    }

    /// Validate and store a new booking, returning the persisted reservation.
    pub fn book(&self, request: BookingRequest) -> Result<Reservation, BookingServiceError> {
        let salon = self
            .salons
            .fetch(&request.salon_id)?
            .ok_or(BookingServiceError::UnknownSalon)?;

        let roster = self.salons.stylists_for(&request.salon_id)?;
        if !roster.iter().any(|stylist| stylist.id == request.stylist_id) {
            return Err(BookingServiceError::StylistNotInSalon {
                stylist: request.stylist_id.0.clone(),
                salon: salon.id.0.clone(),
            });
        }

        if request.start >= request.end {
            return Err(BookingServiceError::EmptySlot);
        }

        let history = self.sorted_history(&request.customer_id)?;
        let decision = self.engine.resolve(&history, request.date);
        if decision == TreatmentDecision::Unusable {
            return Err(BookingServiceError::BookingBlocked { date: request.date });
        }
        if !decision.permits(request.treatment) {
            return Err(BookingServiceError::TreatmentNotEligible {
                treatment: request.treatment,
                decision,
            });
        }

        let reservation = Reservation {
            id: next_reservation_id(),
            customer_id: request.customer_id,
            salon_id: request.salon_id,
            stylist_id: request.stylist_id,
            date: request.date,
            start: request.start,
            end: request.end,
            treatment: request.treatment,
            status: ReservationStatus::Booked,
        };

        let stored = self.reservations.insert(reservation)?;

        let mut details = BTreeMap::new();
        details.insert("salon".to_string(), salon.name.clone());
        details.insert("date".to_string(), stored.date.to_string());
        details.insert("treatment".to_string(), stored.treatment.label().to_string());
        self.notices.publish(ReservationNotice {
            template: "reservation_confirmed".to_string(),
            reservation_id: stored.id.clone(),
            details,
        })?;

        info!(
            reservation = %stored.id.0,
            customer = %stored.customer_id.0,
            date = %stored.date,
            treatment = stored.treatment.label(),
            "reservation booked"
        );

        Ok(stored)
    }

    /// Move a booked reservation into a terminal status. Transitions only
    /// leave `Booked`; a settled reservation stays settled.
    pub fn transition(
        &self,
        id: &ReservationId,
        to: ReservationStatus,
    ) -> Result<Reservation, BookingServiceError> {
        let mut reservation = self
            .reservations
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        if to == ReservationStatus::Booked || reservation.status != ReservationStatus::Booked {
            return Err(BookingServiceError::InvalidTransition {
                from: reservation.status,
                to,
            });
        }

        reservation.status = to;
        self.reservations.update(reservation.clone())?;
        info!(
            reservation = %reservation.id.0,
            status = reservation.status.label(),
            "reservation settled"
        );
        Ok(reservation)
    }

    pub fn complete(&self, id: &ReservationId) -> Result<Reservation, BookingServiceError> {
        self.transition(id, ReservationStatus::Completed)
    }

    pub fn cancel(&self, id: &ReservationId) -> Result<Reservation, BookingServiceError> {
        self.transition(id, ReservationStatus::Cancelled)
    }

    pub fn mark_no_show(&self, id: &ReservationId) -> Result<Reservation, BookingServiceError> {
        self.transition(id, ReservationStatus::NoShow)
    }

    /// Fetch a reservation for API responses.
    pub fn get(&self, id: &ReservationId) -> Result<Reservation, BookingServiceError> {
        let reservation = self
            .reservations
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(reservation)
    }

    /// History projection for the engine: most recent first, as the resolver
    /// requires and the repository does not promise.
    fn sorted_history(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<ReservationRecord>, BookingServiceError> {
        let mut records: Vec<ReservationRecord> = self
            .reservations
            .history_for(customer_id)?
            .iter()
            .map(Reservation::history_record)
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }
}

/// Error raised by the reservation desk.
#[derive(Debug, thiserror::Error)]
pub enum BookingServiceError {
    #[error("salon not found")]
    UnknownSalon,
    #[error("stylist {stylist} is not on the roster of salon {salon}")]
    StylistNotInSalon { stylist: String, salon: String },
    #[error("reservation slot must start before it ends")]
    EmptySlot,
    #[error("customer may not book on {date}")]
    BookingBlocked { date: NaiveDate },
    #[error("treatment {treatment:?} is not offered under decision {decision:?}")]
    TreatmentNotEligible {
        treatment: Treatment,
        decision: TreatmentDecision,
    },
    #[error("cannot move reservation from {from:?} to {to:?}")]
    InvalidTransition {
        from: ReservationStatus,
        to: ReservationStatus,
    },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Notice(#[from] NoticeError),
}
