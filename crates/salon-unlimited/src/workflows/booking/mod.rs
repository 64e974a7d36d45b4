//! Reservation intake, treatment eligibility, and booking lifecycle.

pub mod domain;
pub mod eligibility;
pub mod ledger;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    BookingRequest, CustomerId, InvalidStatus, Reservation, ReservationId, ReservationRecord,
    ReservationStatus, Treatment, TreatmentDecision,
};
pub use eligibility::{
    EligibilityConfig, EligibilityEngine, EligibilityError, EligibilityOutcome, TreatmentOption,
};
pub use ledger::{LedgerImportError, ReservationLedger};
pub use repository::{
    NoticeError, NoticePublisher, RepositoryError, ReservationNotice, ReservationRepository,
    ReservationView,
};
pub use router::booking_router;
pub use service::{BookingServiceError, ReservationDeskService};
