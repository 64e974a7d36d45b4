use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::workflows::salon::domain::{SalonId, StylistId};

/// Identifier wrapper for customers holding reservation history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub String);

/// Identifier wrapper for stored reservations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(pub String);

/// Lifecycle of a reservation. `Cancelled` and `NoShow` are terminal but differ
/// in how the eligibility rules treat them: a cancellation is skipped outright
/// while a no-show carries a penalty window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Booked,
    Completed,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ReservationStatus::Booked => "booked",
            ReservationStatus::Completed => "completed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::NoShow => "no_show",
        }
    }
}

/// Raised when a textual status entering the system matches no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized reservation status '{0}'")]
pub struct InvalidStatus(pub String);

impl FromStr for ReservationStatus {
    type Err = InvalidStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "booked" => Ok(ReservationStatus::Booked),
            "completed" => Ok(ReservationStatus::Completed),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            "no_show" | "no-show" => Ok(ReservationStatus::NoShow),
            _ => Err(InvalidStatus(value.trim().to_string())),
        }
    }
}

/// A bookable menu entry. Maintenance variants are the discounted follow-up
/// services offered inside the loyalty window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    FullCut,
    FullColor,
    MaintenanceCut,
    MaintenanceColor,
}

impl Treatment {
    pub const fn label(self) -> &'static str {
        match self {
            Treatment::FullCut => "full_cut",
            Treatment::FullColor => "full_color",
            Treatment::MaintenanceCut => "maintenance_cut",
            Treatment::MaintenanceColor => "maintenance_color",
        }
    }
}

/// Outcome of resolving a customer's history against a candidate date.
///
/// The resolver answers with the cut variant as the representative of its
/// price tier; `menu` expands the tier into every bookable treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentDecision {
    FullCut,
    FullColor,
    MaintenanceCut,
    MaintenanceColor,
    Unusable,
}

const FULL_MENU: [Treatment; 2] = [Treatment::FullCut, Treatment::FullColor];
const MAINTENANCE_MENU: [Treatment; 2] = [Treatment::MaintenanceCut, Treatment::MaintenanceColor];

impl TreatmentDecision {
    pub const fn label(self) -> &'static str {
        match self {
            TreatmentDecision::FullCut => "full_cut",
            TreatmentDecision::FullColor => "full_color",
            TreatmentDecision::MaintenanceCut => "maintenance_cut",
            TreatmentDecision::MaintenanceColor => "maintenance_color",
            TreatmentDecision::Unusable => "unusable",
        }
    }

    /// Treatments a customer may book under this decision.
    pub fn menu(self) -> &'static [Treatment] {
        match self {
            TreatmentDecision::FullCut | TreatmentDecision::FullColor => &FULL_MENU,
            TreatmentDecision::MaintenanceCut | TreatmentDecision::MaintenanceColor => {
                &MAINTENANCE_MENU
            }
            TreatmentDecision::Unusable => &[],
        }
    }

    pub fn permits(self, treatment: Treatment) -> bool {
        self.menu().contains(&treatment)
    }
}

/// The resolver's input row: one prior reservation, reduced to what the
/// eligibility rules inspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub customer_id: CustomerId,
    pub date: NaiveDate,
    pub status: ReservationStatus,
}

/// Persistent booking entity tying a customer to a salon, stylist, and slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub customer_id: CustomerId,
    pub salon_id: SalonId,
    pub stylist_id: StylistId,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub treatment: Treatment,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Projection consumed by the eligibility resolver.
    pub fn history_record(&self) -> ReservationRecord {
        ReservationRecord {
            customer_id: self.customer_id.clone(),
            date: self.date,
            status: self.status,
        }
    }
}

/// Inbound booking submission before any validation has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub customer_id: CustomerId,
    pub salon_id: SalonId,
    pub stylist_id: StylistId,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub treatment: Treatment,
}
