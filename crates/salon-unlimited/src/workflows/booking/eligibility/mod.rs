mod config;
mod policy;

pub use config::EligibilityConfig;
pub use policy::EligibilityError;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{CustomerId, ReservationRecord, Treatment, TreatmentDecision};
use crate::workflows::salon::domain::PriceList;

/// Stateless resolver applying the booking-window rules to a customer's
/// ordered reservation history. Every caller that needs a decision (booking
/// validation, the options endpoint, the CLI report) goes through one of
/// these methods, so the rule exists in exactly one place.
pub struct EligibilityEngine {
    config: EligibilityConfig,
}

impl EligibilityEngine {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    /// Resolve the decision for a candidate date, starting from the most
    /// recent record. An empty history, or one that is cancellations all the
    /// way down, falls back to the new-customer default of a full cut.
    ///
    /// `history` must be sorted by date descending; the engine never sorts.
    pub fn resolve(&self, history: &[ReservationRecord], target: NaiveDate) -> TreatmentDecision {
        match policy::decide(history, 0, target, &self.config) {
            Ok(decision) => decision,
            Err(EligibilityError::OutOfRange { .. }) => TreatmentDecision::FullCut,
        }
    }

    /// Resolve starting from an explicit index, surfacing exhaustion as an
    /// `OutOfRange` error instead of applying the new-customer default.
    pub fn resolve_at(
        &self,
        history: &[ReservationRecord],
        index: usize,
        target: NaiveDate,
    ) -> Result<TreatmentDecision, EligibilityError> {
        policy::decide(history, index, target, &self.config)
    }

    /// Resolve and expand the decision into the priced menu a booking form
    /// can render.
    pub fn outcome(
        &self,
        customer_id: CustomerId,
        history: &[ReservationRecord],
        target: NaiveDate,
        prices: &PriceList,
    ) -> EligibilityOutcome {
        let decision = self.resolve(history, target);
        let options = decision
            .menu()
            .iter()
            .map(|&treatment| TreatmentOption {
                treatment,
                price: prices.price_for(treatment),
            })
            .collect();

        EligibilityOutcome {
            customer_id,
            target_date: target,
            decision,
            options,
        }
    }
}

/// One selectable row in the booking form: a treatment and its price at the
/// salon in question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentOption {
    pub treatment: Treatment,
    pub price: u32,
}

/// Decision plus the menu it unlocks, ready for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub customer_id: CustomerId,
    pub target_date: NaiveDate,
    pub decision: TreatmentDecision,
    pub options: Vec<TreatmentOption>,
}
