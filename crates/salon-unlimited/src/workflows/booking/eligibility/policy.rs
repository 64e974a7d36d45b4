use chrono::NaiveDate;

use super::super::domain::{ReservationRecord, ReservationStatus, TreatmentDecision};
use super::config::EligibilityConfig;

/// Raised when the walk runs past the end of the history without reaching a
/// terminal branch. Only reachable when every remaining record is `Cancelled`
/// (or the history is empty to begin with); callers wanting the new-customer
/// default should go through `EligibilityEngine::resolve`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EligibilityError {
    #[error("reservation history index {index} out of range (history holds {len} records)")]
    OutOfRange { index: usize, len: usize },
}

/// Walk the history from `index` toward older records until a terminal rule
/// fires. `history` must already be sorted most-recent-first; this function
/// never reorders it.
pub(crate) fn decide(
    history: &[ReservationRecord],
    index: usize,
    target: NaiveDate,
    config: &EligibilityConfig,
) -> Result<TreatmentDecision, EligibilityError> {
    let mut index = index;
    loop {
        let record = history.get(index).ok_or(EligibilityError::OutOfRange {
            index,
            len: history.len(),
        })?;
        let gap = (target - record.date).num_days();

        return Ok(match record.status {
            // An open booking blocks any new one, regardless of dates.
            ReservationStatus::Booked => TreatmentDecision::Unusable,
            ReservationStatus::Completed => {
                if gap <= 0 {
                    TreatmentDecision::Unusable
                } else if gap > config.maintenance_window_days {
                    TreatmentDecision::FullCut
                } else {
                    TreatmentDecision::MaintenanceCut
                }
            }
            // Cancellations are transparent: keep looking further back.
            ReservationStatus::Cancelled => {
                index += 1;
                continue;
            }
            ReservationStatus::NoShow => {
                if gap <= config.no_show_penalty_days {
                    TreatmentDecision::Unusable
                } else {
                    // Past the penalty the no-show stops counting as a visit;
                    // the tier comes from the record before it.
                    match history.get(index + 1) {
                        None => TreatmentDecision::FullCut,
                        Some(older) => {
                            let prior_gap = (target - older.date).num_days();
                            if prior_gap > config.maintenance_window_days {
                                TreatmentDecision::FullCut
                            } else {
                                TreatmentDecision::MaintenanceCut
                            }
                        }
                    }
                }
            }
        });
    }
}
