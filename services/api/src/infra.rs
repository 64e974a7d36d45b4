use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use salon_unlimited::workflows::booking::{
    CustomerId, EligibilityConfig, NoticeError, NoticePublisher, RepositoryError, Reservation,
    ReservationId, ReservationNotice, ReservationRepository,
};
use salon_unlimited::workflows::salon::{
    DirectoryError, PriceList, Salon, SalonId, SalonRepository, Stylist,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryReservationRepository {
    records: Arc<Mutex<HashMap<ReservationId, Reservation>>>,
}

impl ReservationRepository for InMemoryReservationRepository {
    fn insert(&self, reservation: Reservation) -> Result<Reservation, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&reservation.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(reservation.id.clone(), reservation.clone());
        Ok(reservation)
    }

    fn update(&self, reservation: Reservation) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&reservation.id) {
            guard.insert(reservation.id.clone(), reservation);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ReservationId) -> Result<Option<Reservation>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn history_for(&self, customer: &CustomerId) -> Result<Vec<Reservation>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|reservation| &reservation.customer_id == customer)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySalonRepository {
    salons: Arc<Mutex<HashMap<SalonId, Salon>>>,
    stylists: Arc<Mutex<Vec<Stylist>>>,
}

impl SalonRepository for InMemorySalonRepository {
    fn insert(&self, salon: Salon) -> Result<Salon, DirectoryError> {
        let mut guard = self.salons.lock().expect("directory mutex poisoned");
        if guard.contains_key(&salon.id) {
            return Err(DirectoryError::Conflict);
        }
        guard.insert(salon.id.clone(), salon.clone());
        Ok(salon)
    }

    fn update(&self, salon: Salon) -> Result<(), DirectoryError> {
        let mut guard = self.salons.lock().expect("directory mutex poisoned");
        if guard.contains_key(&salon.id) {
            guard.insert(salon.id.clone(), salon);
            Ok(())
        } else {
            Err(DirectoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SalonId) -> Result<Option<Salon>, DirectoryError> {
        let guard = self.salons.lock().expect("directory mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<Salon>, DirectoryError> {
        let guard = self.salons.lock().expect("directory mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn add_stylist(&self, stylist: Stylist) -> Result<Stylist, DirectoryError> {
        let mut guard = self.stylists.lock().expect("directory mutex poisoned");
        guard.push(stylist.clone());
        Ok(stylist)
    }

    fn stylists_for(&self, salon: &SalonId) -> Result<Vec<Stylist>, DirectoryError> {
        let guard = self.stylists.lock().expect("directory mutex poisoned");
        Ok(guard
            .iter()
            .filter(|stylist| &stylist.salon_id == salon)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryNoticePublisher {
    events: Arc<Mutex<Vec<ReservationNotice>>>,
}

impl NoticePublisher for InMemoryNoticePublisher {
    fn publish(&self, notice: ReservationNotice) -> Result<(), NoticeError> {
        let mut guard = self.events.lock().expect("notice mutex poisoned");
        guard.push(notice);
        Ok(())
    }
}

impl InMemoryNoticePublisher {
    pub(crate) fn events(&self) -> Vec<ReservationNotice> {
        self.events.lock().expect("notice mutex poisoned").clone()
    }
}

pub(crate) fn default_eligibility_config() -> EligibilityConfig {
    EligibilityConfig {
        maintenance_window_days: 30,
        no_show_penalty_days: 20,
    }
}

/// Menu pricing used by the demo and the ledger report when no salon record
/// is on hand.
pub(crate) fn demo_price_list() -> PriceList {
    PriceList {
        cut: 5500,
        color: 8800,
        maintenance_cut: 3300,
        maintenance_color: 6600,
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
