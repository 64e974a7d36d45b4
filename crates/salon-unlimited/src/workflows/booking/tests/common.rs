use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;

use crate::workflows::booking::domain::{
    BookingRequest, CustomerId, Reservation, ReservationId, ReservationRecord, ReservationStatus,
    Treatment,
};
use crate::workflows::booking::eligibility::{EligibilityConfig, EligibilityEngine};
use crate::workflows::booking::repository::{
    NoticeError, NoticePublisher, RepositoryError, ReservationNotice, ReservationRepository,
};
use crate::workflows::booking::service::ReservationDeskService;
use crate::workflows::salon::domain::{PriceList, Salon, SalonId, Stylist, StylistId};
use crate::workflows::salon::repository::{DirectoryError, SalonRepository};

pub(super) fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

pub(super) fn customer() -> CustomerId {
    CustomerId("cus-001".to_string())
}

pub(super) fn record(date: NaiveDate, status: ReservationStatus) -> ReservationRecord {
    ReservationRecord {
        customer_id: customer(),
        date,
        status,
    }
}

pub(super) fn eligibility_config() -> EligibilityConfig {
    EligibilityConfig {
        maintenance_window_days: 30,
        no_show_penalty_days: 20,
    }
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(eligibility_config())
}

pub(super) fn price_list() -> PriceList {
    PriceList {
        cut: 5500,
        color: 8800,
        maintenance_cut: 3300,
        maintenance_color: 6600,
    }
}

pub(super) fn salon() -> Salon {
    Salon {
        id: SalonId("sln-main".to_string()),
        name: "Unlimited Kanda".to_string(),
        email: "kanda@unlimited.example".to_string(),
        phone: "0312345678".to_string(),
        address: "2-3-1 Kanda, Chiyoda-ku, Tokyo".to_string(),
        home_page: "https://unlimited.example/kanda".to_string(),
        business_hours: "10:00-19:00, closed Tuesdays".to_string(),
        prices: price_list(),
    }
}

pub(super) fn stylist() -> Stylist {
    Stylist {
        id: StylistId("sty-main".to_string()),
        name: "Aoi Tanaka".to_string(),
        salon_id: salon().id,
    }
}

pub(super) fn booking_request(date: NaiveDate) -> BookingRequest {
    BookingRequest {
        customer_id: customer(),
        salon_id: salon().id,
        stylist_id: stylist().id,
        date,
        start: at(10, 0),
        end: at(11, 0),
        treatment: Treatment::FullCut,
    }
}

/// Insert a prior visit directly into the repository, bypassing booking
/// validation, so scenarios can start from arbitrary histories.
pub(super) fn seed_visit(
    repository: &MemoryReservationRepository,
    id: &str,
    date: NaiveDate,
    status: ReservationStatus,
) {
    repository
        .insert(Reservation {
            id: ReservationId(id.to_string()),
            customer_id: customer(),
            salon_id: salon().id,
            stylist_id: stylist().id,
            date,
            start: at(10, 0),
            end: at(11, 0),
            treatment: Treatment::FullCut,
            status,
        })
        .expect("seed insert succeeds");
}

pub(super) fn build_desk() -> (
    ReservationDeskService<MemoryReservationRepository, MemorySalonRepository, MemoryNotices>,
    Arc<MemoryReservationRepository>,
    Arc<MemorySalonRepository>,
    Arc<MemoryNotices>,
) {
    let reservations = Arc::new(MemoryReservationRepository::default());
    let salons = Arc::new(MemorySalonRepository::default());
    let notices = Arc::new(MemoryNotices::default());

    salons.insert(salon()).expect("seed salon");
    salons.add_stylist(stylist()).expect("seed stylist");

    let service = ReservationDeskService::new(
        reservations.clone(),
        salons.clone(),
        notices.clone(),
        eligibility_config(),
    );
    (service, reservations, salons, notices)
}

#[derive(Default, Clone)]
pub(super) struct MemoryReservationRepository {
    records: Arc<Mutex<HashMap<ReservationId, Reservation>>>,
}

impl ReservationRepository for MemoryReservationRepository {
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
pub(super) struct MemorySalonRepository {
    salons: Arc<Mutex<HashMap<SalonId, Salon>>>,
    stylists: Arc<Mutex<Vec<Stylist>>>,
}

impl SalonRepository for MemorySalonRepository {
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
pub(super) struct MemoryNotices {
    events: Arc<Mutex<Vec<ReservationNotice>>>,
}

impl MemoryNotices {
    pub(super) fn events(&self) -> Vec<ReservationNotice> {
        self.events.lock().expect("notice mutex poisoned").clone()
    }
}

impl NoticePublisher for MemoryNotices {
    fn publish(&self, notice: ReservationNotice) -> Result<(), NoticeError> {
        self.events
            .lock()
            .expect("notice mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
