use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::salon::domain::{
    PriceList, Salon, SalonId, SalonRegistration, Stylist,
};
use crate::workflows::salon::repository::{DirectoryError, SalonRepository};
use crate::workflows::salon::service::SalonDirectoryService;

pub(super) fn price_list() -> PriceList {
    PriceList {
        cut: 5500,
        color: 8800,
        maintenance_cut: 3300,
        maintenance_color: 6600,
    }
}

pub(super) fn registration() -> SalonRegistration {
    SalonRegistration {
        name: "Unlimited Kanda".to_string(),
        email: "kanda@unlimited.example".to_string(),
        phone: "0312345678".to_string(),
        address: "2-3-1 Kanda, Chiyoda-ku, Tokyo".to_string(),
        home_page: "https://unlimited.example/kanda".to_string(),
        business_hours: "10:00-19:00, closed Tuesdays".to_string(),
        prices: price_list(),
    }
}

pub(super) fn build_directory() -> (
    SalonDirectoryService<MemorySalonRepository>,
    Arc<MemorySalonRepository>,
) {
    let repository = Arc::new(MemorySalonRepository::default());
    let service = SalonDirectoryService::new(repository.clone());
    (service, repository)
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

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
