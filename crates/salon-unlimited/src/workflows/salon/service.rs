use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::domain::{
    Salon, SalonId, SalonProfileUpdate, SalonRegistration, Stylist, StylistId,
};
use super::repository::{DirectoryError, SalonRepository};

/// Service managing salon registration and the stylist roster.
pub struct SalonDirectoryService<R> {
    repository: Arc<R>,
}

static SALON_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static STYLIST_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_salon_id() -> SalonId {
    let id = SALON_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SalonId(format!("sln-{id:04}"))
}

fn next_stylist_id() -> StylistId {
    let id = STYLIST_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    StylistId(format!("sty-{id:04}"))
}

fn phone_is_valid(phone: &str) -> bool {
    !phone.is_empty() && phone.chars().all(|c| c.is_ascii_digit())
}

impl<R> SalonDirectoryService<R>
where
    R: SalonRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new salon, validating the storefront fields first.
    pub fn register(&self, registration: SalonRegistration) -> Result<Salon, SalonServiceError> {
        if registration.name.trim().is_empty() {
            return Err(SalonServiceError::EmptyName);
        }
        if !phone_is_valid(&registration.phone) {
            return Err(SalonServiceError::InvalidPhone(registration.phone));
        }

        let salon = Salon {
            id: next_salon_id(),
            name: registration.name,
            email: registration.email,
            phone: registration.phone,
            address: registration.address,
            home_page: registration.home_page,
            business_hours: registration.business_hours,
            prices: registration.prices,
        };

        let stored = self.repository.insert(salon)?;
        Ok(stored)
    }

    pub fn list(&self) -> Result<Vec<Salon>, SalonServiceError> {
        Ok(self.repository.list()?)
    }

    pub fn get(&self, id: &SalonId) -> Result<Salon, SalonServiceError> {
        let salon = self.repository.fetch(id)?.ok_or(DirectoryError::NotFound)?;
        Ok(salon)
    }

    /// Apply a storefront update. Prices never change through this path.
    pub fn update_profile(
        &self,
        id: &SalonId,
        update: SalonProfileUpdate,
    ) -> Result<Salon, SalonServiceError> {
        let mut salon = self.repository.fetch(id)?.ok_or(DirectoryError::NotFound)?;

        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(SalonServiceError::EmptyName);
            }
            salon.name = name;
        }
        if let Some(phone) = update.phone {
            if !phone_is_valid(&phone) {
                return Err(SalonServiceError::InvalidPhone(phone));
            }
            salon.phone = phone;
        }
        if let Some(email) = update.email {
            salon.email = email;
        }
        if let Some(address) = update.address {
            salon.address = address;
        }
        if let Some(home_page) = update.home_page {
            salon.home_page = home_page;
        }
        if let Some(business_hours) = update.business_hours {
            salon.business_hours = business_hours;
        }

        self.repository.update(salon.clone())?;
        Ok(salon)
    }

    /// Put a stylist on a salon's roster.
    pub fn add_stylist(
        &self,
        salon_id: &SalonId,
        name: String,
    ) -> Result<Stylist, SalonServiceError> {
        self.repository
            .fetch(salon_id)?
            .ok_or(DirectoryError::NotFound)?;

        let stylist = Stylist {
            id: next_stylist_id(),
            name,
            salon_id: salon_id.clone(),
        };
        let stored = self.repository.add_stylist(stylist)?;
        Ok(stored)
    }

    pub fn stylists_for(&self, salon_id: &SalonId) -> Result<Vec<Stylist>, SalonServiceError> {
        Ok(self.repository.stylists_for(salon_id)?)
    }
}

/// Error raised by the salon directory service.
#[derive(Debug, thiserror::Error)]
pub enum SalonServiceError {
    #[error("salon name must not be empty")]
    EmptyName,
    #[error("salon phone number '{0}' must contain digits only")]
    InvalidPhone(String),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
