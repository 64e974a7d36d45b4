use super::domain::{Salon, SalonId, Stylist};

/// Storage abstraction for the salon directory.
pub trait SalonRepository: Send + Sync {
    fn insert(&self, salon: Salon) -> Result<Salon, DirectoryError>;
    fn update(&self, salon: Salon) -> Result<(), DirectoryError>;
    fn fetch(&self, id: &SalonId) -> Result<Option<Salon>, DirectoryError>;
    fn list(&self) -> Result<Vec<Salon>, DirectoryError>;
    fn add_stylist(&self, stylist: Stylist) -> Result<Stylist, DirectoryError>;
    fn stylists_for(&self, salon: &SalonId) -> Result<Vec<Stylist>, DirectoryError>;
}

/// Error enumeration for directory failures.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("salon already registered")]
    Conflict,
    #[error("salon not found")]
    NotFound,
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}
