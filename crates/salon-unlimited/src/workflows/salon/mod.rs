//! Salon directory: registration, storefront profiles, and stylist rosters.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    PriceList, Salon, SalonId, SalonProfileUpdate, SalonRegistration, Stylist, StylistId,
};
pub use repository::{DirectoryError, SalonRepository};
pub use router::salon_router;
pub use service::{SalonDirectoryService, SalonServiceError};
