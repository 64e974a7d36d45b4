use serde::{Deserialize, Serialize};

use crate::workflows::booking::domain::Treatment;

/// Identifier wrapper for registered salons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalonId(pub String);

/// Identifier wrapper for stylists on a salon's roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StylistId(pub String);

/// Per-salon menu pricing in yen, one entry per bookable treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceList {
    pub cut: u32,
    pub color: u32,
    pub maintenance_cut: u32,
    pub maintenance_color: u32,
}

impl PriceList {
    pub fn price_for(&self, treatment: Treatment) -> u32 {
        match treatment {
            Treatment::FullCut => self.cut,
            Treatment::FullColor => self.color,
            Treatment::MaintenanceCut => self.maintenance_cut,
            Treatment::MaintenanceColor => self.maintenance_color,
        }
    }
}

/// A registered salon and its public storefront details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salon {
    pub id: SalonId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub home_page: String,
    pub business_hours: String,
    pub prices: PriceList,
}

/// Registration payload for a new salon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalonRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub home_page: String,
    pub business_hours: String,
    pub prices: PriceList,
}

/// Storefront fields a salon may edit after registration. Pricing is absent:
/// menu prices are fixed at registration and never pass through this form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalonProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub home_page: Option<String>,
    #[serde(default)]
    pub business_hours: Option<String>,
}

/// A stylist attached to exactly one salon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylist {
    pub id: StylistId,
    pub name: String,
    pub salon_id: SalonId,
}
