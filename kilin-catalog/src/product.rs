use serde::Serialize;

/// Vehicle category; its base price drives every service price.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleType {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub base_price: i64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Dry,
    Rainy,
}

/// Wash package. Its effective price is the vehicle base price scaled by
/// `price_multiplier`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServicePackage {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub price_multiplier: f64,
    /// Minutes.
    pub duration: u32,
    pub icon: &'static str,
    pub color: &'static str,
    pub seasonal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_type: Option<Season>,
    pub eco: bool,
}

/// Optional paid extra with a flat price.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: i64,
    /// Additional minutes on top of the service duration.
    pub duration: u32,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub coordinates: Coordinates,
    pub opening_hours: &'static str,
    pub phone: &'static str,
    pub services: &'static [&'static str],
    pub mobile: bool,
    pub busy: bool,
}

impl Location {
    pub fn offers(&self, service_id: &str) -> bool {
        self.services.contains(&service_id)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentMethod {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RewardCategory {
    Service,
    Discount,
    Product,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Reward {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub points: u32,
    pub category: RewardCategory,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherCondition {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub wash_recommendation: &'static str,
    pub recommended_package: Option<&'static str>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Vehicle type not found: {0}")]
    VehicleNotFound(String),

    #[error("Service package not found: {0}")]
    ServiceNotFound(String),
}
