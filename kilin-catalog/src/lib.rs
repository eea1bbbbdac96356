pub mod data;
pub mod pricing;
pub mod product;

pub use pricing::{points_for, PriceQuote};
pub use product::{
    AddOn, CatalogError, Coordinates, Location, PaymentMethod, Reward, RewardCategory, Season,
    ServicePackage, VehicleType, WeatherCondition,
};

use serde::Serialize;

/// Read-only reference tables.
///
/// Lookups are linear scans; the tables hold a handful of entries each.
/// A miss returns `None` and callers pick their own display fallback.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub vehicle_types: &'static [VehicleType],
    pub service_packages: &'static [ServicePackage],
    pub add_ons: &'static [AddOn],
    pub locations: &'static [Location],
    pub payment_methods: &'static [PaymentMethod],
    pub rewards: &'static [Reward],
    pub weather_conditions: &'static [WeatherCondition],
    pub time_slots: &'static [&'static str],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The built-in tables from [`data`].
    pub fn standard() -> Self {
        Self {
            vehicle_types: data::VEHICLE_TYPES,
            service_packages: data::SERVICE_PACKAGES,
            add_ons: data::ADD_ONS,
            locations: data::LOCATIONS,
            payment_methods: data::PAYMENT_METHODS,
            rewards: data::REWARDS,
            weather_conditions: data::WEATHER_CONDITIONS,
            time_slots: data::TIME_SLOTS,
        }
    }

    pub fn vehicle(&self, id: &str) -> Option<&'static VehicleType> {
        self.vehicle_types.iter().find(|v| v.id == id)
    }

    pub fn service(&self, id: &str) -> Option<&'static ServicePackage> {
        self.service_packages.iter().find(|s| s.id == id)
    }

    pub fn add_on(&self, id: &str) -> Option<&'static AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }

    pub fn location(&self, id: &str) -> Option<&'static Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn payment_method(&self, id: &str) -> Option<&'static PaymentMethod> {
        self.payment_methods.iter().find(|p| p.id == id)
    }

    pub fn reward(&self, id: &str) -> Option<&'static Reward> {
        self.rewards.iter().find(|r| r.id == id)
    }

    pub fn weather(&self, id: &str) -> Option<&'static WeatherCondition> {
        self.weather_conditions.iter().find(|w| w.id == id)
    }

    pub fn is_time_slot(&self, slot: &str) -> bool {
        self.time_slots.contains(&slot)
    }

    /// Services offered at a location, in catalog order. Empty for unknown locations.
    pub fn services_at(&self, location_id: &str) -> Vec<&'static ServicePackage> {
        match self.location(location_id) {
            Some(location) => self
                .service_packages
                .iter()
                .filter(|s| location.offers(s.id))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn seasonal_services(&self, season: Season) -> Vec<&'static ServicePackage> {
        self.service_packages
            .iter()
            .filter(|s| s.seasonal && s.season_type == Some(season))
            .collect()
    }

    pub fn eco_services(&self) -> Vec<&'static ServicePackage> {
        self.service_packages.iter().filter(|s| s.eco).collect()
    }

    /// Package recommended for a weather condition, if the condition has one.
    pub fn recommended_service(&self, weather_id: &str) -> Option<&'static ServicePackage> {
        self.weather(weather_id)
            .and_then(|w| w.recommended_package)
            .and_then(|id| self.service(id))
    }

    // Display fallbacks

    pub fn vehicle_name_or_default(&self, id: &str) -> &'static str {
        self.vehicle(id).map(|v| v.name).unwrap_or("Unknown Vehicle")
    }

    pub fn service_name_or_default(&self, id: &str) -> &'static str {
        self.service(id).map(|s| s.name).unwrap_or("Unknown Service")
    }

    pub fn location_name_or_default(&self, id: &str) -> &'static str {
        self.location(id).map(|l| l.name).unwrap_or("Unknown Location")
    }

    /// Human label for a payment method; unknown ids are shown as-is.
    pub fn payment_method_label<'a>(&self, id: &'a str) -> &'a str {
        match self.payment_method(id) {
            Some(method) => method.name,
            None => id,
        }
    }
}
