use serde::Serialize;

use crate::product::{CatalogError, ServicePackage, VehicleType};
use crate::Catalog;

/// Full price breakdown for one vehicle/service/add-on selection.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub vehicle_id: String,
    pub service_id: String,
    pub base_price: i64,
    pub add_ons_total: i64,
    pub total_price: i64,
    /// Minutes, service plus add-ons.
    pub duration: u32,
    pub points: i64,
}

/// Price of a service for a vehicle: `round(base_price × multiplier)`.
pub fn service_price(vehicle: &VehicleType, service: &ServicePackage) -> i64 {
    (vehicle.base_price as f64 * service.price_multiplier).round() as i64
}

/// Loyalty points earned for a price: one point per 100 TZS, rounded.
pub fn points_for(price: i64) -> i64 {
    (price as f64 / 100.0).round() as i64
}

impl Catalog {
    /// Service price by ids, or 0 when either id is unknown.
    pub fn service_price_by_id(&self, vehicle_id: &str, service_id: &str) -> i64 {
        match (self.vehicle(vehicle_id), self.service(service_id)) {
            (Some(vehicle), Some(service)) => service_price(vehicle, service),
            _ => 0,
        }
    }

    /// Sum of the catalog prices of `add_on_ids`. Ids missing from the
    /// catalog contribute nothing.
    pub fn add_ons_total<S: AsRef<str>>(&self, add_on_ids: &[S]) -> i64 {
        add_on_ids
            .iter()
            .filter_map(|id| self.add_on(id.as_ref()))
            .map(|a| a.price)
            .sum()
    }

    pub fn total_price<S: AsRef<str>>(&self, base_price: i64, add_on_ids: &[S]) -> i64 {
        base_price + self.add_ons_total(add_on_ids)
    }

    /// Service duration plus the extra minutes of each known add-on.
    pub fn total_duration<S: AsRef<str>>(&self, service_id: &str, add_on_ids: &[S]) -> u32 {
        let base = self.service(service_id).map(|s| s.duration).unwrap_or(0);
        let extra: u32 = add_on_ids
            .iter()
            .filter_map(|id| self.add_on(id.as_ref()))
            .map(|a| a.duration)
            .sum();
        base + extra
    }

    pub fn quote<S: AsRef<str>>(
        &self,
        vehicle_id: &str,
        service_id: &str,
        add_on_ids: &[S],
    ) -> Result<PriceQuote, CatalogError> {
        let vehicle = self
            .vehicle(vehicle_id)
            .ok_or_else(|| CatalogError::VehicleNotFound(vehicle_id.to_string()))?;
        let service = self
            .service(service_id)
            .ok_or_else(|| CatalogError::ServiceNotFound(service_id.to_string()))?;

        let base_price = service_price(vehicle, service);
        let add_ons_total = self.add_ons_total(add_on_ids);
        let total_price = base_price + add_ons_total;

        Ok(PriceQuote {
            vehicle_id: vehicle.id.to_string(),
            service_id: service.id.to_string(),
            base_price,
            add_ons_total,
            total_price,
            duration: self.total_duration(service_id, add_on_ids),
            points: points_for(total_price),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_price_for_every_pair() {
        let catalog = Catalog::standard();
        for vehicle in catalog.vehicle_types {
            for service in catalog.service_packages {
                let expected = (vehicle.base_price as f64 * service.price_multiplier).round() as i64;
                assert_eq!(service_price(vehicle, service), expected);
                assert_eq!(catalog.service_price_by_id(vehicle.id, service.id), expected);
            }
        }
    }

    #[test]
    fn test_known_prices() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.service_price_by_id("sedan", "basic"), 10_000);
        assert_eq!(catalog.service_price_by_id("suv", "premium"), 25_500);
        assert_eq!(catalog.service_price_by_id("motorcycle", "waterless"), 9_100);
        assert_eq!(catalog.service_price_by_id("luxury", "deluxe"), 62_500);
        assert_eq!(catalog.service_price_by_id("boat", "basic"), 0);
    }

    #[test]
    fn test_add_ons_total_ignores_unknown_ids() {
        let catalog = Catalog::standard();
        let ids = ["engine-cleaning", "stale-id", "headlight-restoration"];
        assert_eq!(catalog.add_ons_total(&ids), 45_000);
        assert_eq!(catalog.total_price(10_000, &ids), 55_000);
        assert_eq!(catalog.add_ons_total::<&str>(&[]), 0);
    }

    #[test]
    fn test_total_for_every_add_on_subset() {
        let catalog = Catalog::standard();
        let all: Vec<&str> = catalog.add_ons.iter().map(|a| a.id).collect();
        for mask in 0u32..(1 << all.len()) {
            let subset: Vec<&str> = all
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, id)| *id)
                .collect();
            let expected: i64 = subset.iter().map(|id| catalog.add_on(id).unwrap().price).sum();
            assert_eq!(catalog.total_price(17_000, &subset), 17_000 + expected);
        }
    }

    #[test]
    fn test_total_duration() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.total_duration("premium", &["uv-protection"]), 120);
        assert_eq!(catalog.total_duration::<&str>("unknown", &[]), 0);
    }

    #[test]
    fn test_points() {
        assert_eq!(points_for(25_500), 255);
        assert_eq!(points_for(9_150), 92);
        assert_eq!(points_for(0), 0);
    }

    #[test]
    fn test_quote() {
        let catalog = Catalog::standard();
        let quote = catalog.quote("suv", "premium", &["leather-care"]).unwrap();
        assert_eq!(quote.base_price, 25_500);
        assert_eq!(quote.add_ons_total, 25_000);
        assert_eq!(quote.total_price, 50_500);
        assert_eq!(quote.duration, 105);
        assert_eq!(quote.points, 505);

        assert_eq!(
            catalog.quote::<&str>("van", "basic", &[]),
            Err(CatalogError::VehicleNotFound("van".to_string()))
        );
        assert_eq!(
            catalog.quote::<&str>("sedan", "gold", &[]),
            Err(CatalogError::ServiceNotFound("gold".to_string()))
        );
    }
}
