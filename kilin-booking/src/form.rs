use kilin_catalog::Catalog;

use crate::models::BookingFormValues;
use crate::validation::{require_selection, ValidationError};

/// Form values plus the service price the form was opened with.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    values: BookingFormValues,
    base_price: i64,
}

impl BookingForm {
    pub fn new(values: BookingFormValues, base_price: i64) -> Self {
        Self { values, base_price }
    }

    /// Opens a form for a vehicle/service pair, pricing it from the catalog.
    /// Unknown ids price at 0.
    pub fn for_selection(
        catalog: &Catalog,
        vehicle_id: &str,
        service_id: &str,
        mut values: BookingFormValues,
    ) -> Self {
        values.vehicle_id = Some(vehicle_id.to_string());
        values.service_id = Some(service_id.to_string());
        let base_price = catalog.service_price_by_id(vehicle_id, service_id);
        Self { values, base_price }
    }

    /// Opens a form from client-sent values, pricing the vehicle/service
    /// pair they name. Both ids must be present and known to the catalog.
    pub fn priced(catalog: &Catalog, values: BookingFormValues) -> Result<Self, ValidationError> {
        require_selection(&values)?;
        let vehicle_id = values.vehicle_id.as_deref().unwrap_or_default();
        let service_id = values.service_id.as_deref().unwrap_or_default();
        let quote = catalog.quote::<&str>(vehicle_id, service_id, &[])?;
        Ok(Self { base_price: quote.base_price, values })
    }

    pub fn values(&self) -> &BookingFormValues {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut BookingFormValues {
        &mut self.values
    }

    pub fn into_values(self) -> BookingFormValues {
        self.values
    }

    pub fn base_price(&self) -> i64 {
        self.base_price
    }

    /// Adds the add-on if absent, removes it if present.
    pub fn toggle_add_on(&mut self, add_on_id: &str) {
        let selected = &mut self.values.additional_services;
        match selected.iter().position(|id| id == add_on_id) {
            Some(pos) => {
                selected.remove(pos);
            }
            None => selected.push(add_on_id.to_string()),
        }
    }

    pub fn is_selected(&self, add_on_id: &str) -> bool {
        self.values.additional_services.iter().any(|id| id == add_on_id)
    }

    /// Base price plus every selected add-on the catalog knows about.
    pub fn total_price(&self, catalog: &Catalog) -> i64 {
        catalog.total_price(self.base_price, self.values.additional_services.as_slice())
    }

    /// Minutes; 0 for the service part when no service is selected.
    pub fn total_duration(&self, catalog: &Catalog) -> u32 {
        let service_id = self.values.service_id.as_deref().unwrap_or_default();
        catalog.total_duration(service_id, self.values.additional_services.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prices_from_catalog() {
        let catalog = Catalog::standard();
        let form = BookingForm::for_selection(&catalog, "suv", "premium", BookingFormValues::default());
        assert_eq!(form.base_price(), catalog.service_price_by_id("suv", "premium"));
        assert_eq!(form.values().vehicle_id.as_deref(), Some("suv"));
        assert_eq!(form.total_price(&catalog), form.base_price());
    }

    #[test]
    fn test_priced_requires_known_selection() {
        let catalog = Catalog::standard();

        let missing = BookingForm::priced(&catalog, BookingFormValues::default());
        assert!(matches!(missing, Err(ValidationError::MissingFields(_))));

        let values = BookingFormValues {
            vehicle_id: Some("boat".to_string()),
            service_id: Some("basic".to_string()),
            ..BookingFormValues::default()
        };
        assert_eq!(
            BookingForm::priced(&catalog, values),
            Err(ValidationError::UnknownVehicle("boat".to_string()))
        );

        let values = BookingFormValues {
            vehicle_id: Some("suv".to_string()),
            service_id: Some("premium".to_string()),
            ..BookingFormValues::default()
        };
        let form = BookingForm::priced(&catalog, values).unwrap();
        assert_eq!(form.base_price(), 25_500);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let catalog = Catalog::standard();
        let mut form = BookingForm::new(BookingFormValues::default(), 10_000);
        form.toggle_add_on("engine-cleaning");
        let before = form.clone();

        form.toggle_add_on("leather-care");
        assert!(form.is_selected("leather-care"));
        assert_eq!(form.total_price(&catalog), 10_000 + 25_000 + 25_000);

        form.toggle_add_on("leather-care");
        assert_eq!(form, before);
        assert_eq!(form.total_price(&catalog), 35_000);
    }

    #[test]
    fn test_unknown_add_on_adds_nothing() {
        let catalog = Catalog::standard();
        let mut form = BookingForm::new(BookingFormValues::default(), 18_000);
        form.toggle_add_on("retired-addon");
        assert!(form.is_selected("retired-addon"));
        assert_eq!(form.total_price(&catalog), 18_000);
    }

    #[test]
    fn test_duration_includes_add_ons() {
        let catalog = Catalog::standard();
        let mut form = BookingForm::for_selection(&catalog, "sedan", "basic", BookingFormValues::default());
        let base = form.total_duration(&catalog);
        form.toggle_add_on("interior-disinfection");
        assert_eq!(form.total_duration(&catalog), base + 20);
    }
}
