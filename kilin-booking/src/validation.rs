use chrono::NaiveDate;
use std::fmt;

use kilin_catalog::{Catalog, CatalogError};

use crate::models::BookingFormValues;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date,
    TimeSlot,
    Location,
    ContactName,
    ContactPhone,
    PaymentMethod,
    Vehicle,
    Service,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Date => "date",
            FormField::TimeSlot => "time slot",
            FormField::Location => "location",
            FormField::ContactName => "name",
            FormField::ContactPhone => "phone",
            FormField::PaymentMethod => "payment method",
            FormField::Vehicle => "vehicle",
            FormField::Service => "service",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid phone number (10 digits).")]
    InvalidPhone,

    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<FormField>),

    #[error("Date {0} is in the past")]
    DateInPast(NaiveDate),

    #[error("Date {date} is more than {max_days} days ahead")]
    DateTooFar { date: NaiveDate, max_days: i64 },

    #[error("Unknown time slot: {0}")]
    UnknownTimeSlot(String),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    #[error("Unknown vehicle type: {0}")]
    UnknownVehicle(String),

    #[error("Unknown service package: {0}")]
    UnknownService(String),
}

impl From<CatalogError> for ValidationError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::VehicleNotFound(id) => ValidationError::UnknownVehicle(id),
            CatalogError::ServiceNotFound(id) => ValidationError::UnknownService(id),
        }
    }
}

fn join_fields(fields: &[FormField]) -> String {
    fields.iter().map(|f| f.to_string()).collect::<Vec<_>>().join(", ")
}

/// Window of acceptable booking dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePolicy {
    pub today: NaiveDate,
    /// `None` means no upper bound (single-page form).
    pub max_days_ahead: Option<i64>,
}

impl DatePolicy {
    pub fn new(today: NaiveDate, max_days_ahead: Option<i64>) -> Self {
        Self { today, max_days_ahead }
    }

    pub fn check(&self, date: NaiveDate) -> Result<(), ValidationError> {
        if date < self.today {
            return Err(ValidationError::DateInPast(date));
        }
        if let Some(max_days) = self.max_days_ahead {
            if (date - self.today).num_days() > max_days {
                return Err(ValidationError::DateTooFar { date, max_days });
            }
        }
        Ok(())
    }
}

/// Exactly ten ASCII digits, nothing else.
pub fn is_phone_valid(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

fn missing(checks: &[(bool, FormField)]) -> Result<(), ValidationError> {
    let fields: Vec<FormField> = checks
        .iter()
        .filter(|(present, _)| !present)
        .map(|(_, field)| *field)
        .collect();
    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(fields))
    }
}

pub fn require_schedule(values: &BookingFormValues) -> Result<(), ValidationError> {
    missing(&[
        (values.date.is_some(), FormField::Date),
        (!values.time_slot.is_empty(), FormField::TimeSlot),
        (!values.location.is_empty(), FormField::Location),
    ])
}

pub fn require_contact(values: &BookingFormValues) -> Result<(), ValidationError> {
    missing(&[
        (!values.contact_name.trim().is_empty(), FormField::ContactName),
        (!values.contact_phone.is_empty(), FormField::ContactPhone),
    ])
}

pub fn require_payment(values: &BookingFormValues) -> Result<(), ValidationError> {
    missing(&[(!values.payment_method.is_empty(), FormField::PaymentMethod)])
}

pub fn require_selection(values: &BookingFormValues) -> Result<(), ValidationError> {
    let present = |id: &Option<String>| id.as_deref().is_some_and(|id| !id.is_empty());
    missing(&[
        (present(&values.vehicle_id), FormField::Vehicle),
        (present(&values.service_id), FormField::Service),
    ])
}

/// Full check run before a booking is handed to the store.
///
/// The phone format is checked first; nothing else is looked at when it
/// fails.
pub fn validate_booking(
    values: &BookingFormValues,
    catalog: &Catalog,
    dates: &DatePolicy,
) -> Result<(), ValidationError> {
    if !is_phone_valid(&values.contact_phone) {
        return Err(ValidationError::InvalidPhone);
    }

    let mut absent = Vec::new();
    for check in [require_contact(values), require_schedule(values), require_payment(values)] {
        if let Err(ValidationError::MissingFields(fields)) = check {
            absent.extend(fields);
        }
    }
    if !absent.is_empty() {
        return Err(ValidationError::MissingFields(absent));
    }

    if let Some(date) = values.date {
        dates.check(date)?;
    }
    if !catalog.is_time_slot(&values.time_slot) {
        return Err(ValidationError::UnknownTimeSlot(values.time_slot.clone()));
    }
    if catalog.location(&values.location).is_none() {
        return Err(ValidationError::UnknownLocation(values.location.clone()));
    }
    if catalog.payment_method(&values.payment_method).is_none() {
        return Err(ValidationError::UnknownPaymentMethod(values.payment_method.clone()));
    }
    Ok(())
}
