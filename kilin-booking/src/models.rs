use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kilin_core::PaymentInfo;

/// Field values of an in-progress booking.
///
/// Empty strings and `None` mean "not filled in yet"; the wizard starts from
/// [`BookingFormValues::default`] with everything blank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingFormValues {
    pub contact_name: String,
    pub contact_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    pub date: Option<NaiveDate>,
    pub time_slot: String,
    pub location: String,
    pub payment_method: String,
    pub special_requests: String,
    /// Selected add-on ids, in the order they were picked.
    pub additional_services: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    /// Account that made the booking; filled in from the session at submit time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

impl BookingFormValues {
    /// Values the single-page form opens with: today, 09:00, the central
    /// branch, M-Pesa.
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            date: Some(today),
            time_slot: "09:00".to_string(),
            location: "dar-central".to_string(),
            payment_method: "m-pesa".to_string(),
            ..Self::default()
        }
    }
}

/// Immutable record written once a booking has been paid for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub booking_id: Uuid,
    /// Human-facing code, e.g. `KLN482913`.
    pub reference: String,
    pub timestamp: DateTime<Utc>,
    pub booking_details: BookingFormValues,
    pub total_price: i64,
    pub payment_info: PaymentInfo,
}

impl BookingConfirmation {
    pub fn new(
        reference: String,
        booking_details: BookingFormValues,
        total_price: i64,
        payment_info: PaymentInfo,
    ) -> Self {
        Self {
            booking_id: Uuid::new_v4(),
            reference,
            timestamp: Utc::now(),
            booking_details,
            total_price,
            payment_info,
        }
    }

    pub fn belongs_to(&self, user_id: Uuid) -> bool {
        self.booking_details.user_id == Some(user_id)
    }
}
