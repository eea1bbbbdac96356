use std::collections::HashSet;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use kilin_core::latency::simulate;
use kilin_core::storage::{keys, KeyValueStore, StorageError};
use kilin_core::{Latency, PaymentError};
use kilin_shared::models::{BookingSubmittedEvent, DomainEvent};
use kilin_store::collection::{append_item, load_collection};
use kilin_store::EventPublisher;

use crate::models::{BookingConfirmation, BookingFormValues};
use crate::orchestrator::PaymentOrchestrator;
use crate::reference::ReferenceGenerator;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Could not issue a unique booking reference after {0} attempts")]
    ReferenceExhausted(u32),
}

/// Append-only collection of booking confirmations.
pub struct BookingStore {
    store: Arc<dyn KeyValueStore>,
    payments: PaymentOrchestrator,
    references: ReferenceGenerator,
    latency: Latency,
    events: EventPublisher,
}

impl BookingStore {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        payments: PaymentOrchestrator,
        references: ReferenceGenerator,
        latency: Latency,
        events: EventPublisher,
    ) -> Self {
        Self { store, payments, references, latency, events }
    }

    /// Pays for and records a booking. `total_price` is stored as given.
    ///
    /// The reference is drawn before the payment is authorized, so running
    /// out of references never charges anyone. When the append fails after
    /// payment, the authorization is voided and the storage error returned.
    ///
    /// The reference check and the append are separate steps, so two
    /// concurrent submissions can in principle draw the same reference.
    pub async fn submit_booking(
        &self,
        values: BookingFormValues,
        total_price: i64,
    ) -> Result<BookingConfirmation, BookingError> {
        simulate(self.latency.booking).await;

        let existing = self.all_bookings().await?;
        let taken: HashSet<&str> = existing.iter().map(|b| b.reference.as_str()).collect();
        let reference = self
            .references
            .unique(&taken)
            .ok_or_else(|| {
                warn!("No free booking reference found");
                BookingError::ReferenceExhausted(self.references.max_attempts())
            })?;

        let payment_info = self.payments.authorize(&values.payment_method, total_price).await?;

        let confirmation = BookingConfirmation::new(reference, values, total_price, payment_info);
        if let Err(e) = append_item(self.store.as_ref(), keys::BOOKINGS, &confirmation).await {
            error!(
                reference = %confirmation.reference,
                transaction_id = ?confirmation.payment_info.transaction_id,
                error = %e,
                "Paid booking could not be recorded"
            );
            self.payments.void(&confirmation.payment_info).await;
            return Err(e.into());
        }

        info!(
            booking_id = %confirmation.booking_id,
            reference = %confirmation.reference,
            total_price,
            "Booking submitted"
        );
        self.events.publish(DomainEvent::BookingSubmitted(BookingSubmittedEvent {
            booking_id: confirmation.booking_id,
            reference: confirmation.reference.clone(),
            user_id: confirmation.booking_details.user_id,
            location: confirmation.booking_details.location.clone(),
            total_price,
            timestamp: confirmation.timestamp.timestamp(),
        }));

        Ok(confirmation)
    }

    /// Every stored booking in submission order; empty when nothing is
    /// stored or the stored data is corrupt.
    pub async fn all_bookings(&self) -> Result<Vec<BookingConfirmation>, StorageError> {
        load_collection(self.store.as_ref(), keys::BOOKINGS).await
    }

    pub async fn user_bookings(&self, user_id: Uuid) -> Result<Vec<BookingConfirmation>, StorageError> {
        let mut bookings = self.all_bookings().await?;
        bookings.retain(|b| b.belongs_to(user_id));
        Ok(bookings)
    }

    pub async fn booking_by_reference(
        &self,
        reference: &str,
    ) -> Result<Option<BookingConfirmation>, StorageError> {
        Ok(self
            .all_bookings()
            .await?
            .into_iter()
            .find(|b| b.reference == reference))
    }
}
