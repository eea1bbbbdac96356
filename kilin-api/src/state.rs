use std::sync::Arc;

use kilin_account::SessionStore;
use kilin_booking::{
    BookingStore, BookingSubmission, LogNotifier, PaymentOrchestrator, ReferenceGenerator,
    SimulatedPaymentGateway,
};
use kilin_catalog::Catalog;
use kilin_core::{KeyValueStore, Latency, StorageError};
use kilin_store::app_config::{BookingRules, Config};
use kilin_store::EventPublisher;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub sessions: Arc<SessionStore>,
    pub bookings: Arc<BookingStore>,
    pub submission: Arc<BookingSubmission>,
    pub events: EventPublisher,
}

impl AppState {
    /// Wires the stores over one storage backend.
    pub fn new(store: Arc<dyn KeyValueStore>, latency: Latency, rules: &BookingRules) -> Self {
        let catalog = Catalog::standard();
        let events = EventPublisher::default();

        let sessions = Arc::new(SessionStore::new(store.clone(), latency, events.clone()));
        let gateway = Arc::new(SimulatedPaymentGateway::new(latency.payment));
        let bookings = Arc::new(BookingStore::new(
            store,
            PaymentOrchestrator::new(gateway),
            ReferenceGenerator::new(rules.reference_prefix.clone(), rules.max_reference_attempts),
            latency,
            events.clone(),
        ));
        let submission = Arc::new(
            BookingSubmission::new(bookings.clone(), catalog, Arc::new(LogNotifier))
                .with_max_days_ahead(rules.max_days_ahead),
        );

        Self { catalog, sessions, bookings, submission, events }
    }

    pub fn from_config(config: &Config) -> Result<Self, StorageError> {
        let store = kilin_store::connect(&config.storage)?;
        Ok(Self::new(store, config.latency.to_latency(), &config.booking))
    }
}
