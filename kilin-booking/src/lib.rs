pub mod models;
pub mod validation;
pub mod form;
pub mod wizard;
pub mod reference;
pub mod orchestrator;
pub mod store;
pub mod submission;

pub use models::{BookingConfirmation, BookingFormValues};
pub use validation::{
    is_phone_valid, require_selection, validate_booking, DatePolicy, FormField, ValidationError,
};
pub use form::BookingForm;
pub use wizard::{next_step, previous_step, BookingWizard, WizardError, WizardStep};
pub use reference::ReferenceGenerator;
pub use orchestrator::{PaymentOrchestrator, SimulatedPaymentGateway};
pub use store::{BookingError, BookingStore};
pub use submission::{
    submitter_key, BookingSubmission, LogNotifier, Notification, NotificationVariant, Notifier,
    SubmissionError,
};
