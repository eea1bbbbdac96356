use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{error, info, warn};

use kilin_account::SessionContext;
use kilin_catalog::Catalog;

use crate::form::BookingForm;
use crate::models::{BookingConfirmation, BookingFormValues};
use crate::store::{BookingError, BookingStore};
use crate::validation::{validate_booking, DatePolicy, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A booking from this customer is already being submitted")]
    AlreadySubmitting,

    /// The underlying cause is kept for logs; the message stays generic.
    #[error("There was an error processing your booking. Please try again.")]
    BookingFailed(#[source] BookingError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// User-facing toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: NotificationVariant::Default }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Default => {
                info!(title = %notification.title, "{}", notification.description)
            }
            NotificationVariant::Destructive => {
                warn!(title = %notification.title, "{}", notification.description)
            }
        }
    }
}

/// Who a submission is for: the session user, or the contact phone when
/// nobody is logged in.
pub fn submitter_key(values: &BookingFormValues, ctx: &SessionContext) -> String {
    match ctx.user_id() {
        Some(user_id) => format!("user:{}", user_id),
        None => format!("phone:{}", values.contact_phone),
    }
}

/// Releases the submitter's slot however the submission ends.
struct SubmittingGuard<'a> {
    pending: &'a Mutex<HashSet<String>>,
    key: String,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

/// Validates a filled-in form and hands it to the booking store. Each
/// submitter has at most one submission in flight; different submitters run
/// concurrently.
pub struct BookingSubmission {
    bookings: Arc<BookingStore>,
    catalog: Catalog,
    notifier: Arc<dyn Notifier>,
    max_days_ahead: Option<i64>,
    pending: Mutex<HashSet<String>>,
}

impl BookingSubmission {
    pub fn new(bookings: Arc<BookingStore>, catalog: Catalog, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            bookings,
            catalog,
            notifier,
            max_days_ahead: None,
            pending: Mutex::new(HashSet::new()),
        }
    }

    /// Caps how far ahead a booking date may be (wizard flow).
    pub fn with_max_days_ahead(mut self, days: i64) -> Self {
        self.max_days_ahead = Some(days);
        self
    }

    /// Whether any submission is in flight.
    pub fn is_submitting(&self) -> bool {
        !self.pending.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }

    pub fn is_submitting_for(&self, key: &str) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }

    fn claim(&self, key: String) -> Option<SubmittingGuard<'_>> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if !pending.insert(key.clone()) {
            return None;
        }
        Some(SubmittingGuard { pending: &self.pending, key })
    }

    pub async fn on_submit<F>(
        &self,
        form: &BookingForm,
        ctx: &SessionContext,
        on_complete: F,
    ) -> Result<BookingConfirmation, SubmissionError>
    where
        F: FnOnce(&BookingConfirmation),
    {
        self.on_submit_at(form, ctx, Utc::now().date_naive(), on_complete).await
    }

    /// [`on_submit`](Self::on_submit) with an explicit "today".
    pub async fn on_submit_at<F>(
        &self,
        form: &BookingForm,
        ctx: &SessionContext,
        today: NaiveDate,
        on_complete: F,
    ) -> Result<BookingConfirmation, SubmissionError>
    where
        F: FnOnce(&BookingConfirmation),
    {
        let key = submitter_key(form.values(), ctx);
        let Some(_guard) = self.claim(key) else {
            warn!("Submission refused: one is already in flight for this submitter");
            return Err(SubmissionError::AlreadySubmitting);
        };

        let dates = DatePolicy::new(today, self.max_days_ahead);
        if let Err(e) = validate_booking(form.values(), &self.catalog, &dates) {
            let title = match e {
                ValidationError::InvalidPhone => "Invalid phone number",
                _ => "Incomplete booking",
            };
            self.notifier.notify(Notification::failure(title, e.to_string()));
            return Err(e.into());
        }

        let mut values = form.values().clone();
        values.user_id = ctx.user_id();
        let total_price = form.total_price(&self.catalog);

        match self.bookings.submit_booking(values, total_price).await {
            Ok(confirmation) => {
                self.notifier.notify(Notification::success(
                    "Booking Confirmed!",
                    format!("Your booking reference is {}", confirmation.reference),
                ));
                on_complete(&confirmation);
                Ok(confirmation)
            }
            Err(e) => {
                error!(error = %e, "Booking submission failed");
                let failure = SubmissionError::BookingFailed(e);
                self.notifier.notify(Notification::failure("Booking Failed", failure.to_string()));
                Err(failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::{PaymentOrchestrator, SimulatedPaymentGateway};
    use crate::reference::ReferenceGenerator;
    use async_trait::async_trait;
    use kilin_account::UserAccount;
    use kilin_core::storage::keys;
    use kilin_core::{KeyValueStore, Latency, PaymentError, PaymentGateway, PaymentInfo};
    use kilin_store::{EventPublisher, InMemoryStore};
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingNotifier {
        seen: Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        fn seen(&self) -> Vec<Notification> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.seen.lock().unwrap().push(notification);
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl PaymentGateway for FailingGateway {
        async fn authorize(&self, _method: &str, _amount: i64) -> Result<PaymentInfo, PaymentError> {
            Err(PaymentError::Gateway("provider offline".to_string()))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn setup(
        gateway: Arc<dyn PaymentGateway>,
    ) -> (Arc<BookingSubmission>, Arc<InMemoryStore>, Arc<RecordingNotifier>) {
        let backing = Arc::new(InMemoryStore::new());
        let store = BookingStore::new(
            backing.clone(),
            PaymentOrchestrator::new(gateway),
            ReferenceGenerator::default(),
            Latency::none(),
            EventPublisher::default(),
        );
        let notifier = Arc::new(RecordingNotifier::default());
        let submission = BookingSubmission::new(Arc::new(store), Catalog::standard(), notifier.clone())
            .with_max_days_ahead(30);
        (Arc::new(submission), backing, notifier)
    }

    fn simulated() -> Arc<dyn PaymentGateway> {
        Arc::new(SimulatedPaymentGateway::new(Duration::ZERO))
    }

    fn filled_form() -> BookingForm {
        form_for_phone("0712345678")
    }

    fn form_for_phone(phone: &str) -> BookingForm {
        let values = BookingFormValues {
            contact_name: "Amina".to_string(),
            contact_phone: phone.to_string(),
            ..BookingFormValues::with_defaults(today())
        };
        let mut form = BookingForm::for_selection(&Catalog::standard(), "sedan", "basic", values);
        form.toggle_add_on("engine-cleaning");
        form
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let (submission, backing, notifier) = setup(simulated());
        let form = filled_form();
        let mut completed = None;

        let confirmation = submission
            .on_submit_at(&form, &SessionContext::anonymous(), today(), |c| {
                completed = Some(c.reference.clone())
            })
            .await
            .unwrap();

        assert_eq!(completed, Some(confirmation.reference.clone()));
        assert_eq!(confirmation.total_price, form.total_price(&Catalog::standard()));
        assert!(confirmation.booking_details.user_id.is_none());
        assert!(!submission.is_submitting());

        let stored = backing.get(keys::BOOKINGS).await.unwrap().unwrap();
        let stored: Vec<BookingConfirmation> = serde_json::from_str(&stored).unwrap();
        assert_eq!(stored, vec![confirmation]);

        let seen = notifier.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].variant, NotificationVariant::Default);
    }

    #[tokio::test]
    async fn test_session_user_attached() {
        let (submission, _, _) = setup(simulated());
        let account = UserAccount::new("a@example.com".into(), "A".into(), "pw".into());
        let ctx = SessionContext::authenticated(account.start_session());

        let confirmation = submission
            .on_submit_at(&filled_form(), &ctx, today(), |_| {})
            .await
            .unwrap();
        assert_eq!(confirmation.booking_details.user_id, Some(account.id));
    }

    #[tokio::test]
    async fn test_invalid_phone_never_reaches_store() {
        let (submission, backing, notifier) = setup(simulated());
        let mut form = filled_form();
        form.values_mut().contact_phone = "071234567".to_string();
        let mut called = false;

        let result = submission
            .on_submit_at(&form, &SessionContext::anonymous(), today(), |_| called = true)
            .await;

        assert!(matches!(result, Err(SubmissionError::Validation(ValidationError::InvalidPhone))));
        assert!(!called);
        assert!(backing.get(keys::BOOKINGS).await.unwrap().is_none());
        assert_eq!(notifier.seen()[0].variant, NotificationVariant::Destructive);
        assert!(!submission.is_submitting());
    }

    #[tokio::test]
    async fn test_payment_failure_is_generic_booking_failed() {
        let (submission, backing, notifier) = setup(Arc::new(FailingGateway));
        let form = filled_form();

        let err = submission
            .on_submit_at(&form, &SessionContext::anonymous(), today(), |_| {})
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::BookingFailed(BookingError::Payment(_))));
        assert_eq!(err.to_string(), "There was an error processing your booking. Please try again.");
        assert!(backing.get(keys::BOOKINGS).await.unwrap().is_none());

        let seen = notifier.seen();
        assert_eq!(seen[0].title, "Booking Failed");
        assert_eq!(seen[0].variant, NotificationVariant::Destructive);
        assert!(!submission.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_while_pending_is_refused() {
        let gateway: Arc<dyn PaymentGateway> =
            Arc::new(SimulatedPaymentGateway::new(Duration::from_millis(800)));
        let (submission, backing, _) = setup(gateway);
        let form = filled_form();

        let first = {
            let submission = submission.clone();
            let form = form.clone();
            tokio::spawn(async move {
                submission
                    .on_submit_at(&form, &SessionContext::anonymous(), today(), |_| {})
                    .await
            })
        };
        tokio::task::yield_now().await;
        assert!(submission.is_submitting_for("phone:0712345678"));

        let second = submission
            .on_submit_at(&form, &SessionContext::anonymous(), today(), |_| {})
            .await;
        assert!(matches!(second, Err(SubmissionError::AlreadySubmitting)));

        assert!(first.await.unwrap().is_ok());
        assert!(!submission.is_submitting());

        let stored = backing.get(keys::BOOKINGS).await.unwrap().unwrap();
        let stored: Vec<BookingConfirmation> = serde_json::from_str(&stored).unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_different_submitters_run_concurrently() {
        let gateway: Arc<dyn PaymentGateway> =
            Arc::new(SimulatedPaymentGateway::new(Duration::from_millis(800)));
        let (submission, backing, _) = setup(gateway);

        let spawn_for = |form: BookingForm, ctx: SessionContext| {
            let submission = submission.clone();
            tokio::spawn(async move { submission.on_submit_at(&form, &ctx, today(), |_| {}).await })
        };

        let account = UserAccount::new("juma@example.com".into(), "Juma".into(), "pw".into());
        let juma = SessionContext::authenticated(account.start_session());

        let anonymous = spawn_for(form_for_phone("0712345678"), SessionContext::anonymous());
        let other_phone = spawn_for(form_for_phone("0755000111"), SessionContext::anonymous());
        let logged_in = spawn_for(form_for_phone("0712345678"), juma);
        tokio::task::yield_now().await;

        assert!(submission.is_submitting_for("phone:0712345678"));
        assert!(submission.is_submitting_for("phone:0755000111"));
        assert!(submission.is_submitting_for(&format!("user:{}", account.id)));

        assert!(anonymous.await.unwrap().is_ok());
        assert!(other_phone.await.unwrap().is_ok());
        let confirmation = logged_in.await.unwrap().unwrap();
        assert_eq!(confirmation.booking_details.user_id, Some(account.id));
        assert!(!submission.is_submitting());

        let stored = backing.get(keys::BOOKINGS).await.unwrap().unwrap();
        let stored: Vec<BookingConfirmation> = serde_json::from_str(&stored).unwrap();
        assert_eq!(stored.len(), 3);
    }

    #[test]
    fn test_submitter_key_prefers_session_user() {
        let values = form_for_phone("0712345678").into_values();
        assert_eq!(submitter_key(&values, &SessionContext::anonymous()), "phone:0712345678");

        let account = UserAccount::new("a@example.com".into(), "A".into(), "pw".into());
        let ctx = SessionContext::authenticated(account.start_session());
        assert_eq!(submitter_key(&values, &ctx), format!("user:{}", account.id));
    }
}
