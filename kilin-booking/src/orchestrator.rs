use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use kilin_core::latency::simulate;
use kilin_core::{PaymentError, PaymentGateway, PaymentInfo, PaymentStatus, CURRENCY};

pub struct PaymentOrchestrator {
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentOrchestrator {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Authorize payment for a booking total. Anything other than a
    /// completed authorization is reported as declined.
    pub async fn authorize(&self, method: &str, amount: i64) -> Result<PaymentInfo, PaymentError> {
        let info = self.gateway.authorize(method, amount).await?;
        match info.status {
            PaymentStatus::Completed => {
                info!(method, amount, "Payment authorized");
                Ok(info)
            }
            status => Err(PaymentError::Declined(format!(
                "{} payment ended as {:?}",
                method, status
            ))),
        }
    }

    /// Releases an authorization whose booking was never recorded. A void the
    /// gateway refuses is logged with the transaction id for follow-up.
    pub async fn void(&self, info: &PaymentInfo) {
        let transaction_id = info.transaction_id.as_deref().unwrap_or("none");
        match self.gateway.void(info).await {
            Ok(()) => warn!(method = %info.method, transaction_id, "Payment voided"),
            Err(e) => error!(
                method = %info.method,
                transaction_id,
                error = %e,
                "Payment could not be voided"
            ),
        }
    }
}

/// Stand-in for a mobile money provider: waits, then always succeeds.
pub struct SimulatedPaymentGateway {
    delay: std::time::Duration,
}

impl SimulatedPaymentGateway {
    pub fn new(delay: std::time::Duration) -> Self {
        Self { delay }
    }
}

/// `TXN` + last 8 digits of the epoch millis + a number below 1000.
pub fn transaction_id() -> String {
    let millis = Utc::now().timestamp_millis().to_string();
    let tail = &millis[millis.len().saturating_sub(8)..];
    let suffix: u32 = rand::thread_rng().gen_range(0..1000);
    format!("TXN{}{}", tail, suffix)
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn authorize(&self, method: &str, amount: i64) -> Result<PaymentInfo, PaymentError> {
        simulate(self.delay).await;
        let transaction_id = transaction_id();
        debug!(method, amount, currency = CURRENCY, %transaction_id, "Simulated payment");
        Ok(PaymentInfo {
            method: method.to_string(),
            status: PaymentStatus::Completed,
            transaction_id: Some(transaction_id),
        })
    }

    async fn void(&self, info: &PaymentInfo) -> Result<(), PaymentError> {
        debug!(transaction_id = ?info.transaction_id, "Simulated void");
        Ok(())
    }
}
