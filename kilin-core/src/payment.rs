use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

/// Outcome of a payment authorization, stored on the booking confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub method: String,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment declined: {0}")]
    Declined(String),
    #[error("Unsupported payment method: {0}")]
    UnsupportedMethod(String),
    #[error("Payment gateway error: {0}")]
    Gateway(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Authorize `amount` (TZS) against the given payment method.
    async fn authorize(&self, method: &str, amount: i64) -> Result<PaymentInfo, PaymentError>;

    /// Releases an authorization that will not be used.
    async fn void(&self, _info: &PaymentInfo) -> Result<(), PaymentError> {
        Ok(())
    }
}
