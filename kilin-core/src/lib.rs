pub mod latency;
pub mod payment;
pub mod storage;

pub use latency::Latency;
pub use payment::{PaymentError, PaymentGateway, PaymentInfo, PaymentStatus};
pub use storage::{KeyValueStore, StorageError, StorageResult};

/// Currency every price in the system is expressed in (Tanzanian shilling).
pub const CURRENCY: &str = "TZS";
