use std::time::Duration;

/// Artificial delays applied before each suspending store operation.
///
/// The stores stand in for a remote backend, so every call that would be a
/// network round-trip awaits its configured latency first. Tests use
/// [`Latency::none`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latency {
    pub auth: Duration,
    pub booking: Duration,
    pub payment: Duration,
}

impl Latency {
    pub fn none() -> Self {
        Self::default()
    }

    /// Delays matching the hosted demo: 1s auth, 1.5s booking, 0.8s payment.
    pub fn simulated() -> Self {
        Self::from_millis(1000, 1500, 800)
    }

    pub fn from_millis(auth_ms: u64, booking_ms: u64, payment_ms: u64) -> Self {
        Self {
            auth: Duration::from_millis(auth_ms),
            booking: Duration::from_millis(booking_ms),
            payment: Duration::from_millis(payment_ms),
        }
    }
}

/// Sleeps for `delay`, skipping the timer entirely when it is zero.
pub async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_defaults() {
        let latency = Latency::simulated();
        assert_eq!(latency.auth, Duration::from_millis(1000));
        assert_eq!(latency.booking, Duration::from_millis(1500));
        assert_eq!(latency.payment, Duration::from_millis(800));
        assert_eq!(Latency::none().booking, Duration::ZERO);
    }

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let started = std::time::Instant::now();
        simulate(Duration::ZERO).await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }
}
