use tokio::sync::broadcast;
use tracing::{debug, info};

use kilin_shared::models::DomainEvent;

/// In-process event bus for domain events.
#[derive(Clone)]
pub struct EventPublisher {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishing with nobody subscribed is fine; the event is only logged.
    pub fn publish(&self, event: DomainEvent) {
        let topic = event.topic();
        match self.sender.send(event) {
            Ok(receivers) => info!("Published {} to {} subscriber(s)", topic, receivers),
            Err(_) => debug!("Published {} with no subscribers", topic),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kilin_shared::models::UserLoggedInEvent;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_subscriber_receives_event() {
        let publisher = EventPublisher::default();
        let mut rx = publisher.subscribe();

        let event = DomainEvent::UserLoggedIn(UserLoggedInEvent {
            user_id: Uuid::new_v4(),
            timestamp: 0,
        });
        publisher.publish(event.clone());

        assert_eq!(rx.recv().await.unwrap(), event);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let publisher = EventPublisher::default();
        publisher.publish(DomainEvent::UserLoggedIn(UserLoggedInEvent {
            user_id: Uuid::new_v4(),
            timestamp: 0,
        }));
    }
}
