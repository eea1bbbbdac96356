use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct UserRegisteredEvent {
    pub user_id: Uuid,
    pub email: String,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct UserLoggedInEvent {
    pub user_id: Uuid,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct BookingSubmittedEvent {
    pub booking_id: Uuid,
    pub reference: String,
    pub user_id: Option<Uuid>,
    pub location: String,
    pub total_price: i64,
    pub timestamp: i64,
}

/// Everything the stores announce on the event bus.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    UserRegistered(UserRegisteredEvent),
    UserLoggedIn(UserLoggedInEvent),
    BookingSubmitted(BookingSubmittedEvent),
}

impl DomainEvent {
    /// Topic name used when the event is logged or forwarded.
    pub fn topic(&self) -> &'static str {
        match self {
            DomainEvent::UserRegistered(_) => "user.registered",
            DomainEvent::UserLoggedIn(_) => "user.logged_in",
            DomainEvent::BookingSubmitted(_) => "booking.submitted",
        }
    }

    /// The account the event concerns; `None` for anonymous bookings.
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            DomainEvent::UserRegistered(e) => Some(e.user_id),
            DomainEvent::UserLoggedIn(e) => Some(e.user_id),
            DomainEvent::BookingSubmitted(e) => e.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_booking_has_no_owner() {
        let event = DomainEvent::BookingSubmitted(BookingSubmittedEvent {
            booking_id: Uuid::new_v4(),
            reference: "KLN123456".to_string(),
            user_id: None,
            location: "dar-central".to_string(),
            total_price: 18_000,
            timestamp: 0,
        });
        assert_eq!(event.user_id(), None);

        let user_id = Uuid::new_v4();
        let event = DomainEvent::UserLoggedIn(UserLoggedInEvent { user_id, timestamp: 0 });
        assert_eq!(event.user_id(), Some(user_id));
    }
}
