pub mod events;

pub use events::{BookingSubmittedEvent, DomainEvent, UserLoggedInEvent, UserRegisteredEvent};
