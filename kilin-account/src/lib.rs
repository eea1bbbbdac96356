pub mod loyalty;
pub mod models;
pub mod session_store;

pub use loyalty::LoyaltyAccount;
pub use models::{SessionContext, UserAccount, UserSession};
pub use session_store::{AuthError, SessionStore};
