pub mod session;

pub use session::{require_user, session_context_middleware};
