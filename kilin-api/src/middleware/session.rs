use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use kilin_account::{SessionContext, UserSession};

use crate::error::AppError;
use crate::state::AppState;

/// Restores the stored session and hands it to handlers as a
/// `SessionContext` request extension.
pub async fn session_context_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let ctx = state.sessions.restore_context().await.map_err(|e| {
        tracing::error!("Failed to restore session: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}

/// The logged-in user, or 401.
pub fn require_user(ctx: &SessionContext) -> Result<&UserSession, AppError> {
    ctx.session()
        .filter(|s| s.logged_in)
        .ok_or_else(|| AppError::AuthenticationError("Please log in to continue".to_string()))
}
