use axum::{
    extract::{Extension, State},
    routing::get,
    Json, Router,
};

use kilin_account::{LoyaltyAccount, SessionContext};

use crate::middleware::require_user;
use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/account/loyalty", get(loyalty))
}

async fn loyalty(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
) -> Result<Json<LoyaltyAccount>, AppError> {
    let user = require_user(&ctx)?;
    let bookings = state.bookings.user_bookings(user.user_id).await?;
    Ok(Json(LoyaltyAccount::from_spend(
        &state.catalog,
        bookings.iter().map(|b| b.total_price),
    )))
}
