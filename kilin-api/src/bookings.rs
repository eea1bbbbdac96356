use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::info;

use kilin_account::SessionContext;
use kilin_booking::{BookingConfirmation, BookingForm, BookingFormValues};

use crate::extract::ApiJson;
use crate::middleware::require_user;
use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings", get(list_bookings).post(create_booking))
        .route("/v1/bookings/mine", get(my_bookings))
        .route("/v1/bookings/{reference}", get(get_booking))
}

/// Prices the form from the catalog; a client-sent total is never trusted.
/// A missing or unknown vehicle/service is rejected before anything is paid.
async fn create_booking(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
    ApiJson(values): ApiJson<BookingFormValues>,
) -> Result<(StatusCode, Json<BookingConfirmation>), AppError> {
    let form = BookingForm::priced(&state.catalog, values)?;

    let confirmation = state
        .submission
        .on_submit(&form, &ctx, |c| info!("Booking {} confirmed", c.reference))
        .await?;

    Ok((StatusCode::CREATED, Json(confirmation)))
}

async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingConfirmation>>, AppError> {
    Ok(Json(state.bookings.all_bookings().await?))
}

async fn my_bookings(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
) -> Result<Json<Vec<BookingConfirmation>>, AppError> {
    let user = require_user(&ctx)?;
    Ok(Json(state.bookings.user_bookings(user.user_id).await?))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<BookingConfirmation>, AppError> {
    state
        .bookings
        .booking_by_reference(&reference)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Booking not found: {}", reference)))
}
