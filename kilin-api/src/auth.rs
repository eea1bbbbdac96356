use axum::{
    extract::{Extension, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use kilin_account::{SessionContext, UserSession};

use crate::extract::ApiJson;
use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/auth/register", post(register))
        .route("/v1/auth/login", post(login))
        .route("/v1/auth/logout", post(logout))
        .route("/v1/auth/me", get(me))
}

async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserSession>), AppError> {
    let session = state.sessions.register(&req.email, &req.name, &req.password).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<UserSession>, AppError> {
    let session = state.sessions.login(&req.email, &req.password).await?;
    Ok(Json(session))
}

async fn logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.sessions.logout().await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn me(Extension(ctx): Extension<SessionContext>) -> Result<Json<UserSession>, AppError> {
    ctx.session()
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError("No active session".to_string()))
}
