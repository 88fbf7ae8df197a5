use axum::extract::State;

use crate::{context::ApiContext, error::ApiError};

pub mod admin;
pub mod board_new;
pub mod token;

#[utoipa::path(
    get,
    path = "/api/v1/health",
    tags = ["health"],
    responses((status = 200, description = "Service is healthy", body = String))
)]
pub async fn health_check(State(ctx): State<ApiContext>) -> Result<&'static str, ApiError> {
    ctx.db.ping().await?;
    Ok("Healthy")
}
