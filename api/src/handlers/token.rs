use axum::{
    Json,
    extract::{Query, State},
};
use bbs_common::{params::IssueTokenParams, token::DEFAULT_ACTION, views::IssuedToken};

use crate::{context::ApiContext, error::ApiError};

#[utoipa::path(
    get,
    path = "/api/v1/token",
    tags = ["token"],
    params(IssueTokenParams),
    responses((status = 200, description = "Freshly issued one-time token", body = IssuedToken))
)]
pub async fn issue_token(
    State(ctx): State<ApiContext>,
    Query(query): Query<IssueTokenParams>,
) -> Result<Json<IssuedToken>, ApiError> {
    let action = query
        .action
        .filter(|action| !action.is_empty())
        .unwrap_or_else(|| DEFAULT_ACTION.to_string());

    let token = ctx.tokens.issue(&action);
    Ok(Json(IssuedToken { token, action }))
}
