use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::HeaderMap,
};
use bbs_common::{
    PagingRequest, build_paging_links, normalize_page,
    params::{BoardNewDeleteParams, BoardNewListParams},
    views::{ApiErrorResponse, BoardNewDeleted, BoardNewList},
};
use bbs_db::storage::{BoardNewFilter, BoardNewStore, NewView};
use tracing::info;

use crate::{
    context::ApiContext,
    error::ApiError,
    request::{DeviceClass, user_agent},
};


/// Token action guarding [`delete_board_news`].
pub const DELETE_ACTION: &str = "delete";

const LIST_PATH: &str = "/bbs/new";

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[utoipa::path(
    get,
    path = "/api/v1/new",
    tags = ["board_new"],
    params(BoardNewListParams),
    responses((status = 200, description = "Latest posts and comments across boards", body = BoardNewList))
)]
pub async fn list_board_news(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
    Query(query): Query<BoardNewListParams>,
) -> Result<Json<BoardNewList>, ApiError> {
    let device = DeviceClass::from_user_agent(user_agent(&headers));
    let is_mobile = ctx.config.serves_mobile(device.wants_mobile());
    let paging = ctx.config.paging();
    let page_rows = paging.rows(is_mobile);

    let current_page = normalize_page(query.page.as_deref());
    let offset = (current_page as u64 - 1).saturating_mul(page_rows);

    let filter = BoardNewFilter {
        gr_id: non_empty(&query.gr_id),
        mb_id: non_empty(&query.mb_id),
        view: query.view.as_deref().and_then(NewView::parse),
    };

    let total_count = ctx.db.count_board_news(&filter).await?;
    let rows = ctx.db.list_board_news(&filter, offset, page_rows).await?;

    let mut board_news = Vec::with_capacity(rows.len());
    for (index, new) in rows.iter().enumerate() {
        let subject = ctx
            .boards
            .get_or_create(&new.bo_table, false)
            .display_subject(new.wr_id, new.wr_parent)
            .await
            .unwrap_or_default();
        let num = total_count.saturating_sub(offset.saturating_add(index as u64));
        board_news.push(new.to_view(subject, num));
    }

    let filters = query.filter_query();
    let url_prefix = if filters.is_empty() {
        format!("{LIST_PATH}?page=")
    } else {
        format!("{LIST_PATH}?{filters}&page=")
    };

    let paging = build_paging_links(&PagingRequest {
        current_page,
        total_records: total_count,
        page_rows,
        page_count: paging.pages(is_mobile),
        url_prefix,
        add_url: String::new(),
    });

    Ok(Json(BoardNewList {
        total_count,
        board_news,
        current_page,
        paging,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/new_delete",
    tags = ["board_new"],
    request_body(content = BoardNewDeleteParams, content_type = "application/json"),
    responses(
        (status = 200, description = "New-post entries deleted", body = BoardNewDeleted),
        (status = 400, description = "Malformed body or no ids given", body = ApiErrorResponse),
        (status = 403, description = "Invalid token"),
    )
)]
pub async fn delete_board_news(
    State(ctx): State<ApiContext>,
    body: Result<Json<BoardNewDeleteParams>, JsonRejection>,
) -> Result<Json<BoardNewDeleted>, ApiError> {
    let Json(body) = body?;
    if body.bn_ids.is_empty() {
        return Err(ApiError::BadRequest("No posts selected.".into()));
    }

    ctx.tokens.require(&body.token, DELETE_ACTION)?;

    let count = ctx.db.delete_board_news(&body.bn_ids).await?;
    info!(count, requested = body.bn_ids.len(), "Deleted new posts");

    Ok(Json(BoardNewDeleted {
        result: "deleted".into(),
        count,
    }))
}
