use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
    response::Html,
};
use bbs_common::{
    html::{editor_select, skin_select},
    params::{EditorSelectParams, SkinSelectParams},
};
use serde_json::{Map, Value};

use crate::{
    context::ApiContext,
    error::ApiError,
    request::{DeviceClass, user_agent},
    theme::{list_editors, list_skins, load_admin_menus, resolve_theme_dir},
};

/// Path segments taken from the query string must stay inside the theme.
fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/menus",
    tags = ["admin"],
    responses((status = 200, description = "Merged admin menu definitions"))
)]
pub async fn admin_menus(State(ctx): State<ApiContext>) -> Result<Json<Map<String, Value>>, ApiError> {
    let menus = load_admin_menus(&ctx.config.admin_menu_files).await?;
    Ok(Json(menus))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/skin_select",
    tags = ["admin"],
    params(SkinSelectParams),
    responses(
        (status = 200, description = "Skin picker markup", body = String, content_type = "text/html"),
        (status = 400, description = "Invalid skin kind or device"),
    )
)]
pub async fn skin_select_html(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
    Query(query): Query<SkinSelectParams>,
) -> Result<Html<String>, ApiError> {
    let device = match query.device.as_deref() {
        Some(device) => device.to_string(),
        None => {
            let client = DeviceClass::from_user_agent(user_agent(&headers));
            if ctx.config.serves_mobile(client.wants_mobile()) {
                "mobile".to_string()
            } else {
                "pc".to_string()
            }
        }
    };

    if !is_safe_segment(&query.kind) || !matches!(device.as_str(), "pc" | "mobile") {
        return Err(ApiError::BadRequest("Invalid skin kind or device.".into()));
    }

    let theme_dir = resolve_theme_dir(&ctx.config.templates_dir, &ctx.config.theme).await;
    let skins = list_skins(&theme_dir, &query.kind, &device).await?;

    Ok(Html(skin_select(
        query.id.as_deref().unwrap_or("skin"),
        &skins,
        query.selected.as_deref().unwrap_or(""),
        "",
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/editor_select",
    tags = ["admin"],
    params(EditorSelectParams),
    responses((status = 200, description = "Editor picker markup", body = String, content_type = "text/html"))
)]
pub async fn editor_select_html(
    State(ctx): State<ApiContext>,
    Query(query): Query<EditorSelectParams>,
) -> Result<Html<String>, ApiError> {
    let editors = list_editors(&ctx.config.editor_dir).await?;

    Ok(Html(editor_select(
        query.id.as_deref().unwrap_or("cf_editor"),
        &editors,
        query.selected.as_deref().unwrap_or(""),
    )))
}
