//! Daily visitor logging.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use bbs_db::{
    models::{DbVisit, DbVisitSum},
    storage::{StoreError, Storage},
};
use chrono::Local;
use tracing::{debug, instrument, warn};

use crate::{
    context::ApiContext,
    request::{DeviceClass, browser_family, client_ip, os_family, user_agent},
};

/// Record the first visit of `ip` today and refresh today's total.
/// Returns whether a new visit was recorded.
#[instrument(skip(db, headers))]
pub async fn record_visit(db: &dyn Storage, ip: &str, headers: &HeaderMap) -> Result<bool, StoreError> {
    let now = Local::now();
    let today = now.date_naive();
    let agent = user_agent(headers);

    let visit = DbVisit {
        vi_id: 0,
        vi_ip: ip.to_string(),
        vi_date: today,
        vi_time: now.time(),
        vi_referer: headers
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string(),
        vi_agent: agent.to_string(),
        vi_browser: browser_family(agent).to_string(),
        vi_os: os_family(agent).to_string(),
        vi_device: DeviceClass::from_user_agent(agent).as_str().to_string(),
    };

    if !db.insert_visit_if_absent(visit).await? {
        return Ok(false);
    }

    let count = db.count_visits(today).await?;
    db.put_visit_sum(DbVisitSum {
        vs_date: today,
        vs_count: count,
    })
    .await?;

    debug!(count, "Recorded visit");
    Ok(true)
}

/// Middleware wrapper around [`record_visit`]. Failures are logged and the
/// request carries on.
pub async fn track_visits(State(ctx): State<ApiContext>, req: Request, next: Next) -> Response {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    // `Request` is not `Sync`; nothing borrowed from it may cross an await.
    let headers = req.headers().clone();

    if let Some(ip) = client_ip(&headers, peer) {
        if let Err(e) = record_visit(&*ctx.db, &ip, &headers).await {
            warn!(error = %e, "Failed to record visit");
        }
    }

    next.run(req).await
}
