//! Page navigation markup.
//!
//! The window of numbered links is centred on the current page. Block links
//! ("이전"/"다음") jump a whole window at a time, and "처음"/"마지막" go to the
//! ends of the list.

use serde::{Deserialize, Serialize};

/// Input for [`build_paging_links`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingRequest {
    pub current_page: i64,
    pub total_records: u64,
    /// Records per page. Values below 1 are treated as 1.
    pub page_rows: u64,
    /// Width of the numbered page window. Values below 1 are treated as 1.
    pub page_count: u64,
    pub url_prefix: String,
    pub add_url: String,
}

/// Page sizing as persisted in the site configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingConfig {
    pub page_rows: u64,
    /// 0 falls back to `page_rows`.
    pub mobile_page_rows: u64,
    pub write_pages: u64,
    /// 0 falls back to `write_pages`.
    pub mobile_pages: u64,
}

impl PagingConfig {
    pub fn rows(&self, is_mobile: bool) -> u64 {
        let rows = if is_mobile && self.mobile_page_rows > 0 {
            self.mobile_page_rows
        } else {
            self.page_rows
        };
        rows.max(1)
    }

    pub fn pages(&self, is_mobile: bool) -> u64 {
        let pages = if is_mobile && self.mobile_pages > 0 {
            self.mobile_pages
        } else {
            self.write_pages
        };
        pages.max(1)
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_rows: 15,
            mobile_page_rows: 0,
            write_pages: 10,
            mobile_pages: 5,
        }
    }
}

/// Parse a raw `page` value. Anything that is not a positive integer becomes 1.
pub fn normalize_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

pub fn total_pages(total_records: u64, page_rows: u64) -> u64 {
    let page_rows = page_rows.max(1);
    total_records.div_ceil(page_rows)
}

/// Render the navigation fragment for a list view.
///
/// URLs are `url_prefix + page + add_url` with no encoding applied; callers
/// pass pre-encoded components.
pub fn build_paging_links(req: &PagingRequest) -> String {
    let current_page = req.current_page.max(1);
    let page_count = req.page_count.max(1) as i64;
    let total_pages = total_pages(req.total_records, req.page_rows) as i64;

    let middle = page_count / 2;
    let start_page = current_page.saturating_sub(middle).max(1);
    let end_page = total_pages.min(start_page.saturating_add(page_count - 1));

    let url = |page: i64| format!("{}{}{}", req.url_prefix, page, req.add_url);
    let mut links = String::new();

    if current_page > 1 {
        links.push_str(&format!(
            r#"<a href="{}" class="pg_page pg_start" title="처음 페이지">처음</a>"#,
            url(1)
        ));
    }

    if start_page > 1 {
        let prev_page = current_page.saturating_sub(page_count).max(1);
        links.push_str(&format!(
            r#"<a href="{}" class="pg_page pg_prev" title="이전 구간">이전</a>"#,
            url(prev_page)
        ));
    }

    for page in start_page..=end_page {
        if page == current_page {
            links.push_str(&format!(
                r#"<strong class="pg_current" title="현재 {page} 페이지">{page}</strong>"#
            ));
        } else {
            links.push_str(&format!(
                r#"<a href="{}" class="pg_page" title="{page} 페이지">{page}</a>"#,
                url(page)
            ));
        }
    }

    if total_pages > end_page {
        let next_page = current_page.saturating_add(page_count).min(total_pages);
        links.push_str(&format!(
            r#"<a href="{}" class="pg_page pg_next" title="다음 구간">다음</a>"#,
            url(next_page)
        ));
    }

    if current_page < total_pages {
        links.push_str(&format!(
            r#"<a href="{}" class="pg_page pg_end" title="마지막 페이지">마지막</a>"#,
            url(total_pages)
        ));
    }

    format!(r#"<nav class="pg_wrap"><span class="pg">{links}</span></nav>"#)
}
