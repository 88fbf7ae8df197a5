//! Search and sort state carried between list requests.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Parses `asc`/`desc`. Anything else, including the empty string, is no order.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request search/sort context, rebuilt from query parameters (GET) or
/// form fields (POST) on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SortState {
    /// Active sort column.
    pub sst: Option<String>,
    /// Active sort order, `asc`, `desc` or empty.
    pub sod: Option<String>,
    /// Search field.
    pub sfl: Option<String>,
    /// Search text.
    pub stx: Option<String>,
    /// Category.
    pub sca: Option<String>,
    pub page: Option<String>,
}

impl SortState {
    pub fn order(&self) -> Option<SortOrder> {
        self.sod.as_deref().and_then(SortOrder::parse)
    }

    /// Url-encoded `sst`, `sod`, `sfl`, `stx` and `sca`. Absent fields are
    /// skipped and `page` is never included.
    pub fn query_string(&self) -> String {
        [
            ("sst", &self.sst),
            ("sod", &self.sod),
            ("sfl", &self.sfl),
            ("stx", &self.stx),
            ("sca", &self.sca),
        ]
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(|value| format!("{}={}", key, urlencoding::encode(value)))
        })
        .collect::<Vec<_>>()
        .join("&")
    }
}

/// The order a sort link for `column` should request.
///
/// Clicking the active column in its default direction flips it; any other
/// column starts at `direction`.
pub fn resolve_order(state: &SortState, column: &str, direction: SortOrder) -> SortOrder {
    let is_active = state.sst.as_deref() == Some(column);
    if is_active && state.order() == Some(direction) {
        direction.flipped()
    } else {
        direction
    }
}

/// Build the opening `<a>` tag of a column header sort link.
///
/// `base_query` is prepended as-is. The remaining search fields are carried
/// over, empty values are dropped, and a repeated key keeps its first
/// position with the last value. Nothing is re-encoded.
pub fn subject_sort_link(
    state: &SortState,
    column: &str,
    base_query: &str,
    direction: SortOrder,
) -> String {
    let order = resolve_order(state, column, direction);

    let mut parts: Vec<String> = vec![
        base_query.to_string(),
        format!("sst={column}"),
        format!("sod={order}"),
    ];
    for (key, value) in [
        ("sfl", &state.sfl),
        ("stx", &state.stx),
        ("sca", &state.sca),
        ("page", &state.page),
    ] {
        if let Some(value) = value {
            parts.push(format!("{key}={value}"));
        }
    }

    let assembled = parts.join("&");
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    for pair in assembled.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        match pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => pairs.push((key, value)),
        }
    }

    let query = pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(r#"<a href="?{query}">"#)
}
