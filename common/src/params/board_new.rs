use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Filters for the new-post list. Every field is optional and absent fields
/// do not filter.
#[derive(Debug, Clone, Default, Deserialize, Serialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BoardNewListParams {
    /// Only posts from boards in this group.
    pub gr_id: Option<String>,

    /// `w` for posts only, `c` for comments only.
    pub view: Option<String>,

    /// Only posts written by this member.
    pub mb_id: Option<String>,

    /// 1-based page number. Anything that is not a positive integer means 1.
    pub page: Option<String>,
}

impl BoardNewListParams {
    /// Filters (without `page`) as an encoded query string, empty values skipped.
    pub fn filter_query(&self) -> String {
        [("gr_id", &self.gr_id), ("view", &self.view), ("mb_id", &self.mb_id)]
            .iter()
            .filter_map(|(key, value)| match value.as_deref() {
                Some(value) if !value.is_empty() => {
                    Some(format!("{}={}", key, urlencoding::encode(value)))
                }
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BoardNewDeleteParams {
    /// Ids of the new-post rows to remove.
    pub bn_ids: Vec<i64>,

    /// One-time token issued for the `delete` action.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query_skips_empty() {
        let params = BoardNewListParams {
            gr_id: Some("community".into()),
            view: Some("".into()),
            mb_id: Some("홍길동".into()),
            page: Some("3".into()),
        };

        assert_eq!(
            params.filter_query(),
            "gr_id=community&mb_id=%ED%99%8D%EA%B8%B8%EB%8F%99"
        );
        assert_eq!(BoardNewListParams::default().filter_query(), "");
    }
}
