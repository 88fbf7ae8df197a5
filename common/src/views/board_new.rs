use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry of the "new posts" feed.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BoardNew {
    pub bn_id: i64,

    /// Board the post lives on.
    pub bo_table: String,

    pub wr_id: i64,

    /// Id of the parent post. Equal to `wr_id` for posts, different for comments.
    pub wr_parent: i64,

    pub gr_id: String,
    pub mb_id: String,

    /// Subject of the post, or of the parent post for a comment. Empty when
    /// the post no longer exists.
    pub subject: String,

    pub is_comment: bool,

    /// Display number, counting down from the total across pages.
    pub num: u64,

    pub bn_datetime: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BoardNewList {
    pub total_count: u64,
    pub board_news: Vec<BoardNew>,
    pub current_page: i64,

    /// Rendered page navigation.
    pub paging: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BoardNewDeleted {
    pub result: String,
    pub count: u64,
}
