use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post or comment in a board's write table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbWrite {
    pub wr_id: i64,
    /// Equal to `wr_id` for posts; the post id for comments.
    pub wr_parent: i64,
    pub wr_subject: String,
    pub mb_id: String,
    pub wr_datetime: DateTime<Utc>,
}

impl DbWrite {
    pub fn is_comment(&self) -> bool {
        self.wr_id != self.wr_parent
    }
}
