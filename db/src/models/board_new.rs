use std::fmt::Display;

use bbs_common::views::BoardNew;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the new-post feed, written whenever a post or comment is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbBoardNew {
    /// Assigned by storage on insert.
    pub bn_id: i64,
    pub bo_table: String,
    pub wr_id: i64,
    pub wr_parent: i64,
    pub bn_datetime: DateTime<Utc>,
    pub mb_id: String,
    pub gr_id: String,
}

impl Display for DbBoardNew {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DbBoardNew {{ bn_id: {}, bo_table: {}, wr_id: {} }}",
            self.bn_id, self.bo_table, self.wr_id
        )
    }
}

impl DbBoardNew {
    pub fn is_comment(&self) -> bool {
        self.wr_id != self.wr_parent
    }

    pub fn to_view(&self, subject: String, num: u64) -> BoardNew {
        BoardNew {
            bn_id: self.bn_id,
            bo_table: self.bo_table.clone(),
            wr_id: self.wr_id,
            wr_parent: self.wr_parent,
            gr_id: self.gr_id.clone(),
            mb_id: self.mb_id.clone(),
            subject,
            is_comment: self.is_comment(),
            num,
            bn_datetime: self.bn_datetime,
        }
    }
}
