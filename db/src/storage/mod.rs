use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{DbBoardNew, DbVisit, DbVisitSum};

pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[async_trait]
pub trait Storage: BoardNewStore + VisitStore + Send + Sync + 'static {
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Which kind of feed entries to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewView {
    Posts,
    Comments,
}

impl NewView {
    /// `w` selects posts, `c` comments. Anything else is no filter.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "w" => Some(NewView::Posts),
            "c" => Some(NewView::Comments),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BoardNewFilter {
    pub gr_id: Option<String>,
    pub mb_id: Option<String>,
    pub view: Option<NewView>,
}

impl BoardNewFilter {
    pub fn matches(&self, new: &DbBoardNew) -> bool {
        if let Some(gr_id) = &self.gr_id {
            if &new.gr_id != gr_id {
                return false;
            }
        }
        if let Some(mb_id) = &self.mb_id {
            if &new.mb_id != mb_id {
                return false;
            }
        }
        match self.view {
            Some(NewView::Posts) => !new.is_comment(),
            Some(NewView::Comments) => new.is_comment(),
            None => true,
        }
    }
}

#[async_trait]
pub trait BoardNewStore {
    /// Store a feed entry, assigning its `bn_id`.
    async fn insert_board_new(&self, new: DbBoardNew) -> Result<DbBoardNew, StoreError>;

    /// Newest first.
    async fn list_board_news(
        &self,
        filter: &BoardNewFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<DbBoardNew>, StoreError>;

    async fn count_board_news(&self, filter: &BoardNewFilter) -> Result<u64, StoreError>;

    /// Returns how many of `ids` existed and were removed.
    async fn delete_board_news(&self, ids: &[i64]) -> Result<u64, StoreError>;
}

#[async_trait]
pub trait VisitStore {
    /// Insert `visit` unless one already exists for its date and IP. Returns
    /// whether it was inserted.
    async fn insert_visit_if_absent(&self, visit: DbVisit) -> Result<bool, StoreError>;

    async fn count_visits(&self, date: NaiveDate) -> Result<u64, StoreError>;

    async fn put_visit_sum(&self, sum: DbVisitSum) -> Result<(), StoreError>;

    async fn get_visit_sum(&self, date: NaiveDate) -> Result<Option<DbVisitSum>, StoreError>;
}
