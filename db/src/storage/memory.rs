use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::{
    models::{DbBoardNew, DbVisit, DbVisitSum},
    storage::{BoardNewFilter, BoardNewStore, StoreError, Storage, VisitStore},
};

/// In-process storage. Each table sits behind its own lock.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    board_news: RwLock<BTreeMap<i64, DbBoardNew>>,
    last_bn_id: AtomicI64,
    visits: RwLock<Vec<DbVisit>>,
    visit_sums: RwLock<BTreeMap<NaiveDate, DbVisitSum>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[async_trait]
impl BoardNewStore for MemoryStorage {
    async fn insert_board_new(&self, mut new: DbBoardNew) -> Result<DbBoardNew, StoreError> {
        let mut board_news = self.board_news.write().await;
        new.bn_id = self.last_bn_id.fetch_add(1, Ordering::SeqCst) + 1;
        board_news.insert(new.bn_id, new.clone());
        Ok(new)
    }

    async fn list_board_news(
        &self,
        filter: &BoardNewFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<DbBoardNew>, StoreError> {
        let board_news = self.board_news.read().await;
        Ok(board_news
            .values()
            .rev()
            .filter(|new| filter.matches(new))
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count_board_news(&self, filter: &BoardNewFilter) -> Result<u64, StoreError> {
        let board_news = self.board_news.read().await;
        Ok(board_news.values().filter(|new| filter.matches(new)).count() as u64)
    }

    async fn delete_board_news(&self, ids: &[i64]) -> Result<u64, StoreError> {
        let mut board_news = self.board_news.write().await;
        Ok(ids
            .iter()
            .filter(|id| board_news.remove(*id).is_some())
            .count() as u64)
    }
}

#[async_trait]
impl VisitStore for MemoryStorage {
    async fn insert_visit_if_absent(&self, mut visit: DbVisit) -> Result<bool, StoreError> {
        let mut visits = self.visits.write().await;
        if visits
            .iter()
            .any(|v| v.vi_date == visit.vi_date && v.vi_ip == visit.vi_ip)
        {
            return Ok(false);
        }

        visit.vi_id = visits.last().map_or(1, |last| last.vi_id + 1);
        visits.push(visit);
        Ok(true)
    }

    async fn count_visits(&self, date: NaiveDate) -> Result<u64, StoreError> {
        let visits = self.visits.read().await;
        Ok(visits.iter().filter(|v| v.vi_date == date).count() as u64)
    }

    async fn put_visit_sum(&self, sum: DbVisitSum) -> Result<(), StoreError> {
        self.visit_sums.write().await.insert(sum.vs_date, sum);
        Ok(())
    }

    async fn get_visit_sum(&self, date: NaiveDate) -> Result<Option<DbVisitSum>, StoreError> {
        Ok(self.visit_sums.read().await.get(&date).cloned())
    }
}
