//! Per-board write tables.
//!
//! Every board keeps its posts in its own table named after the board. The
//! registry hands out one shared [`WriteTable`] per board id; the row store
//! behind it is created on first use.

use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, OnceLock, PoisonError, RwLock},
};

use tokio::sync::RwLock as AsyncRwLock;
use tracing::{debug, instrument};

use crate::models::DbWrite;

pub const WRITE_TABLE_PREFIX: &str = "g6_write_";

/// Names that make up a board's table definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteTableSchema {
    pub board: String,
    pub table_name: String,
    pub indexes: Vec<String>,
}

impl WriteTableSchema {
    pub fn for_board(board: &str) -> Self {
        Self {
            board: board.to_string(),
            table_name: format!("{WRITE_TABLE_PREFIX}{board}"),
            indexes: vec![
                format!("idx_wr_num_reply_{board}"),
                format!("idex_wr_is_comment_{board}"),
            ],
        }
    }
}

type Rows = AsyncRwLock<BTreeMap<i64, DbWrite>>;

#[derive(Debug)]
pub struct WriteTable {
    schema: WriteTableSchema,
    rows: OnceLock<Rows>,
}

impl WriteTable {
    fn new(schema: WriteTableSchema) -> Self {
        Self {
            schema,
            rows: OnceLock::new(),
        }
    }

    pub fn schema(&self) -> &WriteTableSchema {
        &self.schema
    }

    pub fn is_created(&self) -> bool {
        self.rows.get().is_some()
    }

    fn rows(&self) -> &Rows {
        self.rows.get_or_init(|| {
            debug!(table = %self.schema.table_name, "Creating write table");
            AsyncRwLock::new(BTreeMap::new())
        })
    }

    /// Insert or replace the row with the same `wr_id`.
    pub async fn put(&self, write: DbWrite) {
        self.rows().write().await.insert(write.wr_id, write);
    }

    pub async fn get(&self, wr_id: i64) -> Option<DbWrite> {
        self.rows().read().await.get(&wr_id).cloned()
    }

    pub async fn remove(&self, wr_id: i64) -> Option<DbWrite> {
        self.rows().write().await.remove(&wr_id)
    }

    pub async fn len(&self) -> usize {
        self.rows().read().await.len()
    }

    /// Subject shown in feeds: a comment shows its parent post's subject.
    pub async fn display_subject(&self, wr_id: i64, wr_parent: i64) -> Option<String> {
        let rows = self.rows().read().await;
        let row = if wr_id != wr_parent {
            rows.get(&wr_parent)
        } else {
            rows.get(&wr_id)
        };
        row.map(|w| w.wr_subject.clone())
    }
}

/// Board id to write table. `get_or_create` is idempotent.
#[derive(Debug, Default)]
pub struct BoardRegistry {
    tables: RwLock<HashMap<String, Arc<WriteTable>>>,
}

impl BoardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Existing table for `board`, if it has been registered.
    pub fn get(&self, board: &str) -> Option<Arc<WriteTable>> {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(board)
            .cloned()
    }

    /// The table for `board`, registering it on first call. With
    /// `create_table` the row store is initialized immediately instead of on
    /// first access.
    #[instrument(skip(self))]
    pub fn get_or_create(&self, board: &str, create_table: bool) -> Arc<WriteTable> {
        let table = match self.get(board) {
            Some(table) => table,
            None => {
                let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
                tables
                    .entry(board.to_string())
                    .or_insert_with(|| {
                        debug!("Registering write table");
                        Arc::new(WriteTable::new(WriteTableSchema::for_board(board)))
                    })
                    .clone()
            }
        };

        if create_table {
            table.rows();
        }
        table
    }

    pub fn boards(&self) -> Vec<String> {
        let mut boards: Vec<String> = self
            .tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        boards.sort();
        boards
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn write(wr_id: i64, wr_parent: i64, subject: &str) -> DbWrite {
        DbWrite {
            wr_id,
            wr_parent,
            wr_subject: subject.into(),
            mb_id: "admin".into(),
            wr_datetime: Utc::now(),
        }
    }

    #[test]
    fn test_schema_names() {
        let schema = WriteTableSchema::for_board("free");
        assert_eq!(schema.table_name, "g6_write_free");
        assert_eq!(
            schema.indexes,
            vec!["idx_wr_num_reply_free".to_string(), "idex_wr_is_comment_free".to_string()]
        );
    }

    #[test]
    fn test_get_or_create_is_idempotent() {
        let registry = BoardRegistry::new();

        let first = registry.get_or_create("free", false);
        let second = registry.get_or_create("free", true);
        let other = registry.get_or_create("qa", false);

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(registry.boards(), vec!["free".to_string(), "qa".to_string()]);
    }

    #[test]
    fn test_table_is_created_lazily() {
        let registry = BoardRegistry::new();

        let table = registry.get_or_create("free", false);
        assert!(!table.is_created());

        registry.get_or_create("free", true);
        assert!(table.is_created());

        assert!(registry.get("missing").is_none());
    }

    #[tokio::test]
    async fn test_rows_survive_repeated_lookups() {
        let registry = BoardRegistry::new();
        registry.get_or_create("free", true).put(write(1, 1, "hello")).await;

        let table = registry.get_or_create("free", true);
        assert_eq!(table.len().await, 1);
        assert_eq!(table.get(1).await.map(|w| w.wr_subject), Some("hello".to_string()));
        assert!(table.is_created());
    }

    #[tokio::test]
    async fn test_display_subject_follows_parent() {
        let registry = BoardRegistry::new();
        let table = registry.get_or_create("free", false);
        table.put(write(1, 1, "parent post")).await;
        table.put(write(2, 1, "")).await;

        assert_eq!(table.display_subject(2, 1).await, Some("parent post".to_string()));
        assert_eq!(table.display_subject(1, 1).await, Some("parent post".to_string()));
        assert_eq!(table.display_subject(9, 9).await, None);

        assert!(table.remove(1).await.is_some());
        assert_eq!(table.display_subject(2, 1).await, None);
    }
}
