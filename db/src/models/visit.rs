use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbVisit {
    /// Assigned by storage on insert.
    pub vi_id: i64,
    pub vi_ip: String,
    pub vi_date: NaiveDate,
    pub vi_time: NaiveTime,
    pub vi_referer: String,
    pub vi_agent: String,
    pub vi_browser: String,
    pub vi_os: String,
    /// `pc`, `mobile`, `tablet` or `unknown`.
    pub vi_device: String,
}

/// Daily visitor total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbVisitSum {
    pub vs_date: NaiveDate,
    pub vs_count: u64,
}
