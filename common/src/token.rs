//! One-time tokens guarding state-changing requests.
//!
//! A token is minted for a named action (`create`, `update`, `delete`, ...)
//! and can be redeemed exactly once, for that action only, before it expires.
//! Redeeming with the wrong action leaves the token in place.

use std::time::Duration;

use moka::{
    ops::compute::{CompResult, Op},
    sync::Cache,
};
use rand::RngCore;
use thiserror::Error;
use tracing::{debug, instrument};

pub const DEFAULT_ACTION: &str = "create";
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);
pub const DEFAULT_CAPACITY: u64 = 10_000;

/// Bytes of entropy per token; the hex form is twice as long.
const TOKEN_BYTES: usize = 24;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    Valid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub action: String,
    pub status: TokenStatus,
}

/// Process-wide token cache. Clones share the same underlying cache.
///
/// Entries expire a fixed time after insertion regardless of access, and the
/// cache never holds more than its capacity.
#[derive(Clone)]
pub struct TokenStore {
    cache: Cache<String, TokenRecord>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_CAPACITY, DEFAULT_TTL)
    }

    pub fn with_limits(capacity: u64, ttl: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Mint a token for `action` and remember it.
    #[instrument(skip(self))]
    pub fn issue(&self, action: &str) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        let token = hex::encode(bytes);

        self.cache.insert(
            token.clone(),
            TokenRecord {
                action: action.to_string(),
                status: TokenStatus::Valid,
            },
        );
        debug!("Issued one-time token");

        token
    }

    /// Consume `token` if it is live and was issued for `action`.
    ///
    /// The lookup and removal happen under the cache's per-key lock, so two
    /// concurrent redemptions of the same token cannot both succeed.
    #[instrument(skip(self, token))]
    pub fn redeem(&self, token: &str, action: &str) -> bool {
        let result = self
            .cache
            .entry_by_ref(token)
            .and_compute_with(|entry| match entry {
                Some(entry)
                    if entry.value().status == TokenStatus::Valid
                        && entry.value().action == action =>
                {
                    Op::Remove
                }
                _ => Op::Nop,
            });

        let redeemed = matches!(result, CompResult::Removed(_));
        if !redeemed {
            debug!("One-time token rejected");
        }
        redeemed
    }

    /// Redeem `token` for [`DEFAULT_ACTION`].
    pub fn require_valid(&self, token: &str) -> Result<(), TokenError> {
        self.require(token, DEFAULT_ACTION)
    }

    pub fn require(&self, token: &str, action: &str) -> Result<(), TokenError> {
        if self.redeem(token, action) {
            Ok(())
        } else {
            Err(TokenError::InvalidToken)
        }
    }

    /// Number of live tokens after flushing pending cache maintenance.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
