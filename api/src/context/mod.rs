use std::sync::Arc;

use bbs_common::TokenStore;
use bbs_db::{boards::BoardRegistry, storage::Storage};

use crate::config::BbsApiConfig;

/// Shared state handed to every handler. Cloning is cheap.
#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<BbsApiConfig>,
    pub db: Arc<dyn Storage>,
    pub tokens: TokenStore,
    pub boards: Arc<BoardRegistry>,
}

impl ApiContext {
    pub fn new(config: BbsApiConfig, db: Arc<dyn Storage>) -> Self {
        let tokens = config.token_store();
        Self {
            config: Arc::new(config),
            db,
            tokens,
            boards: Arc::new(BoardRegistry::new()),
        }
    }
}
