use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct IssuedToken {
    /// 48 hex characters, valid for a single request.
    pub token: String,
    pub action: String,
}
