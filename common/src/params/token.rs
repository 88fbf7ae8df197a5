use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, Serialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct IssueTokenParams {
    /// Operation the token will guard. Defaults to `create`.
    pub action: Option<String>,
}
