use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Which skin picker to render.
#[derive(Debug, Clone, Default, Deserialize, Serialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SkinSelectParams {
    /// Skin family, e.g. `new`, `search`, `connect`, `faq`.
    pub kind: String,

    /// `pc` or `mobile`. Defaults to the layout served to this client.
    pub device: Option<String>,

    /// `id` and `name` of the `<select>`. Defaults to `skin`.
    pub id: Option<String>,

    pub selected: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct EditorSelectParams {
    /// `id` and `name` of the `<select>`. Defaults to `cf_editor`.
    pub id: Option<String>,

    pub selected: Option<String>,
}
