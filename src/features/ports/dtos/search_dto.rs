use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::ports::context::AdminContext;

/// Search box interaction applied to the caller's context
///
/// `input` replaces the typed text; `commit` applies it to the grid, as the
/// search button does.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchActionDto {
    #[serde(default)]
    pub context: AdminContext,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub commit: bool,
}
