//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for list endpoints that support an `include_inactive`
/// flag. Defaults to `false`: soft-disabled rows are filtered out.
#[derive(Debug, Deserialize)]
pub struct IncludeInactiveParams {
    #[serde(default)]
    pub include_inactive: bool,
}
