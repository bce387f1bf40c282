//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for single-entity endpoints that support field projection
/// (`?fields=name,description,supplier.name`).
#[derive(Debug, Deserialize)]
pub struct FieldsParam {
    pub fields: Option<String>,
}
