use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::{wire, EntityId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    #[serde(rename = "nombreCategoria", default, deserialize_with = "wire::null_as_default")]
    pub name: String,
    #[serde(rename = "estado", with = "wire::active_flag", default)]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[serde(rename = "nombreCategoria")]
    #[validate(length(min = 3, message = "must be at least 3 characters"))]
    pub name: String,
    #[serde(rename = "estado", default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    pub id: EntityId,
    #[serde(rename = "nombreCategoria", skip_serializing_if = "Option::is_none", default)]
    #[validate(length(min = 3, message = "must be at least 3 characters"))]
    pub name: Option<String>,
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none", default)]
    pub active: Option<bool>,
}

// New categories start active, as the creation form does.
fn default_active() -> bool {
    true
}
