use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::{wire, EntityId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: EntityId,
    #[serde(rename = "nombreSubcategoria", default, deserialize_with = "wire::null_as_default")]
    pub name: String,
    /// Older backends send `estado` as 0/1.
    #[serde(rename = "estado", with = "wire::active_flag", default)]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSubcategoryRequest {
    #[serde(rename = "nombreSubcategoria")]
    #[validate(length(min = 3, message = "must be at least 3 characters"))]
    pub name: String,
    #[serde(rename = "estado", default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateSubcategoryRequest {
    pub id: EntityId,
    #[serde(rename = "nombreSubcategoria", skip_serializing_if = "Option::is_none", default)]
    #[validate(length(min = 3, message = "must be at least 3 characters"))]
    pub name: Option<String>,
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none", default)]
    pub active: Option<bool>,
}

fn default_active() -> bool {
    true
}
