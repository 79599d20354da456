use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::{wire, EntityId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: EntityId,
    #[serde(rename = "nombre", default, deserialize_with = "wire::null_as_default")]
    pub name: String,
    #[serde(rename = "contacto", default, deserialize_with = "wire::null_as_default")]
    pub contact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProviderRequest {
    #[serde(rename = "nombre")]
    #[validate(length(min = 3, message = "must be at least 3 characters"))]
    pub name: String,
    #[serde(rename = "contacto")]
    #[validate(email(message = "must be a valid e-mail address"))]
    pub contact: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProviderRequest {
    pub id: EntityId,
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none", default)]
    #[validate(length(min = 3, message = "must be at least 3 characters"))]
    pub name: Option<String>,
    #[serde(rename = "contacto", skip_serializing_if = "Option::is_none", default)]
    #[validate(email(message = "must be a valid e-mail address"))]
    pub contact: Option<String>,
}
