use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Category, Provider};
use crate::shared::{wire, EntityId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    #[serde(rename = "nombre", default, deserialize_with = "wire::null_as_default")]
    pub name: String,
    #[serde(rename = "descripcion", default, deserialize_with = "wire::null_as_default")]
    pub description: String,
    #[serde(rename = "precio", default, deserialize_with = "wire::null_as_default")]
    pub price: f64,
    #[serde(rename = "cantidadStock", default, deserialize_with = "wire::null_as_default")]
    pub stock: i64,
    #[serde(rename = "categoriaId", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<EntityId>,
    #[serde(rename = "proveedorId", default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<EntityId>,
    #[serde(rename = "urlDrive", default, skip_serializing_if = "Option::is_none")]
    pub drive_url: Option<String>,
    /// Denormalized copy embedded by some endpoints.
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(rename = "proveedor", default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
}

impl Product {
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::for_stock(self.stock)
    }

    /// Name of the embedded category, if the backend sent one
    pub fn category_name(&self) -> Option<&str> {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

/// Stock badge shown next to each product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    Critical,
    Low,
    Healthy,
}

impl StockLevel {
    pub fn for_stock(stock: i64) -> Self {
        match stock {
            s if s <= 5 => StockLevel::Critical,
            s if s <= 20 => StockLevel::Low,
            _ => StockLevel::Healthy,
        }
    }

    pub fn severity(&self) -> &'static str {
        match self {
            StockLevel::Critical => "danger",
            StockLevel::Low => "warning",
            StockLevel::Healthy => "success",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[serde(rename = "nombre")]
    #[validate(length(min = 3, message = "must be at least 3 characters"))]
    pub name: String,
    #[serde(rename = "descripcion")]
    #[validate(length(min = 10, message = "must be at least 10 characters"))]
    pub description: String,
    #[serde(rename = "precio")]
    #[validate(range(min = 0.0, message = "cannot be negative"))]
    pub price: f64,
    #[serde(rename = "cantidadStock")]
    #[validate(range(min = 0, message = "cannot be negative"))]
    pub stock: i64,
    #[serde(rename = "categoriaId")]
    pub category_id: EntityId,
    #[serde(rename = "proveedorId")]
    pub provider_id: EntityId,
    #[serde(rename = "urlDrive", default, skip_serializing_if = "Option::is_none")]
    pub drive_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    pub id: EntityId,
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, message = "must be at least 3 characters"))]
    pub name: Option<String>,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 10, message = "must be at least 10 characters"))]
    pub description: Option<String>,
    #[serde(rename = "precio", default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "cannot be negative"))]
    pub price: Option<f64>,
    #[serde(rename = "cantidadStock", default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, message = "cannot be negative"))]
    pub stock: Option<i64>,
    #[serde(rename = "categoriaId", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<EntityId>,
    #[serde(rename = "proveedorId", default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<EntityId>,
    #[serde(rename = "urlDrive", default, skip_serializing_if = "Option::is_none")]
    pub drive_url: Option<String>,
}
