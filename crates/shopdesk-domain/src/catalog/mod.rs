mod category;
mod product;
mod provider;
mod repository;
mod subcategory;

pub use category::{Category, CreateCategoryRequest, UpdateCategoryRequest};
pub use product::{CreateProductRequest, Product, StockLevel, UpdateProductRequest};
pub use provider::{CreateProviderRequest, Provider, UpdateProviderRequest};
pub use repository::{
    CategoryRepository, ProductRepository, ProviderRepository, SubcategoryRepository,
};
pub use subcategory::{CreateSubcategoryRequest, Subcategory, UpdateSubcategoryRequest};

use crate::shared::EntityId;

/// Placeholder shown when a product references an unknown or missing entity.
pub const UNKNOWN_NAME: &str = "N/A";

/// Resolve a category id to its display name.
pub fn category_name(categories: &[Category], id: Option<EntityId>) -> String {
    id.and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

/// Resolve a provider id to its display name.
pub fn provider_name(providers: &[Provider], id: Option<EntityId>) -> String {
    id.and_then(|id| providers.iter().find(|p| p.id == id))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}
