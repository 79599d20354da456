use async_trait::async_trait;

use super::{
    Category, CreateCategoryRequest, CreateProductRequest, CreateProviderRequest,
    CreateSubcategoryRequest, Product, Provider, Subcategory, UpdateCategoryRequest,
    UpdateProductRequest, UpdateProviderRequest, UpdateSubcategoryRequest,
};
use crate::shared::{DomainError, EntityId};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Category, DomainError>;
    async fn create(&self, request: &CreateCategoryRequest) -> Result<Category, DomainError>;
    async fn update(&self, request: &UpdateCategoryRequest) -> Result<Category, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}

#[async_trait]
pub trait SubcategoryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Subcategory>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Subcategory, DomainError>;
    async fn create(&self, request: &CreateSubcategoryRequest)
        -> Result<Subcategory, DomainError>;
    async fn update(&self, request: &UpdateSubcategoryRequest)
        -> Result<Subcategory, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Product, DomainError>;
    async fn create(&self, request: &CreateProductRequest) -> Result<Product, DomainError>;
    async fn update(&self, request: &UpdateProductRequest) -> Result<Product, DomainError>;
    /// The backend answers a product deletion with a plain-text confirmation.
    async fn delete(&self, id: EntityId) -> Result<String, DomainError>;
}

#[async_trait]
pub trait ProviderRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Provider>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Provider, DomainError>;
    async fn create(&self, request: &CreateProviderRequest) -> Result<Provider, DomainError>;
    async fn update(&self, request: &UpdateProviderRequest) -> Result<Provider, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
