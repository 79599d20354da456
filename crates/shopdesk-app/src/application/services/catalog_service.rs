use std::sync::Arc;
use tracing::info;
use validator::Validate;

use shopdesk_domain::catalog::{
    category_name, provider_name, Category, CategoryRepository, CreateCategoryRequest,
    CreateProductRequest, CreateProviderRequest, CreateSubcategoryRequest, Product,
    ProductRepository, Provider, ProviderRepository, Subcategory, SubcategoryRepository,
    UpdateCategoryRequest, UpdateProductRequest, UpdateProviderRequest, UpdateSubcategoryRequest,
};
use shopdesk_domain::drive::convert_to_direct_url;
use shopdesk_domain::{DomainError, EntityId};

use crate::application::dtos::ProductRowDto;

/// CRUD over the catalog resources. Payloads are checked against the form
/// rules before anything is sent.
pub struct CatalogService {
    category_repo: Arc<dyn CategoryRepository>,
    subcategory_repo: Arc<dyn SubcategoryRepository>,
    product_repo: Arc<dyn ProductRepository>,
    provider_repo: Arc<dyn ProviderRepository>,
}

impl CatalogService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        subcategory_repo: Arc<dyn SubcategoryRepository>,
        product_repo: Arc<dyn ProductRepository>,
        provider_repo: Arc<dyn ProviderRepository>,
    ) -> Self {
        Self {
            category_repo,
            subcategory_repo,
            product_repo,
            provider_repo,
        }
    }

    // ---- categories ----

    pub async fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        self.category_repo.find_all().await
    }

    pub async fn get_category(&self, id: EntityId) -> Result<Category, DomainError> {
        self.category_repo.find_by_id(id).await
    }

    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> Result<Category, DomainError> {
        request.validate()?;
        self.category_repo.create(&request).await
    }

    pub async fn update_category(
        &self,
        request: UpdateCategoryRequest,
    ) -> Result<Category, DomainError> {
        request.validate()?;
        self.category_repo.update(&request).await
    }

    pub async fn delete_category(&self, id: EntityId) -> Result<(), DomainError> {
        self.category_repo.delete(id).await
    }

    // ---- subcategories ----

    pub async fn list_subcategories(&self) -> Result<Vec<Subcategory>, DomainError> {
        self.subcategory_repo.find_all().await
    }

    pub async fn get_subcategory(&self, id: EntityId) -> Result<Subcategory, DomainError> {
        self.subcategory_repo.find_by_id(id).await
    }

    pub async fn create_subcategory(
        &self,
        request: CreateSubcategoryRequest,
    ) -> Result<Subcategory, DomainError> {
        request.validate()?;
        self.subcategory_repo.create(&request).await
    }

    pub async fn update_subcategory(
        &self,
        request: UpdateSubcategoryRequest,
    ) -> Result<Subcategory, DomainError> {
        request.validate()?;
        self.subcategory_repo.update(&request).await
    }

    pub async fn delete_subcategory(&self, id: EntityId) -> Result<(), DomainError> {
        self.subcategory_repo.delete(id).await
    }

    // ---- providers ----

    pub async fn list_providers(&self) -> Result<Vec<Provider>, DomainError> {
        self.provider_repo.find_all().await
    }

    pub async fn get_provider(&self, id: EntityId) -> Result<Provider, DomainError> {
        self.provider_repo.find_by_id(id).await
    }

    pub async fn create_provider(
        &self,
        request: CreateProviderRequest,
    ) -> Result<Provider, DomainError> {
        request.validate()?;
        self.provider_repo.create(&request).await
    }

    pub async fn update_provider(
        &self,
        request: UpdateProviderRequest,
    ) -> Result<Provider, DomainError> {
        request.validate()?;
        self.provider_repo.update(&request).await
    }

    pub async fn delete_provider(&self, id: EntityId) -> Result<(), DomainError> {
        self.provider_repo.delete(id).await
    }

    // ---- products ----

    pub async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        self.product_repo.find_all().await
    }

    pub async fn get_product(&self, id: EntityId) -> Result<Product, DomainError> {
        self.product_repo.find_by_id(id).await
    }

    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> Result<Product, DomainError> {
        request.validate()?;
        self.product_repo.create(&request).await
    }

    pub async fn update_product(
        &self,
        request: UpdateProductRequest,
    ) -> Result<Product, DomainError> {
        request.validate()?;
        self.product_repo.update(&request).await
    }

    /// Returns the backend's confirmation text.
    pub async fn delete_product(&self, id: EntityId) -> Result<String, DomainError> {
        self.product_repo.delete(id).await
    }

    /// Products with category and provider names resolved and a stock badge.
    pub async fn product_rows(&self) -> Result<Vec<ProductRowDto>, DomainError> {
        let (products, categories, providers) = tokio::join!(
            self.product_repo.find_all(),
            self.category_repo.find_all(),
            self.provider_repo.find_all(),
        );
        let (products, categories, providers) = (products?, categories?, providers?);

        let rows: Vec<ProductRowDto> = products
            .into_iter()
            .map(|product| {
                let level = product.stock_level();
                ProductRowDto {
                    category: category_name(&categories, product.category_id),
                    provider: provider_name(&providers, product.provider_id),
                    image_url: product
                        .drive_url
                        .as_deref()
                        .filter(|url| !url.trim().is_empty())
                        .map(convert_to_direct_url),
                    stock_level: level,
                    stock_severity: level.severity().to_string(),
                    id: product.id,
                    name: product.name,
                    description: product.description,
                    price: product.price,
                    stock: product.stock,
                }
            })
            .collect();

        info!(count = rows.len(), "Product rows built");
        Ok(rows)
    }
}
