use async_trait::async_trait;
use log::info;

use shopdesk_domain::catalog::{
    CreateProductRequest, Product, ProductRepository, UpdateProductRequest,
};
use shopdesk_domain::{DomainError, EntityId};

use super::Endpoint;
use crate::http::ApiClient;

const ENDPOINT: Endpoint = Endpoint::new("/productos");

pub struct HttpProductRepository {
    client: ApiClient,
}

impl HttpProductRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductRepository for HttpProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let products: Vec<Product> = self.client.get_list(ENDPOINT.list()).await?;
        info!("Fetched {} products", products.len());
        Ok(products)
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Product, DomainError> {
        self.client.get_json(&ENDPOINT.item(id)).await
    }

    async fn create(&self, request: &CreateProductRequest) -> Result<Product, DomainError> {
        self.client.post_json(&ENDPOINT.create(), request).await
    }

    async fn update(&self, request: &UpdateProductRequest) -> Result<Product, DomainError> {
        self.client.patch_json(&ENDPOINT.update(), request).await
    }

    /// The backend answers a product deletion with a plain-text confirmation.
    async fn delete(&self, id: EntityId) -> Result<String, DomainError> {
        let message = self.client.delete(&ENDPOINT.item(id)).await?;
        info!("Product {} deleted: {}", id, message);
        Ok(message)
    }
}
