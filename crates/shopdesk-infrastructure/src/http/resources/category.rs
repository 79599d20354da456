use async_trait::async_trait;
use log::info;

use shopdesk_domain::catalog::{
    Category, CategoryRepository, CreateCategoryRequest, UpdateCategoryRequest,
};
use shopdesk_domain::{DomainError, EntityId};

use super::Endpoint;
use crate::http::ApiClient;

const ENDPOINT: Endpoint = Endpoint::new("/category");

pub struct HttpCategoryRepository {
    client: ApiClient,
}

impl HttpCategoryRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryRepository for HttpCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        self.client.get_list(ENDPOINT.list()).await
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Category, DomainError> {
        self.client.get_json(&ENDPOINT.item(id)).await
    }

    async fn create(&self, request: &CreateCategoryRequest) -> Result<Category, DomainError> {
        let created: Category = self.client.post_json(&ENDPOINT.create(), request).await?;
        info!("Category created: {} ({})", created.name, created.id);
        Ok(created)
    }

    async fn update(&self, request: &UpdateCategoryRequest) -> Result<Category, DomainError> {
        self.client.patch_json(&ENDPOINT.update(), request).await
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.client.delete(&ENDPOINT.item(id)).await?;
        info!("Category {} deleted", id);
        Ok(())
    }
}
