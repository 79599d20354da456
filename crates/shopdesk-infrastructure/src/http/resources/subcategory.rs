use async_trait::async_trait;

use shopdesk_domain::catalog::{
    CreateSubcategoryRequest, Subcategory, SubcategoryRepository, UpdateSubcategoryRequest,
};
use shopdesk_domain::{DomainError, EntityId};

use super::Endpoint;
use crate::http::ApiClient;

const ENDPOINT: Endpoint = Endpoint::new("/subcategory");

pub struct HttpSubcategoryRepository {
    client: ApiClient,
}

impl HttpSubcategoryRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SubcategoryRepository for HttpSubcategoryRepository {
    async fn find_all(&self) -> Result<Vec<Subcategory>, DomainError> {
        self.client.get_list(ENDPOINT.list()).await
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Subcategory, DomainError> {
        self.client.get_json(&ENDPOINT.item(id)).await
    }

    async fn create(
        &self,
        request: &CreateSubcategoryRequest,
    ) -> Result<Subcategory, DomainError> {
        self.client.post_json(&ENDPOINT.create(), request).await
    }

    async fn update(
        &self,
        request: &UpdateSubcategoryRequest,
    ) -> Result<Subcategory, DomainError> {
        self.client.patch_json(&ENDPOINT.update(), request).await
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.client.delete(&ENDPOINT.item(id)).await.map(|_| ())
    }
}
