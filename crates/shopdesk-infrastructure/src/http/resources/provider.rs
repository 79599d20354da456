use async_trait::async_trait;

use shopdesk_domain::catalog::{
    CreateProviderRequest, Provider, ProviderRepository, UpdateProviderRequest,
};
use shopdesk_domain::{DomainError, EntityId};

use super::Endpoint;
use crate::http::ApiClient;

const ENDPOINT: Endpoint = Endpoint::new("/proveedor");

pub struct HttpProviderRepository {
    client: ApiClient,
}

impl HttpProviderRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProviderRepository for HttpProviderRepository {
    async fn find_all(&self) -> Result<Vec<Provider>, DomainError> {
        self.client.get_list(ENDPOINT.list()).await
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Provider, DomainError> {
        self.client.get_json(&ENDPOINT.item(id)).await
    }

    async fn create(&self, request: &CreateProviderRequest) -> Result<Provider, DomainError> {
        self.client.post_json(&ENDPOINT.create(), request).await
    }

    async fn update(&self, request: &UpdateProviderRequest) -> Result<Provider, DomainError> {
        self.client.patch_json(&ENDPOINT.update(), request).await
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.client.delete(&ENDPOINT.item(id)).await.map(|_| ())
    }
}
