use async_trait::async_trait;

use shopdesk_domain::order::{OrderRecord, OrderRepository};
use shopdesk_domain::DomainError;

use crate::http::ApiClient;

const ORDERS_PATH: &str = "/pedidos";

pub struct HttpOrderRepository {
    client: ApiClient,
}

impl HttpOrderRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderRepository for HttpOrderRepository {
    async fn find_all(&self) -> Result<Vec<OrderRecord>, DomainError> {
        self.client.get_list(ORDERS_PATH).await
    }
}
