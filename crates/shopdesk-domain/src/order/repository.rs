use async_trait::async_trait;

use super::OrderRecord;
use crate::shared::DomainError;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<OrderRecord>, DomainError>;
}
