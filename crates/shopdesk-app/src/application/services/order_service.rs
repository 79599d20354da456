use chrono::Utc;
use std::sync::Arc;

use shopdesk_domain::dashboard::orders_newest_first;
use shopdesk_domain::order::OrderRepository;
use shopdesk_domain::DomainError;

use crate::application::dtos::OrderRowDto;

pub struct OrderService {
    order_repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(order_repo: Arc<dyn OrderRepository>) -> Self {
        Self { order_repo }
    }

    /// All orders, newest first, with a status badge.
    pub async fn list_orders(&self) -> Result<Vec<OrderRowDto>, DomainError> {
        let records = self.order_repo.find_all().await?;

        Ok(orders_newest_first(&records, Utc::now())
            .into_iter()
            .map(|order| OrderRowDto {
                status_severity: order.status_kind().severity().to_string(),
                order,
            })
            .collect())
    }
}
