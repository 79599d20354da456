use async_trait::async_trait;

use super::MonthlySales;
use crate::shared::DomainError;

#[async_trait]
pub trait SalesReportRepository: Send + Sync {
    async fn monthly_sales(&self) -> Result<Vec<MonthlySales>, DomainError>;
}
