use async_trait::async_trait;

use shopdesk_domain::dashboard::{MonthlySales, SalesReportRepository};
use shopdesk_domain::DomainError;

use crate::http::ApiClient;

const MONTHLY_SALES_PATH: &str = "/ventas/mensuales";

pub struct HttpSalesReportRepository {
    client: ApiClient,
}

impl HttpSalesReportRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SalesReportRepository for HttpSalesReportRepository {
    async fn monthly_sales(&self) -> Result<Vec<MonthlySales>, DomainError> {
        self.client.get_list(MONTHLY_SALES_PATH).await
    }
}
