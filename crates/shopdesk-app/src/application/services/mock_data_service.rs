use serde_json::json;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use shopdesk_domain::dashboard::{default_monthly_sales, MonthlySales};
use shopdesk_domain::order::OrderRecord;
use shopdesk_infrastructure::config::TimeoutConfig;

/// Canned data served in place of a failing backend feed.
#[derive(Debug, Clone)]
pub struct MockDataService {
    orders_latency: Duration,
    sales_latency: Duration,
}

impl MockDataService {
    pub fn new(timeouts: &TimeoutConfig) -> Self {
        Self {
            orders_latency: timeouts.mock_orders_latency,
            sales_latency: timeouts.mock_sales_latency,
        }
    }

    pub async fn mock_orders(&self) -> Vec<OrderRecord> {
        sleep(self.orders_latency).await;
        let orders = canned_orders();
        debug!(count = orders.len(), "Serving mock orders");
        orders
    }

    pub async fn mock_monthly_sales(&self) -> Vec<MonthlySales> {
        sleep(self.sales_latency).await;
        default_monthly_sales()
    }
}

impl Default for MockDataService {
    fn default() -> Self {
        Self::new(&TimeoutConfig::default())
    }
}

pub fn canned_orders() -> Vec<OrderRecord> {
    [
        ("ORD-001", "María García", 125_000.0, "Entregado", "2024-01-15"),
        ("ORD-002", "Ana López", 85_000.0, "En proceso", "2024-01-15"),
        ("ORD-003", "Laura Martínez", 200_000.0, "Pendiente", "2024-01-14"),
        ("ORD-004", "Carolina Rodríguez", 95_000.0, "Entregado", "2024-01-14"),
        ("ORD-005", "Sofía Hernández", 175_000.0, "Enviado", "2024-01-13"),
        ("ORD-006", "Valentina Díaz", 145_000.0, "Entregado", "2024-01-13"),
        ("ORD-007", "Isabella Torres", 110_000.0, "En proceso", "2024-01-12"),
        ("ORD-008", "Camila Ruiz", 185_000.0, "Entregado", "2024-01-12"),
    ]
    .into_iter()
    .map(|(id, customer, total, status, created_at)| OrderRecord {
        id: Some(json!(id)),
        customer: Some(customer.to_string()),
        total: Some(total),
        status: Some(status.to_string()),
        created_at: Some(created_at.to_string()),
        ..OrderRecord::default()
    })
    .collect()
}
