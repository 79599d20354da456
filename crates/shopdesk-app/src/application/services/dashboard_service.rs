use chrono::Utc;
use rand::Rng;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

use shopdesk_domain::catalog::{
    CategoryRepository, Product, ProductRepository, ProviderRepository,
};
use shopdesk_domain::dashboard::{
    build_stats, DashboardInputs, DashboardStats, MonthlySales, SalesReportRepository,
    SalesSimulator,
};
use shopdesk_domain::order::{OrderRecord, OrderRepository};

use super::MockDataService;

/// Where a dashboard feed's data came from.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceOutcome<T> {
    Live(T),
    Fallback(T),
}

impl<T> SourceOutcome<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, SourceOutcome::Fallback(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            SourceOutcome::Live(value) | SourceOutcome::Fallback(value) => value,
        }
    }
}

/// Uniform 10..=59 units per product.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSalesSimulator;

impl SalesSimulator for RandomSalesSimulator {
    fn simulated_sales(&self, _product: &Product) -> u32 {
        rand::thread_rng().gen_range(10..60)
    }
}

/// Builds the dashboard snapshot from five backend feeds.
///
/// Orders and monthly sales fall back to canned data on their own. A failure
/// of products, categories or providers replaces the whole snapshot with
/// [`DashboardStats::fallback`]. The snapshot is never an error.
pub struct DashboardService {
    product_repo: Arc<dyn ProductRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    provider_repo: Arc<dyn ProviderRepository>,
    order_repo: Arc<dyn OrderRepository>,
    sales_repo: Arc<dyn SalesReportRepository>,
    mock_data: Arc<MockDataService>,
    simulator: Arc<dyn SalesSimulator>,
}

impl DashboardService {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        provider_repo: Arc<dyn ProviderRepository>,
        order_repo: Arc<dyn OrderRepository>,
        sales_repo: Arc<dyn SalesReportRepository>,
        mock_data: Arc<MockDataService>,
    ) -> Self {
        Self {
            product_repo,
            category_repo,
            provider_repo,
            order_repo,
            sales_repo,
            mock_data,
            simulator: Arc::new(RandomSalesSimulator),
        }
    }

    pub fn with_simulator(mut self, simulator: Arc<dyn SalesSimulator>) -> Self {
        self.simulator = simulator;
        self
    }

    pub async fn get_dashboard_stats(&self) -> DashboardStats {
        let started_at = Instant::now();

        let (products, categories, providers, orders, monthly_sales) = tokio::join!(
            self.product_repo.find_all(),
            self.category_repo.find_all(),
            self.provider_repo.find_all(),
            self.orders_or_mock(),
            self.monthly_sales_or_mock(),
        );

        let (products, categories, providers) = match (products, categories, providers) {
            (Ok(products), Ok(categories), Ok(providers)) => (products, categories, providers),
            (products, categories, providers) => {
                for (source, err) in [
                    ("products", products.err()),
                    ("categories", categories.err()),
                    ("providers", providers.err()),
                ] {
                    if let Some(err) = err {
                        error!(source, error = %err, "Dashboard source failed");
                    }
                }
                warn!("Serving fallback dashboard");
                return DashboardStats::fallback();
            }
        };

        let orders_fallback = orders.is_fallback();
        let sales_fallback = monthly_sales.is_fallback();

        let inputs = DashboardInputs {
            products,
            categories,
            providers,
            orders: orders.into_inner(),
            monthly_sales: monthly_sales.into_inner(),
        };
        let stats = build_stats(&inputs, self.simulator.as_ref(), Utc::now());

        info!(
            products = stats.total_products,
            categories = stats.total_categories,
            providers = stats.total_providers,
            orders = stats.total_orders,
            orders_fallback,
            sales_fallback,
            elapsed_ms = started_at.elapsed().as_millis() as u64,
            "Dashboard stats computed"
        );

        stats
    }

    async fn orders_or_mock(&self) -> SourceOutcome<Vec<OrderRecord>> {
        match self.order_repo.find_all().await {
            Ok(orders) => SourceOutcome::Live(orders),
            Err(err) => {
                warn!(error = %err, "Orders unavailable, using mock orders");
                SourceOutcome::Fallback(self.mock_data.mock_orders().await)
            }
        }
    }

    async fn monthly_sales_or_mock(&self) -> SourceOutcome<Vec<MonthlySales>> {
        match self.sales_repo.monthly_sales().await {
            Ok(sales) => SourceOutcome::Live(sales),
            Err(err) => {
                warn!(error = %err, "Monthly sales unavailable, using mock sales");
                SourceOutcome::Fallback(self.mock_data.mock_monthly_sales().await)
            }
        }
    }
}
