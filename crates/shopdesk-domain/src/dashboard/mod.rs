//! Dashboard statistics derived client-side from the catalog and order feeds.

mod calculations;
mod repository;
mod simulator;
mod types;

pub use calculations::{
    build_stats, calculate_growth, default_monthly_sales, low_stock_products,
    orders_newest_first, recent_orders, top_products, total_revenue, DashboardInputs,
    CATEGORY_BASELINE, LOW_STOCK_LIMIT, LOW_STOCK_THRESHOLD, PRODUCT_BASELINE,
    PROVIDER_BASELINE, RECENT_ORDERS_LIMIT, TOP_PRODUCTS_LIMIT,
};
pub use repository::SalesReportRepository;
pub use simulator::SalesSimulator;
pub use types::{DashboardStats, LowStockProduct, MonthlySales, TopProduct};
