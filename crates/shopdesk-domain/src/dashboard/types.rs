use serde::{Deserialize, Serialize};

use crate::order::Order;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: usize,
    pub total_categories: usize,
    pub total_providers: usize,
    pub total_orders: usize,
    pub total_revenue: f64,
    pub recent_orders: Vec<Order>,
    pub top_products: Vec<TopProduct>,
    pub monthly_sales: Vec<MonthlySales>,
    pub low_stock_products: Vec<LowStockProduct>,
    pub product_growth: i64,
    pub category_growth: i64,
    pub provider_growth: i64,
}

impl DashboardStats {
    /// Snapshot returned when the live sources cannot be combined at all:
    /// everything zeroed, with the canned six-month sales series.
    pub fn fallback() -> Self {
        Self {
            total_products: 0,
            total_categories: 0,
            total_providers: 0,
            total_orders: 0,
            total_revenue: 0.0,
            recent_orders: Vec::new(),
            top_products: Vec::new(),
            monthly_sales: super::default_monthly_sales(),
            low_stock_products: Vec::new(),
            product_growth: 0,
            category_growth: 0,
            provider_growth: 0,
        }
    }
}

/// Best sellers card. `sales` is simulated; do not rely on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub sales: u32,
    pub revenue: f64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockProduct {
    pub name: String,
    pub stock: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    pub sales: f64,
}

impl MonthlySales {
    pub fn new(month: impl Into<String>, sales: f64) -> Self {
        Self {
            month: month.into(),
            sales,
        }
    }
}
