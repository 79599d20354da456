use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use super::{DashboardStats, LowStockProduct, MonthlySales, SalesSimulator, TopProduct};
use crate::catalog::{Category, Product, Provider};
use crate::order::{Order, OrderRecord};

pub const RECENT_ORDERS_LIMIT: usize = 5;
pub const TOP_PRODUCTS_LIMIT: usize = 5;
pub const LOW_STOCK_LIMIT: usize = 10;
/// Products at or below this many units are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 12;

// Fixed "previous period" counts used for the growth badges.
pub const PRODUCT_BASELINE: usize = 12;
pub const CATEGORY_BASELINE: usize = 2;
pub const PROVIDER_BASELINE: usize = 0;

const UNCATEGORIZED: &str = "Sin categoría";

/// Everything the dashboard needs, already fetched (or substituted).
#[derive(Debug, Clone, Default)]
pub struct DashboardInputs {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub providers: Vec<Provider>,
    pub orders: Vec<OrderRecord>,
    pub monthly_sales: Vec<MonthlySales>,
}

pub fn build_stats(
    inputs: &DashboardInputs,
    simulator: &dyn SalesSimulator,
    now: DateTime<Utc>,
) -> DashboardStats {
    DashboardStats {
        total_products: inputs.products.len(),
        total_categories: inputs.categories.len(),
        total_providers: inputs.providers.len(),
        total_orders: inputs.orders.len(),
        total_revenue: total_revenue(&inputs.orders),
        recent_orders: recent_orders(&inputs.orders, now),
        top_products: top_products(&inputs.products, simulator),
        monthly_sales: inputs.monthly_sales.clone(),
        low_stock_products: low_stock_products(&inputs.products),
        product_growth: calculate_growth(inputs.products.len(), PRODUCT_BASELINE),
        category_growth: calculate_growth(inputs.categories.len(), CATEGORY_BASELINE),
        provider_growth: calculate_growth(inputs.providers.len(), PROVIDER_BASELINE),
    }
}

pub fn total_revenue(orders: &[OrderRecord]) -> f64 {
    orders.iter().map(OrderRecord::total_or_zero).sum()
}

/// Newest orders first, at most [`RECENT_ORDERS_LIMIT`].
pub fn recent_orders(orders: &[OrderRecord], now: DateTime<Utc>) -> Vec<Order> {
    let mut sorted = orders_newest_first(orders, now);
    sorted.truncate(RECENT_ORDERS_LIMIT);
    sorted
}

/// Every order, normalized and sorted newest first.
///
/// Records are normalized before sorting so an order without a date sorts as
/// `now`, the date it is displayed with. Dates that cannot be parsed sort last.
pub fn orders_newest_first(orders: &[OrderRecord], now: DateTime<Utc>) -> Vec<Order> {
    let mut normalized: Vec<(Option<DateTime<Utc>>, Order)> = orders
        .iter()
        .map(|record| {
            let order = Order::from_record(record, now);
            (order.created_at_timestamp(), order)
        })
        .collect();

    normalized.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    normalized.into_iter().map(|(_, order)| order).collect()
}

/// The first [`TOP_PRODUCTS_LIMIT`] products in input order, ranked by
/// simulated sales. This is not a real top-N.
pub fn top_products(products: &[Product], simulator: &dyn SalesSimulator) -> Vec<TopProduct> {
    let mut top: Vec<TopProduct> = products
        .iter()
        .take(TOP_PRODUCTS_LIMIT)
        .map(|product| {
            let sales = simulator.simulated_sales(product);
            TopProduct {
                name: product.name.clone(),
                sales,
                revenue: product.price * f64::from(sales),
                category: product
                    .category_name()
                    .unwrap_or(UNCATEGORIZED)
                    .to_string(),
            }
        })
        .collect();

    top.sort_by(|a, b| b.sales.cmp(&a.sales));
    top
}

pub fn low_stock_products(products: &[Product]) -> Vec<LowStockProduct> {
    let mut low: Vec<LowStockProduct> = products
        .iter()
        .filter(|p| p.stock <= LOW_STOCK_THRESHOLD)
        .map(|p| LowStockProduct {
            name: p.name.clone(),
            stock: p.stock,
        })
        .collect();

    low.sort_by_key(|p| p.stock);
    low.truncate(LOW_STOCK_LIMIT);
    low
}

/// Percentage change against a fixed baseline, rounded half up.
///
/// A zero baseline has no meaningful ratio: any current value counts as 100%.
pub fn calculate_growth(current: usize, previous: usize) -> i64 {
    if previous == 0 {
        return if current > 0 { 100 } else { 0 };
    }
    let ratio = (current as f64 - previous as f64) / previous as f64 * 100.0;
    (ratio + 0.5).floor() as i64
}

pub fn default_monthly_sales() -> Vec<MonthlySales> {
    vec![
        MonthlySales::new("Enero", 2_800_000.0),
        MonthlySales::new("Febrero", 3_200_000.0),
        MonthlySales::new("Marzo", 2_900_000.0),
        MonthlySales::new("Abril", 3_500_000.0),
        MonthlySales::new("Mayo", 3_100_000.0),
        MonthlySales::new("Junio", 3_800_000.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct FixedSales(u32);

    impl SalesSimulator for FixedSales {
        fn simulated_sales(&self, _product: &Product) -> u32 {
            self.0
        }
    }

    /// Sales equal to the product id, so ordering is predictable.
    struct SalesById;

    impl SalesSimulator for SalesById {
        fn simulated_sales(&self, product: &Product) -> u32 {
            product.id as u32
        }
    }

    fn product(id: i64, name: &str, price: f64, stock: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: String::new(),
            price,
            stock,
            category_id: None,
            provider_id: None,
            drive_url: None,
            category: None,
            provider: None,
        }
    }

    fn order(id: &str, total: Option<f64>, created_at: &str) -> OrderRecord {
        OrderRecord {
            id: Some(serde_json::json!(id)),
            total,
            created_at: Some(created_at.to_string()),
            ..Default::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_total_revenue_treats_missing_as_zero() {
        let orders = vec![
            order("a", Some(100.0), "2024-01-01"),
            order("b", None, "2024-01-02"),
            order("c", Some(50.0), "2024-01-03"),
        ];
        assert_eq!(total_revenue(&orders), 150.0);
        assert_eq!(total_revenue(&[]), 0.0);
    }

    #[test]
    fn test_recent_orders_newest_first_and_truncated() {
        let orders: Vec<OrderRecord> = (1..=8)
            .map(|day| order(&format!("ORD-{day}"), Some(1.0), &format!("2024-01-{day:02}")))
            .collect();

        let recent = recent_orders(&orders, now());

        assert_eq!(recent.len(), RECENT_ORDERS_LIMIT);
        let ids: Vec<&str> = recent.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-8", "ORD-7", "ORD-6", "ORD-5", "ORD-4"]);
    }

    #[test]
    fn test_recent_orders_shorter_than_limit() {
        let orders = vec![
            order("old", Some(1.0), "2023-12-01"),
            order("new", Some(1.0), "2024-01-10T08:00:00"),
        ];
        let recent = recent_orders(&orders, now());
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "new");
        assert_eq!(recent[1].id, "old");
    }

    #[test]
    fn test_recent_orders_missing_date_displays_as_now() {
        let orders = vec![
            order("dated", Some(1.0), "2024-01-10"),
            OrderRecord {
                id: Some(serde_json::json!("undated")),
                ..Default::default()
            },
            order("garbled", Some(1.0), "not a date"),
        ];
        let recent = recent_orders(&orders, now());
        let ids: Vec<&str> = recent.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["undated", "dated", "garbled"]);
        assert_eq!(recent[0].created_at_timestamp(), Some(now()));
    }

    #[test]
    fn test_top_products_uses_first_five_and_ranks_by_sales() {
        let products: Vec<Product> = (1..=7)
            .map(|id| product(id, &format!("P{id}"), 1000.0, 50))
            .collect();

        let top = top_products(&products, &SalesById);

        let names: Vec<&str> = top.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["P5", "P4", "P3", "P2", "P1"]);
        assert_eq!(top[0].revenue, 5000.0);
        assert_eq!(top[0].category, "Sin categoría");
    }

    #[test]
    fn test_top_products_revenue_is_price_times_sales() {
        let mut serum = product(1, "Serum", 45000.0, 3);
        serum.category = Some(Category {
            id: 1,
            name: "Skincare".to_string(),
            active: true,
        });
        let top = top_products(&[serum], &FixedSales(20));
        assert_eq!(top[0].sales, 20);
        assert_eq!(top[0].revenue, 900_000.0);
        assert_eq!(top[0].category, "Skincare");
    }

    #[test]
    fn test_low_stock_filters_sorts_and_truncates() {
        let mut products: Vec<Product> = (0..15)
            .map(|i| product(i, &format!("P{i}"), 1.0, 12 - i))
            .collect();
        products.push(product(100, "Plenty", 1.0, 13));
        products.push(product(101, "Edge", 1.0, 12));

        let low = low_stock_products(&products);

        assert_eq!(low.len(), LOW_STOCK_LIMIT);
        assert!(low.windows(2).all(|w| w[0].stock <= w[1].stock));
        assert!(low.iter().all(|p| p.stock <= LOW_STOCK_THRESHOLD));
        assert!(!low.iter().any(|p| p.name == "Plenty"));
        assert_eq!(low[0].stock, -2);
    }

    #[test]
    fn test_low_stock_keeps_every_match_below_limit() {
        let products = vec![
            product(1, "A", 1.0, 12),
            product(2, "B", 1.0, 40),
            product(3, "C", 1.0, 0),
        ];
        let low = low_stock_products(&products);
        assert_eq!(
            low,
            vec![
                LowStockProduct {
                    name: "C".to_string(),
                    stock: 0
                },
                LowStockProduct {
                    name: "A".to_string(),
                    stock: 12
                },
            ]
        );
    }

    #[test]
    fn test_calculate_growth() {
        assert_eq!(calculate_growth(12, 12), 0);
        assert_eq!(calculate_growth(0, 0), 0);
        assert_eq!(calculate_growth(5, 0), 100);
        assert_eq!(calculate_growth(3, 2), 50);
        assert_eq!(calculate_growth(0, 12), -100);
        assert_eq!(calculate_growth(13, 12), 8);
    }

    #[test]
    fn test_calculate_growth_rounds_half_up() {
        // -12.5% rounds towards +inf
        assert_eq!(calculate_growth(7, 8), -12);
        assert_eq!(calculate_growth(9, 8), 13);
    }

    #[test]
    fn test_fallback_stats() {
        let stats = DashboardStats::fallback();
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.total_revenue, 0.0);
        assert!(stats.recent_orders.is_empty());
        assert_eq!(stats.monthly_sales.len(), 6);
        assert_eq!(stats.monthly_sales[0], MonthlySales::new("Enero", 2_800_000.0));
        assert_eq!(stats.monthly_sales[5], MonthlySales::new("Junio", 3_800_000.0));
    }

    #[test]
    fn test_build_stats_combines_everything() {
        let inputs = DashboardInputs {
            products: vec![product(1, "A", 10.0, 2), product(2, "B", 20.0, 30)],
            categories: vec![],
            providers: vec![Provider {
                id: 1,
                name: "Sol".to_string(),
                contact: "a@b.co".to_string(),
            }],
            orders: vec![order("x", Some(10.0), "2024-01-01")],
            monthly_sales: vec![MonthlySales::new("Enero", 1.0)],
        };

        let stats = build_stats(&inputs, &FixedSales(10), now());

        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.total_orders, 1);
        assert_eq!(stats.total_revenue, 10.0);
        assert_eq!(stats.top_products.len(), 2);
        assert_eq!(stats.low_stock_products.len(), 1);
        assert_eq!(stats.monthly_sales, inputs.monthly_sales);
        assert_eq!(stats.product_growth, -83);
        assert_eq!(stats.category_growth, -100);
        assert_eq!(stats.provider_growth, 100);
    }
}
