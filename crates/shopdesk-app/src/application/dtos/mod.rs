use serde::{Deserialize, Serialize};

use shopdesk_domain::catalog::StockLevel;
use shopdesk_domain::order::Order;
use shopdesk_domain::EntityId;

/// A product as the product list shows it: names resolved, stock badged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRowDto {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub stock_level: StockLevel,
    pub stock_severity: String,
    pub category: String,
    pub provider: String,
    /// Direct image link derived from the product's Drive URL
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRowDto {
    #[serde(flatten)]
    pub order: Order,
    pub status_severity: String,
}
