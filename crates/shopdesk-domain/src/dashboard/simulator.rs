use crate::catalog::Product;

/// Source of per-product sales figures for the top-products card.
///
/// The backend has no sales endpoint per product yet, so production code
/// plugs in a random simulation. Tests plug in fixed numbers.
pub trait SalesSimulator: Send + Sync {
    fn simulated_sales(&self, product: &Product) -> u32;
}
