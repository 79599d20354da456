//! Backend resources. Each CRUD resource follows the same routes:
//! `GET base`, `GET base/{id}`, `POST base/create`, `PATCH base/update`,
//! `DELETE base/{id}`.

mod auth;
mod category;
mod orders;
mod product;
mod provider;
mod sales;
mod subcategory;

pub use auth::HttpAuthGateway;
pub use category::HttpCategoryRepository;
pub use orders::HttpOrderRepository;
pub use product::HttpProductRepository;
pub use provider::HttpProviderRepository;
pub use sales::HttpSalesReportRepository;
pub use subcategory::HttpSubcategoryRepository;

use shopdesk_domain::EntityId;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Endpoint {
    base: &'static str,
}

impl Endpoint {
    pub(crate) const fn new(base: &'static str) -> Self {
        Self { base }
    }

    pub(crate) fn list(&self) -> &'static str {
        self.base
    }

    pub(crate) fn item(&self, id: EntityId) -> String {
        format!("{}/{}", self.base, id)
    }

    pub(crate) fn create(&self) -> String {
        format!("{}/create", self.base)
    }

    pub(crate) fn update(&self) -> String {
        format!("{}/update", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_routes() {
        let endpoint = Endpoint::new("/productos");
        assert_eq!(endpoint.list(), "/productos");
        assert_eq!(endpoint.item(42), "/productos/42");
        assert_eq!(endpoint.create(), "/productos/create");
        assert_eq!(endpoint.update(), "/productos/update");
    }
}
