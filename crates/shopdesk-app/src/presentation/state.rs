use std::sync::Arc;

use shopdesk_domain::auth::{AuthGateway, SessionStore};
use shopdesk_domain::catalog::{
    CategoryRepository, ProductRepository, ProviderRepository, SubcategoryRepository,
};
use shopdesk_domain::dashboard::SalesReportRepository;
use shopdesk_domain::drive::ImageProbe;
use shopdesk_domain::order::OrderRepository;
use shopdesk_infrastructure::config::AppConfig;
use shopdesk_infrastructure::session::SessionState;

use crate::application::services::{
    AuthService, CatalogService, DashboardService, ImageUrlService, OrderService,
};

/// Every backend seam the services are built on
pub struct Repositories {
    pub category: Arc<dyn CategoryRepository>,
    pub subcategory: Arc<dyn SubcategoryRepository>,
    pub product: Arc<dyn ProductRepository>,
    pub provider: Arc<dyn ProviderRepository>,
    pub order: Arc<dyn OrderRepository>,
    pub sales: Arc<dyn SalesReportRepository>,
    pub auth: Arc<dyn AuthGateway>,
    pub session_store: Arc<dyn SessionStore>,
    pub image_probe: Arc<dyn ImageProbe>,
}

pub struct Services {
    pub auth: Arc<AuthService>,
    pub catalog: Arc<CatalogService>,
    pub dashboard: Arc<DashboardService>,
    pub orders: Arc<OrderService>,
    pub images: Arc<ImageUrlService>,
}

pub struct AppState {
    pub config: AppConfig,
    pub session: SessionState,
    pub services: Services,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        crate::presentation::bootstrap::build_app_state(config)
    }

    pub fn is_authenticated(&self) -> bool {
        self.services.auth.is_authenticated()
    }
}
