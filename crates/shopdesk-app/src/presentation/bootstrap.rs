use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use shopdesk_infrastructure::config::{AppConfig, TimeoutConfig};
use shopdesk_infrastructure::http::resources::{
    HttpAuthGateway, HttpCategoryRepository, HttpOrderRepository, HttpProductRepository,
    HttpProviderRepository, HttpSalesReportRepository, HttpSubcategoryRepository,
};
use shopdesk_infrastructure::http::{ApiClient, HttpImageProbe};
use shopdesk_infrastructure::session::{FileSessionStore, SessionState};

use crate::application::services::{
    AuthService, CatalogService, DashboardService, ImageUrlService, MockDataService,
    OrderService,
};
use crate::presentation::state::{AppState, Repositories, Services};

pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let started_at = Instant::now();
    let timeouts = config.timeouts();
    let session = SessionState::new();

    let client =
        ApiClient::with_timeout(&config.api_url, session.clone(), timeouts.http_request)?;
    info!(api_url = %config.api_url, "HTTP client ready");

    let session_file = config.session_file();
    let repositories = Repositories {
        category: Arc::new(HttpCategoryRepository::new(client.clone())),
        subcategory: Arc::new(HttpSubcategoryRepository::new(client.clone())),
        product: Arc::new(HttpProductRepository::new(client.clone())),
        provider: Arc::new(HttpProviderRepository::new(client.clone())),
        order: Arc::new(HttpOrderRepository::new(client.clone())),
        sales: Arc::new(HttpSalesReportRepository::new(client.clone())),
        auth: Arc::new(HttpAuthGateway::new(client)),
        session_store: Arc::new(FileSessionStore::new(&session_file)),
        image_probe: Arc::new(HttpImageProbe::new(timeouts.image_probe)?),
    };

    let services = build_services(repositories, session.clone(), &timeouts);

    match services.auth.restore() {
        Ok(Some(_)) => info!(path = %session_file.display(), "Session restored"),
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Could not restore session"),
    }

    info!(
        elapsed_ms = started_at.elapsed().as_millis() as u64,
        "Application state ready"
    );

    Ok(AppState {
        config,
        session,
        services,
    })
}

/// Wire services onto a set of repositories.
pub fn build_services(
    repositories: Repositories,
    session: SessionState,
    timeouts: &TimeoutConfig,
) -> Services {
    let mock_data = Arc::new(MockDataService::new(timeouts));

    Services {
        auth: Arc::new(AuthService::new(
            repositories.auth,
            repositories.session_store,
            session,
        )),
        catalog: Arc::new(CatalogService::new(
            repositories.category.clone(),
            repositories.subcategory,
            repositories.product.clone(),
            repositories.provider.clone(),
        )),
        dashboard: Arc::new(DashboardService::new(
            repositories.product,
            repositories.category,
            repositories.provider,
            repositories.order.clone(),
            repositories.sales,
            mock_data,
        )),
        orders: Arc::new(OrderService::new(repositories.order)),
        images: Arc::new(ImageUrlService::new(repositories.image_probe, timeouts)),
    }
}
