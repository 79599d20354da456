mod auth_service;
mod catalog_service;
mod dashboard_service;
mod drive_picker_service;
mod image_url_service;
mod mock_data_service;
mod order_service;

pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use dashboard_service::{DashboardService, RandomSalesSimulator, SourceOutcome};
pub use drive_picker_service::{
    DrivePickerService, AUTH_CANCELLED_MESSAGE, LOAD_TIMEOUT_MESSAGE, PICKER_FAILED_MESSAGE,
};
pub use image_url_service::ImageUrlService;
pub use mock_data_service::{canned_orders, MockDataService};
pub use order_service::OrderService;
