mod record;
mod repository;
mod status;

pub use record::{parse_timestamp, Order, OrderRecord};
pub use repository::OrderRepository;
pub use status::OrderStatus;
