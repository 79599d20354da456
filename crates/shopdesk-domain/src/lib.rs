// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod drive;
pub mod order;
pub mod shared;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

// Re-exports for convenience
pub use shared::{DomainError, EntityId};
