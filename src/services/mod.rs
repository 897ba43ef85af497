//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management.

mod address_service;
mod auth_service;
mod booking_service;
mod branch_service;
mod catalog_service;
pub mod container;
mod favorite_service;
mod notification_service;
mod review_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use address_service::{AddressManager, AddressService};
pub use auth_service::{AuthResponse, AuthService, Authenticator, Claims, ClientRegistration};
pub use booking_service::{BookingManager, BookingService};
pub use branch_service::{BranchManager, BranchService};
pub use catalog_service::{CatalogManager, CatalogService};
pub use favorite_service::{FavoriteManager, FavoriteService};
pub use notification_service::{NotificationManager, NotificationService};
pub use review_service::{ReviewManager, ReviewService};

// Parallel execution utilities
pub use container::parallel;

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
