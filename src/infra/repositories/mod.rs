//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod address_repository;
mod barber_service_repository;
mod booking_repository;
mod branch_repository;
pub mod entities;
mod favorite_repository;
mod notification_repository;
mod review_repository;
mod user_repository;

pub use address_repository::{AddressRepository, AddressStore, NewAddress};
pub use barber_service_repository::{BarberServiceRepository, BarberServiceStore, NewBarberService};
pub use booking_repository::{BookingRepository, BookingStore, NewBooking};
pub use branch_repository::{BranchPatch, BranchRepository, BranchStore, NewBranch};
pub use favorite_repository::{FavoriteRepository, FavoriteStore};
pub use notification_repository::{NotificationRepository, NotificationStore};
pub use review_repository::{NewReview, ReviewRepository, ReviewStore};
pub use user_repository::{NewUser, UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use address_repository::MockAddressRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use barber_service_repository::MockBarberServiceRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use booking_repository::MockBookingRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use branch_repository::MockBranchRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use favorite_repository::MockFavoriteRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use notification_repository::MockNotificationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use review_repository::MockReviewRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
