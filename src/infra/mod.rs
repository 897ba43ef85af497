//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - Redis (token revocation, rate limiting)
//! - Outbound SMTP email
//! - Unit of Work for transaction management

pub mod cache;
pub mod db;
pub mod mailer;
pub mod repositories;
pub mod unit_of_work;

pub use cache::{Cache, RevocationStore};
pub use db::{Database, Migrator};
pub use mailer::Mailer;
pub use repositories::{
    AddressRepository, AddressStore, BarberServiceRepository, BarberServiceStore,
    BookingRepository, BookingStore, BranchPatch, BranchRepository, BranchStore,
    FavoriteRepository, FavoriteStore, NewAddress, NewBarberService, NewBooking, NewBranch,
    NewReview, NewUser, NotificationRepository, NotificationStore, ReviewRepository, ReviewStore,
    UserRepository, UserStore,
};
pub use unit_of_work::{Persistence, TransactionContext, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use cache::MockRevocationStore;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockAddressRepository, MockBarberServiceRepository, MockBookingRepository,
    MockBranchRepository, MockFavoriteRepository, MockNotificationRepository,
    MockReviewRepository, MockUserRepository,
};
