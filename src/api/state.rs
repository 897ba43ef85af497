//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and
//! infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Cache, Database, Mailer};
use crate::services::{
    AddressService, AuthService, BookingService, BranchService, CatalogService, FavoriteService,
    NotificationService, ReviewService, ServiceContainer, Services,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Booking service
    pub booking_service: Arc<dyn BookingService>,
    /// Barber service catalog service
    pub catalog_service: Arc<dyn CatalogService>,
    /// Branch service
    pub branch_service: Arc<dyn BranchService>,
    /// Address service
    pub address_service: Arc<dyn AddressService>,
    /// Review service
    pub review_service: Arc<dyn ReviewService>,
    /// Favorite service
    pub favorite_service: Arc<dyn FavoriteService>,
    /// Notification service
    pub notification_service: Arc<dyn NotificationService>,
    /// Redis cache (revocation store, rate limiting)
    pub cache: Arc<Cache>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from infrastructure and config.
    ///
    /// Wires every service through the ServiceContainer so they all
    /// share one Unit of Work over the connection pool.
    pub fn from_config(
        database: Arc<Database>,
        cache: Arc<Cache>,
        mailer: Arc<Mailer>,
        config: Config,
    ) -> Self {
        let container = Services::from_connection(
            database.get_connection(),
            cache.clone(),
            mailer,
            config,
        );

        Self {
            auth_service: container.auth(),
            booking_service: container.bookings(),
            catalog_service: container.catalog(),
            branch_service: container.branches(),
            address_service: container.addresses(),
            review_service: container.reviews(),
            favorite_service: container.favorites(),
            notification_service: container.notifications(),
            cache,
            database,
        }
    }
}
