//! Service Container - Centralized service access.
//!
//! Wires every feature service onto the shared Unit of Work and keeps
//! handlers depending on service traits, not implementations.

use std::future::Future;
use std::sync::Arc;

use super::{
    AddressService, AuthService, BookingService, BranchService, CatalogService, FavoriteService,
    NotificationService, ReviewService,
};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Cache, Mailer, Persistence};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get booking service
    fn bookings(&self) -> Arc<dyn BookingService>;

    /// Get barber service catalog service
    fn catalog(&self) -> Arc<dyn CatalogService>;

    /// Get branch service
    fn branches(&self) -> Arc<dyn BranchService>;

    /// Get address service
    fn addresses(&self) -> Arc<dyn AddressService>;

    /// Get review service
    fn reviews(&self) -> Arc<dyn ReviewService>;

    /// Get favorite service
    fn favorites(&self) -> Arc<dyn FavoriteService>;

    /// Get notification service
    fn notifications(&self) -> Arc<dyn NotificationService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    booking_service: Arc<dyn BookingService>,
    catalog_service: Arc<dyn CatalogService>,
    branch_service: Arc<dyn BranchService>,
    address_service: Arc<dyn AddressService>,
    review_service: Arc<dyn ReviewService>,
    favorite_service: Arc<dyn FavoriteService>,
    notification_service: Arc<dyn NotificationService>,
}

impl Services {
    /// Create service container from database connection, cache, mailer
    /// and config
    pub fn from_connection(
        db: std::sync::Arc<sea_orm::DatabaseConnection>,
        cache: Arc<Cache>,
        mailer: Arc<Mailer>,
        config: Config,
    ) -> Self {
        use super::{
            AddressManager, Authenticator, BookingManager, BranchManager, CatalogManager,
            FavoriteManager, NotificationManager, ReviewManager,
        };

        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(
                uow.clone(),
                cache,
                mailer.clone(),
                config,
            )),
            booking_service: Arc::new(BookingManager::new(uow.clone(), mailer)),
            catalog_service: Arc::new(CatalogManager::new(uow.clone())),
            branch_service: Arc::new(BranchManager::new(uow.clone())),
            address_service: Arc::new(AddressManager::new(uow.clone())),
            review_service: Arc::new(ReviewManager::new(uow.clone())),
            favorite_service: Arc::new(FavoriteManager::new(uow.clone())),
            notification_service: Arc::new(NotificationManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingService> {
        self.booking_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    fn branches(&self) -> Arc<dyn BranchService> {
        self.branch_service.clone()
    }

    fn addresses(&self) -> Arc<dyn AddressService> {
        self.address_service.clone()
    }

    fn reviews(&self) -> Arc<dyn ReviewService> {
        self.review_service.clone()
    }

    fn favorites(&self) -> Arc<dyn FavoriteService> {
        self.favorite_service.clone()
    }

    fn notifications(&self) -> Arc<dyn NotificationService> {
        self.notification_service.clone()
    }
}

/// Parallel execution utilities for running independent operations
/// concurrently.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    ///
    /// Both operations run concurrently and the function returns when
    /// both complete. If either operation fails, the error is returned
    /// immediately.
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }

    /// Execute three independent async operations in parallel.
    pub async fn join3<F1, F2, F3, T1, T2, T3>(f1: F1, f2: F2, f3: F3) -> AppResult<(T1, T2, T3)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
        F3: Future<Output = AppResult<T3>>,
    {
        try_join!(f1, f2, f3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parallel_join2() {
        async fn op1() -> AppResult<i32> {
            Ok(1)
        }
        async fn op2() -> AppResult<i32> {
            Ok(2)
        }

        let (a, b) = parallel::join2(op1(), op2()).await.unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[tokio::test]
    async fn test_parallel_join3_short_circuits() {
        use crate::errors::AppError;

        async fn ok() -> AppResult<i32> {
            Ok(1)
        }
        async fn fails() -> AppResult<i32> {
            Err(AppError::NotFound)
        }

        let result = parallel::join3(ok(), fails(), ok()).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
