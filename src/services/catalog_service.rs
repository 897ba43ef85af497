//! Barber service catalog service.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::BarberService;
use crate::errors::{AppResult, OptionExt};
use crate::infra::{NewBarberService, UnitOfWork};

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List the full catalog
    async fn list_services(&self) -> AppResult<Vec<BarberService>>;

    /// Get catalog entry by ID
    async fn get_service(&self, id: i32) -> AppResult<BarberService>;

    /// Add a new catalog entry
    async fn create_service(&self, new: NewBarberService) -> AppResult<BarberService>;

    /// Update an existing catalog entry
    async fn update_service(
        &self,
        id: i32,
        name: Option<String>,
        price: Option<Decimal>,
        duration_minutes: Option<i32>,
    ) -> AppResult<BarberService>;

    /// Remove a catalog entry
    async fn delete_service(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of CatalogService using Unit of Work.
pub struct CatalogManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CatalogManager<U> {
    /// Create new catalog service instance
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CatalogService for CatalogManager<U> {
    async fn list_services(&self) -> AppResult<Vec<BarberService>> {
        self.uow.barber_services().list().await
    }

    async fn get_service(&self, id: i32) -> AppResult<BarberService> {
        self.uow
            .barber_services()
            .find_by_id(id)
            .await?
            .ok_or_not_found()
    }

    async fn create_service(&self, new: NewBarberService) -> AppResult<BarberService> {
        self.uow.barber_services().create(new).await
    }

    async fn update_service(
        &self,
        id: i32,
        name: Option<String>,
        price: Option<Decimal>,
        duration_minutes: Option<i32>,
    ) -> AppResult<BarberService> {
        self.uow
            .barber_services()
            .update(id, name, price, duration_minutes)
            .await
    }

    async fn delete_service(&self, id: i32) -> AppResult<()> {
        self.uow.barber_services().delete(id).await
    }
}
