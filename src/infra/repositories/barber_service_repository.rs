//! Barber service catalog repository.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::barber_service::{self, ActiveModel, Entity as BarberServiceEntity};
use crate::domain::BarberService;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields needed to insert a catalog entry.
#[derive(Debug, Clone)]
pub struct NewBarberService {
    pub name: String,
    pub price: Decimal,
    pub duration_minutes: i32,
}

/// Catalog repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BarberServiceRepository: Send + Sync {
    /// Find catalog entry by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<BarberService>>;

    /// List the whole catalog
    async fn list(&self) -> AppResult<Vec<BarberService>>;

    /// Insert a new catalog entry
    async fn create(&self, service: NewBarberService) -> AppResult<BarberService>;

    /// Update name/price/duration of an existing entry
    async fn update(
        &self,
        id: i32,
        name: Option<String>,
        price: Option<Decimal>,
        duration_minutes: Option<i32>,
    ) -> AppResult<BarberService>;

    /// Delete an entry by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of BarberServiceRepository
pub struct BarberServiceStore {
    db: std::sync::Arc<DatabaseConnection>,
}

impl BarberServiceStore {
    /// Create new repository instance
    pub fn new(db: std::sync::Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BarberServiceRepository for BarberServiceStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<BarberService>> {
        let result = BarberServiceEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(BarberService::from))
    }

    async fn list(&self) -> AppResult<Vec<BarberService>> {
        let models = BarberServiceEntity::find()
            .order_by_asc(barber_service::Column::Id)
            .all(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(BarberService::from).collect())
    }

    async fn create(&self, new: NewBarberService) -> AppResult<BarberService> {
        let now = Utc::now();
        let active_model = ActiveModel {
            name: Set(new.name),
            price: Set(new.price),
            duration_minutes: Set(new.duration_minutes),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model
            .insert(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(BarberService::from(model))
    }

    async fn update(
        &self,
        id: i32,
        name: Option<String>,
        price: Option<Decimal>,
        duration_minutes: Option<i32>,
    ) -> AppResult<BarberService> {
        let model = BarberServiceEntity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();

        if let Some(name) = name {
            active.name = Set(name);
        }
        if let Some(price) = price {
            active.price = Set(price);
        }
        if let Some(duration) = duration_minutes {
            active.duration_minutes = Set(duration);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&*self.db).await.map_err(AppError::from)?;
        Ok(BarberService::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = BarberServiceEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
