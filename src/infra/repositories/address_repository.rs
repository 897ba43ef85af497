//! Address repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::address::{self, ActiveModel, Entity as AddressEntity};
use crate::domain::Address;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields needed to insert an address row.
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub user_id: i32,
    pub text: String,
    pub lat: f64,
    pub lng: f64,
}

/// Address repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Find address by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Address>>;

    /// List all addresses saved by a user
    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<Address>>;

    /// Insert a new address
    async fn create(&self, address: NewAddress) -> AppResult<Address>;

    /// Update an address; `None` leaves a field untouched
    async fn update(
        &self,
        id: i32,
        text: Option<String>,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> AppResult<Address>;

    /// Delete an address by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of AddressRepository
pub struct AddressStore {
    db: std::sync::Arc<DatabaseConnection>,
}

impl AddressStore {
    /// Create new repository instance
    pub fn new(db: std::sync::Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressRepository for AddressStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Address>> {
        let result = AddressEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Address::from))
    }

    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<Address>> {
        let models = AddressEntity::find()
            .filter(address::Column::UserId.eq(user_id))
            .all(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Address::from).collect())
    }

    async fn create(&self, new: NewAddress) -> AppResult<Address> {
        let active_model = ActiveModel {
            user_id: Set(new.user_id),
            text: Set(new.text),
            lat: Set(new.lat),
            lng: Set(new.lng),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active_model
            .insert(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Address::from(model))
    }

    async fn update(
        &self,
        id: i32,
        text: Option<String>,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> AppResult<Address> {
        let model = AddressEntity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();

        if let Some(text) = text {
            active.text = Set(text);
        }
        if let Some(lat) = lat {
            active.lat = Set(lat);
        }
        if let Some(lng) = lng {
            active.lng = Set(lng);
        }

        let model = active.update(&*self.db).await.map_err(AppError::from)?;
        Ok(Address::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = AddressEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
