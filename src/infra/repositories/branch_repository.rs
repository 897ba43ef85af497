//! Branch repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::branch::{self, ActiveModel, Entity as BranchEntity};
use crate::domain::Branch;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields needed to insert a branch row.
#[derive(Debug, Clone)]
pub struct NewBranch {
    pub name: String,
    pub address_text: String,
    pub lat: f64,
    pub lng: f64,
    pub phone: String,
}

/// Updatable branch fields; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct BranchPatch {
    pub name: Option<String>,
    pub address_text: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub phone: Option<String>,
}

/// Branch repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BranchRepository: Send + Sync {
    /// Find branch by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Branch>>;

    /// List all branches
    async fn list(&self) -> AppResult<Vec<Branch>>;

    /// Insert a new branch
    async fn create(&self, branch: NewBranch) -> AppResult<Branch>;

    /// Update an existing branch
    async fn update(&self, id: i32, patch: BranchPatch) -> AppResult<Branch>;

    /// Delete a branch by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of BranchRepository
pub struct BranchStore {
    db: std::sync::Arc<DatabaseConnection>,
}

impl BranchStore {
    /// Create new repository instance
    pub fn new(db: std::sync::Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BranchRepository for BranchStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Branch>> {
        let result = BranchEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Branch::from))
    }

    async fn list(&self) -> AppResult<Vec<Branch>> {
        let models = BranchEntity::find()
            .order_by_asc(branch::Column::Id)
            .all(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Branch::from).collect())
    }

    async fn create(&self, new: NewBranch) -> AppResult<Branch> {
        let now = Utc::now();
        let active_model = ActiveModel {
            name: Set(new.name),
            address_text: Set(new.address_text),
            lat: Set(new.lat),
            lng: Set(new.lng),
            phone: Set(new.phone),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model
            .insert(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Branch::from(model))
    }

    async fn update(&self, id: i32, patch: BranchPatch) -> AppResult<Branch> {
        let model = BranchEntity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();

        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(address_text) = patch.address_text {
            active.address_text = Set(address_text);
        }
        if let Some(lat) = patch.lat {
            active.lat = Set(lat);
        }
        if let Some(lng) = patch.lng {
            active.lng = Set(lng);
        }
        if let Some(phone) = patch.phone {
            active.phone = Set(phone);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&*self.db).await.map_err(AppError::from)?;
        Ok(Branch::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = BranchEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
