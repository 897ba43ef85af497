//! Favorite repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::favorite::{self, ActiveModel, Entity as FavoriteEntity};
use crate::domain::Favorite;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Favorite repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Find the favorite pairing a client with a branch, if any
    async fn find(&self, client_id: i32, branch_id: i32) -> AppResult<Option<Favorite>>;

    /// List a client's favorites, newest first
    async fn list_by_client(&self, client_id: i32) -> AppResult<Vec<Favorite>>;

    /// Insert a favorite row
    async fn create(&self, client_id: i32, branch_id: i32) -> AppResult<Favorite>;

    /// Remove the favorite pairing a client with a branch
    async fn delete(&self, client_id: i32, branch_id: i32) -> AppResult<()>;
}

/// Concrete implementation of FavoriteRepository
pub struct FavoriteStore {
    db: std::sync::Arc<DatabaseConnection>,
}

impl FavoriteStore {
    /// Create new repository instance
    pub fn new(db: std::sync::Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteStore {
    async fn find(&self, client_id: i32, branch_id: i32) -> AppResult<Option<Favorite>> {
        let result = FavoriteEntity::find()
            .filter(favorite::Column::ClientId.eq(client_id))
            .filter(favorite::Column::BranchId.eq(branch_id))
            .one(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Favorite::from))
    }

    async fn list_by_client(&self, client_id: i32) -> AppResult<Vec<Favorite>> {
        let models = FavoriteEntity::find()
            .filter(favorite::Column::ClientId.eq(client_id))
            .order_by_desc(favorite::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Favorite::from).collect())
    }

    async fn create(&self, client_id: i32, branch_id: i32) -> AppResult<Favorite> {
        let active_model = ActiveModel {
            client_id: Set(client_id),
            branch_id: Set(branch_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active_model
            .insert(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Favorite::from(model))
    }

    async fn delete(&self, client_id: i32, branch_id: i32) -> AppResult<()> {
        let model = FavoriteEntity::find()
            .filter(favorite::Column::ClientId.eq(client_id))
            .filter(favorite::Column::BranchId.eq(branch_id))
            .one(&*self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        model.delete(&*self.db).await.map_err(AppError::from)?;
        Ok(())
    }
}
