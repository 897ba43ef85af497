//! Review repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::review::{self, ActiveModel, Entity as ReviewEntity};
use crate::domain::Review;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields needed to insert a review row.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub client_id: i32,
    pub branch_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Review repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find review by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Review>>;

    /// List reviews for a branch, newest first
    async fn list_by_branch(&self, branch_id: i32) -> AppResult<Vec<Review>>;

    /// Insert a new review
    async fn create(&self, review: NewReview) -> AppResult<Review>;

    /// Delete a review by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ReviewRepository
pub struct ReviewStore {
    db: std::sync::Arc<DatabaseConnection>,
}

impl ReviewStore {
    /// Create new repository instance
    pub fn new(db: std::sync::Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Review>> {
        let result = ReviewEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Review::from))
    }

    async fn list_by_branch(&self, branch_id: i32) -> AppResult<Vec<Review>> {
        let models = ReviewEntity::find()
            .filter(review::Column::BranchId.eq(branch_id))
            .order_by_desc(review::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Review::from).collect())
    }

    async fn create(&self, new: NewReview) -> AppResult<Review> {
        let active_model = ActiveModel {
            client_id: Set(new.client_id),
            branch_id: Set(new.branch_id),
            rating: Set(new.rating),
            comment: Set(new.comment),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active_model
            .insert(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Review::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ReviewEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
