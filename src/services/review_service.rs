//! Review service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MAX_REVIEW_RATING, MIN_REVIEW_RATING};
use crate::domain::Review;
use crate::errors::{AppError, AppResult};
use crate::infra::{NewReview, UnitOfWork};

/// Review service trait for dependency injection.
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Leave a review on a branch
    async fn create_review(&self, new: NewReview) -> AppResult<Review>;

    /// List a branch's reviews, newest first
    async fn list_branch_reviews(&self, branch_id: i32) -> AppResult<Vec<Review>>;

    /// Delete one of the caller's reviews
    async fn delete_review(&self, client_id: i32, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ReviewService using Unit of Work.
pub struct ReviewManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ReviewManager<U> {
    /// Create new review service instance
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ReviewService for ReviewManager<U> {
    async fn create_review(&self, new: NewReview) -> AppResult<Review> {
        if !(MIN_REVIEW_RATING..=MAX_REVIEW_RATING).contains(&new.rating) {
            return Err(AppError::validation(format!(
                "Rating must be between {} and {}",
                MIN_REVIEW_RATING, MAX_REVIEW_RATING
            )));
        }

        self.uow
            .branches()
            .find_by_id(new.branch_id)
            .await?
            .ok_or_else(|| {
                AppError::bad_request(format!("Branch with id {} does not exist", new.branch_id))
            })?;

        self.uow.reviews().create(new).await
    }

    async fn list_branch_reviews(&self, branch_id: i32) -> AppResult<Vec<Review>> {
        self.uow
            .branches()
            .find_by_id(branch_id)
            .await?
            .ok_or(AppError::NotFound)?;

        self.uow.reviews().list_by_branch(branch_id).await
    }

    async fn delete_review(&self, client_id: i32, id: i32) -> AppResult<()> {
        let review = self
            .uow
            .reviews()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        if review.client_id != client_id {
            return Err(AppError::Forbidden);
        }

        self.uow.reviews().delete(id).await
    }
}
