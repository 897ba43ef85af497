//! Favorite service.

use async_trait::async_trait;
use std::sync::Arc;

use super::parallel;
use crate::domain::Favorite;
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Favorite service trait for dependency injection.
#[async_trait]
pub trait FavoriteService: Send + Sync {
    /// Bookmark a branch for the caller
    async fn add_favorite(&self, client_id: i32, branch_id: i32) -> AppResult<Favorite>;

    /// Remove one of the caller's bookmarks
    async fn remove_favorite(&self, client_id: i32, branch_id: i32) -> AppResult<()>;

    /// List the caller's bookmarks, newest first
    async fn list_favorites(&self, client_id: i32) -> AppResult<Vec<Favorite>>;
}

/// Concrete implementation of FavoriteService using Unit of Work.
pub struct FavoriteManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> FavoriteManager<U> {
    /// Create new favorite service instance
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> FavoriteService for FavoriteManager<U> {
    async fn add_favorite(&self, client_id: i32, branch_id: i32) -> AppResult<Favorite> {
        // Both lookups are independent, so issue them concurrently.
        let branches = self.uow.branches();
        let favorites = self.uow.favorites();
        let (branch, existing) = parallel::join2(
            branches.find_by_id(branch_id),
            favorites.find(client_id, branch_id),
        )
        .await?;

        branch.ok_or_else(|| {
            AppError::bad_request(format!("Branch with id {} does not exist", branch_id))
        })?;

        if existing.is_some() {
            return Err(AppError::conflict("Favorite"));
        }

        self.uow.favorites().create(client_id, branch_id).await
    }

    async fn remove_favorite(&self, client_id: i32, branch_id: i32) -> AppResult<()> {
        self.uow.favorites().delete(client_id, branch_id).await
    }

    async fn list_favorites(&self, client_id: i32) -> AppResult<Vec<Favorite>> {
        self.uow.favorites().list_by_client(client_id).await
    }
}
