//! Branch service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Branch;
use crate::errors::{AppResult, OptionExt};
use crate::infra::{BranchPatch, NewBranch, UnitOfWork};

/// Branch service trait for dependency injection.
#[async_trait]
pub trait BranchService: Send + Sync {
    /// List all branches
    async fn list_branches(&self) -> AppResult<Vec<Branch>>;

    /// Get branch by ID
    async fn get_branch(&self, id: i32) -> AppResult<Branch>;

    /// Add a new branch
    async fn create_branch(&self, new: NewBranch) -> AppResult<Branch>;

    /// Update an existing branch
    async fn update_branch(&self, id: i32, patch: BranchPatch) -> AppResult<Branch>;

    /// Remove a branch
    async fn delete_branch(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of BranchService using Unit of Work.
pub struct BranchManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BranchManager<U> {
    /// Create new branch service instance
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> BranchService for BranchManager<U> {
    async fn list_branches(&self) -> AppResult<Vec<Branch>> {
        self.uow.branches().list().await
    }

    async fn get_branch(&self, id: i32) -> AppResult<Branch> {
        self.uow
            .branches()
            .find_by_id(id)
            .await?
            .ok_or_not_found()
    }

    async fn create_branch(&self, new: NewBranch) -> AppResult<Branch> {
        self.uow.branches().create(new).await
    }

    async fn update_branch(&self, id: i32, patch: BranchPatch) -> AppResult<Branch> {
        self.uow.branches().update(id, patch).await
    }

    async fn delete_branch(&self, id: i32) -> AppResult<()> {
        self.uow.branches().delete(id).await
    }
}
