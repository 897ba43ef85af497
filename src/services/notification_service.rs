//! Notification service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Notification;
use crate::errors::AppResult;
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// Notification service trait for dependency injection.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Page through the caller's notifications, newest first
    async fn list_notifications(
        &self,
        user_id: i32,
        params: PaginationParams,
    ) -> AppResult<(Vec<Notification>, u64)>;

    /// Mark one of the caller's notifications as read
    async fn mark_read(&self, user_id: i32, id: i32) -> AppResult<Notification>;

    /// Mark all of the caller's notifications as read.
    /// Returns the number of rows touched.
    async fn mark_all_read(&self, user_id: i32) -> AppResult<u64>;
}

/// Concrete implementation of NotificationService using Unit of Work.
pub struct NotificationManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> NotificationManager<U> {
    /// Create new notification service instance
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> NotificationService for NotificationManager<U> {
    async fn list_notifications(
        &self,
        user_id: i32,
        params: PaginationParams,
    ) -> AppResult<(Vec<Notification>, u64)> {
        self.uow.notifications().list_by_user(user_id, &params).await
    }

    async fn mark_read(&self, user_id: i32, id: i32) -> AppResult<Notification> {
        self.uow.notifications().mark_read(id, user_id).await
    }

    async fn mark_all_read(&self, user_id: i32) -> AppResult<u64> {
        self.uow.notifications().mark_all_read(user_id).await
    }
}
