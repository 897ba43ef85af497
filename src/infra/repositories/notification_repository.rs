//! Notification repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::notification::{self, ActiveModel, Entity as NotificationEntity};
use crate::domain::Notification;
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Notification repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Insert an unread notification for a user
    async fn create(&self, user_id: i32, title: String, body: String) -> AppResult<Notification>;

    /// Page through a user's notifications, newest first.
    /// Returns the page plus the total row count.
    async fn list_by_user(
        &self,
        user_id: i32,
        params: &PaginationParams,
    ) -> AppResult<(Vec<Notification>, u64)>;

    /// Mark one of the user's notifications as read
    async fn mark_read(&self, id: i32, user_id: i32) -> AppResult<Notification>;

    /// Mark every unread notification of a user as read.
    /// Returns the number of rows touched.
    async fn mark_all_read(&self, user_id: i32) -> AppResult<u64>;
}

/// Concrete implementation of NotificationRepository
pub struct NotificationStore {
    db: std::sync::Arc<DatabaseConnection>,
}

impl NotificationStore {
    /// Create new repository instance
    pub fn new(db: std::sync::Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationRepository for NotificationStore {
    async fn create(&self, user_id: i32, title: String, body: String) -> AppResult<Notification> {
        let active_model = ActiveModel {
            user_id: Set(user_id),
            title: Set(title),
            body: Set(body),
            read: Set(false),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active_model
            .insert(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Notification::from(model))
    }

    async fn list_by_user(
        &self,
        user_id: i32,
        params: &PaginationParams,
    ) -> AppResult<(Vec<Notification>, u64)> {
        let paginator = NotificationEntity::find()
            .filter(notification::Column::UserId.eq(user_id))
            .order_by_desc(notification::Column::CreatedAt)
            .paginate(&*self.db, params.limit());

        let total = paginator.num_items().await.map_err(AppError::from)?;
        let models = paginator
            .fetch_page(params.page_index())
            .await
            .map_err(AppError::from)?;

        Ok((models.into_iter().map(Notification::from).collect(), total))
    }

    async fn mark_read(&self, id: i32, user_id: i32) -> AppResult<Notification> {
        let model = NotificationEntity::find_by_id(id)
            .filter(notification::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();
        active.read = Set(true);

        let model = active.update(&*self.db).await.map_err(AppError::from)?;
        Ok(Notification::from(model))
    }

    async fn mark_all_read(&self, user_id: i32) -> AppResult<u64> {
        let result = NotificationEntity::update_many()
            .col_expr(notification::Column::Read, sea_orm::sea_query::Expr::value(true))
            .filter(notification::Column::UserId.eq(user_id))
            .filter(notification::Column::Read.eq(false))
            .exec(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
