//! Booking repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::booking::{self, ActiveModel, Entity as BookingEntity};
use crate::config::STATUS_PENDING;
use crate::domain::{Booking, BookingStatus};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields needed to insert a booking row.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub client_id: i32,
    pub staff_id: i32,
    pub branch_id: i32,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub total_duration_minutes: i32,
    pub total_price: Decimal,
}

/// Booking repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find booking by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Booking>>;

    /// Insert a new booking in pending status
    async fn create(&self, booking: NewBooking) -> AppResult<Booking>;

    /// Overwrite the status of an existing booking
    async fn set_status(&self, id: i32, status: BookingStatus) -> AppResult<Booking>;

    /// Page through one client's bookings, newest first.
    /// Returns the page plus the total row count.
    async fn list_by_client(
        &self,
        client_id: i32,
        params: &PaginationParams,
    ) -> AppResult<(Vec<Booking>, u64)>;
}

/// Concrete implementation of BookingRepository
pub struct BookingStore {
    db: std::sync::Arc<DatabaseConnection>,
}

impl BookingStore {
    /// Create new repository instance
    pub fn new(db: std::sync::Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepository for BookingStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Booking>> {
        let result = BookingEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Booking::from))
    }

    async fn create(&self, new: NewBooking) -> AppResult<Booking> {
        let now = Utc::now();
        let active_model = ActiveModel {
            client_id: Set(new.client_id),
            staff_id: Set(new.staff_id),
            branch_id: Set(new.branch_id),
            start_at: Set(new.start_at),
            end_at: Set(new.end_at),
            total_duration_minutes: Set(new.total_duration_minutes),
            total_price: Set(new.total_price),
            status: Set(STATUS_PENDING.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model
            .insert(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Booking::from(model))
    }

    async fn set_status(&self, id: i32, status: BookingStatus) -> AppResult<Booking> {
        let model = BookingEntity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();
        active.status = Set(status.to_string());
        active.updated_at = Set(Utc::now());

        let model = active.update(&*self.db).await.map_err(AppError::from)?;
        Ok(Booking::from(model))
    }

    async fn list_by_client(
        &self,
        client_id: i32,
        params: &PaginationParams,
    ) -> AppResult<(Vec<Booking>, u64)> {
        let paginator = BookingEntity::find()
            .filter(booking::Column::ClientId.eq(client_id))
            .order_by_desc(booking::Column::StartAt)
            .paginate(&*self.db, params.limit());

        let total = paginator.num_items().await.map_err(AppError::from)?;
        let models = paginator
            .fetch_page(params.page_index())
            .await
            .map_err(AppError::from)?;

        Ok((models.into_iter().map(Booking::from).collect(), total))
    }
}
