//! Unit of Work pattern implementation.
//!
//! Centralizes access to all repositories and manages database
//! transactions (begin, commit, rollback) so multi-row writes such as
//! the booking-service association and client registration stay atomic.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::{
    AddressRepository, AddressStore, BarberServiceRepository, BarberServiceStore,
    BookingRepository, BookingStore, BranchRepository, BranchStore, FavoriteRepository,
    FavoriteStore, NewAddress, NewUser, NotificationRepository, NotificationStore,
    ReviewRepository, ReviewStore, UserRepository, UserStore,
};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction
/// management. Note: this trait is not mockable directly due to generic
/// methods. For testing, mock at the repository level or use
/// `sea_orm::MockDatabase`.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get booking repository
    fn bookings(&self) -> Arc<dyn BookingRepository>;

    /// Get barber service catalog repository
    fn barber_services(&self) -> Arc<dyn BarberServiceRepository>;

    /// Get branch repository
    fn branches(&self) -> Arc<dyn BranchRepository>;

    /// Get address repository
    fn addresses(&self) -> Arc<dyn AddressRepository>;

    /// Get review repository
    fn reviews(&self) -> Arc<dyn ReviewRepository>;

    /// Get favorite repository
    fn favorites(&self) -> Arc<dyn FavoriteRepository>;

    /// Get notification repository
    fn notifications(&self) -> Arc<dyn NotificationRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is automatically committed on success or rolled
    /// back on error. Uses ReadCommitted isolation; nothing in the
    /// system needs a stronger level.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction. The context borrows the transaction
/// to ensure proper lifetime management.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get user repository for this transaction
    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository::new(self.txn)
    }

    /// Get address repository for this transaction
    pub fn addresses(&self) -> TxAddressRepository<'_> {
        TxAddressRepository::new(self.txn)
    }

    /// Get barber service catalog repository for this transaction
    pub fn barber_services(&self) -> TxBarberServiceRepository<'_> {
        TxBarberServiceRepository::new(self.txn)
    }

    /// Get booking line-item repository for this transaction
    pub fn booking_items(&self) -> TxBookingItemRepository<'_> {
        TxBookingItemRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: Arc<DatabaseConnection>,
    user_repo: Arc<UserStore>,
    booking_repo: Arc<BookingStore>,
    barber_service_repo: Arc<BarberServiceStore>,
    branch_repo: Arc<BranchStore>,
    address_repo: Arc<AddressStore>,
    review_repo: Arc<ReviewStore>,
    favorite_repo: Arc<FavoriteStore>,
    notification_repo: Arc<NotificationStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        let db = db.into();
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            booking_repo: Arc::new(BookingStore::new(db.clone())),
            barber_service_repo: Arc::new(BarberServiceStore::new(db.clone())),
            branch_repo: Arc::new(BranchStore::new(db.clone())),
            address_repo: Arc::new(AddressStore::new(db.clone())),
            review_repo: Arc::new(ReviewStore::new(db.clone())),
            favorite_repo: Arc::new(FavoriteStore::new(db.clone())),
            notification_repo: Arc::new(NotificationStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingRepository> {
        self.booking_repo.clone()
    }

    fn barber_services(&self) -> Arc<dyn BarberServiceRepository> {
        self.barber_service_repo.clone()
    }

    fn branches(&self) -> Arc<dyn BranchRepository> {
        self.branch_repo.clone()
    }

    fn addresses(&self) -> Arc<dyn AddressRepository> {
        self.address_repo.clone()
    }

    fn reviews(&self) -> Arc<dyn ReviewRepository> {
        self.review_repo.clone()
    }

    fn favorites(&self) -> Arc<dyn FavoriteRepository> {
        self.favorite_repo.clone()
    }

    fn notifications(&self) -> Arc<dyn NotificationRepository> {
        self.notification_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        // Begin transaction
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::ReadCommitted), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        // Create context with borrowed transaction
        let ctx = TransactionContext::new(&txn);

        // Execute the closure
        match f(ctx).await {
            Ok(result) => {
                // Commit on success - txn is owned, so this always works
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                // Rollback on error
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware user repository.
///
/// Used by client registration so the user row and the initial address
/// row land together or not at all.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Find user by phone number
    pub async fn find_by_phone(&self, phone: &str) -> AppResult<Option<crate::domain::User>> {
        use super::repositories::entities::user::{self, Entity as UserEntity};
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

        let result = UserEntity::find()
            .filter(user::Column::Phone.eq(phone))
            .one(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(crate::domain::User::from))
    }

    /// Create a new user
    pub async fn create(&self, new: NewUser) -> AppResult<crate::domain::User> {
        use super::repositories::entities::user::ActiveModel;
        use sea_orm::{ActiveModelTrait, Set};

        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            phone: Set(new.phone),
            password_hash: Set(new.password_hash),
            full_name: Set(new.full_name),
            email: Set(new.email),
            birth_date: Set(new.birth_date),
            role: Set(new.role),
            branch_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model
            .insert(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(crate::domain::User::from(model))
    }
}

/// Transaction-aware address repository.
pub struct TxAddressRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxAddressRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Create a new address
    pub async fn create(&self, new: NewAddress) -> AppResult<crate::domain::Address> {
        use super::repositories::entities::address::ActiveModel;
        use sea_orm::{ActiveModelTrait, Set};

        let active_model = ActiveModel {
            user_id: Set(new.user_id),
            text: Set(new.text),
            lat: Set(new.lat),
            lng: Set(new.lng),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active_model
            .insert(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(crate::domain::Address::from(model))
    }
}

/// Transaction-aware catalog repository.
///
/// Only lookups are needed inside a transaction: the association flow
/// verifies each purchased service exists before inserting line items.
pub struct TxBarberServiceRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxBarberServiceRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Find catalog entry by ID
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<crate::domain::BarberService>> {
        use super::repositories::entities::barber_service::Entity as BarberServiceEntity;
        use sea_orm::EntityTrait;

        let result = BarberServiceEntity::find_by_id(id)
            .one(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(crate::domain::BarberService::from))
    }
}

/// Transaction-aware booking line-item repository.
pub struct TxBookingItemRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxBookingItemRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Insert one line item per service id in a single batched statement.
    /// Returns the number of rows written.
    pub async fn insert_many(&self, booking_id: i32, service_ids: &[i32]) -> AppResult<u64> {
        use super::repositories::entities::booking_item::{ActiveModel, Entity as BookingItemEntity};
        use sea_orm::{EntityTrait, Set};

        let now = chrono::Utc::now();
        let rows: Vec<ActiveModel> = service_ids
            .iter()
            .map(|service_id| ActiveModel {
                booking_id: Set(booking_id),
                service_id: Set(*service_id),
                created_at: Set(now),
                ..Default::default()
            })
            .collect();

        BookingItemEntity::insert_many(rows)
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(service_ids.len() as u64)
    }
}
