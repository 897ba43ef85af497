//! Address service.
//!
//! Addresses are owned by their user; every mutation checks ownership
//! before touching the row.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Address;
use crate::errors::{AppError, AppResult};
use crate::infra::{NewAddress, UnitOfWork};

/// Address service trait for dependency injection.
#[async_trait]
pub trait AddressService: Send + Sync {
    /// List the caller's saved addresses
    async fn list_addresses(&self, user_id: i32) -> AppResult<Vec<Address>>;

    /// Save a new address for the caller
    async fn create_address(&self, new: NewAddress) -> AppResult<Address>;

    /// Update one of the caller's addresses
    async fn update_address(
        &self,
        user_id: i32,
        id: i32,
        text: Option<String>,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> AppResult<Address>;

    /// Delete one of the caller's addresses
    async fn delete_address(&self, user_id: i32, id: i32) -> AppResult<()>;
}

/// Concrete implementation of AddressService using Unit of Work.
pub struct AddressManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AddressManager<U> {
    /// Create new address service instance
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Load an address and verify it belongs to the caller.
    async fn owned_address(&self, user_id: i32, id: i32) -> AppResult<Address> {
        let address = self
            .uow
            .addresses()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        if address.user_id != user_id {
            return Err(AppError::Forbidden);
        }

        Ok(address)
    }
}

#[async_trait]
impl<U: UnitOfWork> AddressService for AddressManager<U> {
    async fn list_addresses(&self, user_id: i32) -> AppResult<Vec<Address>> {
        self.uow.addresses().list_by_user(user_id).await
    }

    async fn create_address(&self, new: NewAddress) -> AppResult<Address> {
        self.uow.addresses().create(new).await
    }

    async fn update_address(
        &self,
        user_id: i32,
        id: i32,
        text: Option<String>,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> AppResult<Address> {
        self.owned_address(user_id, id).await?;
        self.uow.addresses().update(id, text, lat, lng).await
    }

    async fn delete_address(&self, user_id: i32, id: i32) -> AppResult<()> {
        self.owned_address(user_id, id).await?;
        self.uow.addresses().delete(id).await
    }
}
