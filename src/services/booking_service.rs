//! Booking service.
//!
//! Creation, caller-scoped history, the status state machine, and the
//! all-or-nothing attachment of purchased services to a booking.

use async_trait::async_trait;
use std::sync::Arc;

use super::parallel;
use crate::domain::{Booking, BookingAction};
use crate::errors::{AppError, AppResult};
use crate::infra::{Mailer, NewBooking, UnitOfWork};
use crate::types::PaginationParams;
use crate::utils::messages;

/// Booking service trait for dependency injection.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Create a booking in pending status.
    ///
    /// The referenced client, staff member and branch are all checked
    /// for existence before the insert, mirroring the checks the
    /// service-attachment path performs.
    async fn create_booking(&self, new: NewBooking) -> AppResult<Booking>;

    /// Get booking by ID
    async fn get_booking(&self, id: i32) -> AppResult<Booking>;

    /// Page through one client's bookings, newest first
    async fn history(
        &self,
        client_id: i32,
        params: PaginationParams,
    ) -> AppResult<(Vec<Booking>, u64)>;

    /// Apply a status action (confirm / complete / cancel), notifying
    /// the client on success
    async fn transition(&self, id: i32, action: BookingAction) -> AppResult<Booking>;

    /// Attach purchased services to a booking.
    ///
    /// All line items are written in one transaction; if any service id
    /// is unknown, nothing is persisted and the error names that id.
    /// Returns the number of rows written.
    async fn attach_services(&self, booking_id: i32, service_ids: Vec<i32>) -> AppResult<u64>;
}

/// Concrete implementation of BookingService using Unit of Work.
pub struct BookingManager<U: UnitOfWork> {
    uow: Arc<U>,
    mailer: Arc<Mailer>,
}

impl<U: UnitOfWork> BookingManager<U> {
    /// Create new booking service instance
    pub fn new(uow: Arc<U>, mailer: Arc<Mailer>) -> Self {
        Self { uow, mailer }
    }
}

#[async_trait]
impl<U: UnitOfWork> BookingService for BookingManager<U> {
    async fn create_booking(&self, new: NewBooking) -> AppResult<Booking> {
        // The three lookups are independent, so issue them concurrently.
        let users = self.uow.users();
        let branches = self.uow.branches();
        let (client, staff, branch) = parallel::join3(
            users.find_by_id(new.client_id),
            users.find_by_id(new.staff_id),
            branches.find_by_id(new.branch_id),
        )
        .await?;

        let client = client.ok_or_else(|| {
            AppError::bad_request(format!("Client with id {} does not exist", new.client_id))
        })?;
        let staff = staff.ok_or_else(|| {
            AppError::bad_request(format!("Staff with id {} does not exist", new.staff_id))
        })?;
        branch.ok_or_else(|| {
            AppError::bad_request(format!("Branch with id {} does not exist", new.branch_id))
        })?;

        if !client.role.is_client() {
            return Err(AppError::bad_request(
                "clientId must reference a client account",
            ));
        }
        if !staff.role.is_staff() {
            return Err(AppError::bad_request(
                "staffId must reference a staff account",
            ));
        }

        let booking = self.uow.bookings().create(new).await?;
        tracing::info!(booking_id = booking.id, "Booking created");
        Ok(booking)
    }

    async fn get_booking(&self, id: i32) -> AppResult<Booking> {
        self.uow
            .bookings()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn history(
        &self,
        client_id: i32,
        params: PaginationParams,
    ) -> AppResult<(Vec<Booking>, u64)> {
        self.uow.bookings().list_by_client(client_id, &params).await
    }

    async fn transition(&self, id: i32, action: BookingAction) -> AppResult<Booking> {
        let mut booking = self
            .uow
            .bookings()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        // Enforces the transition table before anything is written
        booking.apply(action)?;

        let updated = self.uow.bookings().set_status(id, booking.status).await?;

        tracing::info!(
            booking_id = updated.id,
            status = %updated.status,
            "Booking status changed"
        );

        // Tell the client what happened, in-app and by email
        let client = self
            .uow
            .users()
            .find_by_id(updated.client_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let title = messages::booking_status_title(updated.status);
        let body = messages::booking_status_body(updated.status, updated.start_at);

        self.uow
            .notifications()
            .create(client.id, title.clone(), body.clone())
            .await?;
        self.mailer.send(&client.email, &title, &body).await?;

        Ok(updated)
    }

    async fn attach_services(&self, booking_id: i32, service_ids: Vec<i32>) -> AppResult<u64> {
        if service_ids.is_empty() {
            return Err(AppError::validation(
                "serviceId must contain at least one service id",
            ));
        }

        // Pre-check before opening the transaction: no service lookups
        // are issued for a booking that does not exist.
        self.uow
            .bookings()
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| {
                AppError::bad_request(format!("Booking with id {} does not exist", booking_id))
            })?;

        let inserted = self
            .uow
            .transaction(|ctx| {
                Box::pin(async move {
                    // Each id is looked up on its own so the error can
                    // name the exact offender; the first miss rolls the
                    // whole transaction back.
                    for service_id in &service_ids {
                        ctx.barber_services()
                            .find_by_id(*service_id)
                            .await?
                            .ok_or_else(|| {
                                AppError::bad_request(format!(
                                    "Service with id {} does not exist",
                                    service_id
                                ))
                            })?;
                    }

                    ctx.booking_items()
                        .insert_many(booking_id, &service_ids)
                        .await
                })
            })
            .await?;

        tracing::info!(
            booking_id = booking_id,
            services = inserted,
            "Services attached to booking"
        );

        Ok(inserted)
    }
}
