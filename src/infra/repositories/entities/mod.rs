//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod address;
pub mod barber_service;
pub mod booking;
pub mod booking_item;
pub mod branch;
pub mod favorite;
pub mod notification;
pub mod review;
pub mod user;
